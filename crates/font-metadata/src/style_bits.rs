//! `OS/2.fsSelection` and `head.macStyle` style bits.

use write_fonts::tables::{head::MacStyle, os2::SelectionFlags};

/// The regular/bold/italic triple a font advertises in its style bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleBits {
    pub regular: bool,
    pub bold: bool,
    pub italic: bool,
}

impl StyleBits {
    pub const REGULAR: Self = Self { regular: true, bold: false, italic: false };
    pub const ITALIC: Self = Self { regular: false, bold: false, italic: true };
    pub const BOLD: Self = Self { regular: false, bold: true, italic: false };
    pub const BOLD_ITALIC: Self = Self { regular: false, bold: true, italic: true };

    /// Bits for a font that is (or is not) bold and italic; regular is set
    /// only when neither is.
    pub const fn new(bold: bool, italic: bool) -> Self {
        Self { regular: !bold && !italic, bold, italic }
    }

    /// Exactly one of regular, bold, italic, bold italic holds.
    pub const fn is_consistent(&self) -> bool {
        self.regular != (self.bold || self.italic)
    }

    /// Project onto `fsSelection`, keeping every bit other than
    /// REGULAR, BOLD and ITALIC.
    ///
    /// Regular wins: when set, bold and italic are cleared regardless of
    /// their own values.
    pub fn selection(&self, current: SelectionFlags) -> SelectionFlags {
        let mut flags = current;
        if self.regular {
            flags.insert(SelectionFlags::REGULAR);
            flags.remove(SelectionFlags::BOLD | SelectionFlags::ITALIC);
        } else {
            flags.remove(SelectionFlags::REGULAR);
            if self.bold {
                flags.insert(SelectionFlags::BOLD);
            } else {
                flags.remove(SelectionFlags::BOLD);
            }
            if self.italic {
                flags.insert(SelectionFlags::ITALIC);
            } else {
                flags.remove(SelectionFlags::ITALIC);
            }
        }
        flags
    }

    /// Project onto `macStyle`, keeping every bit other than BOLD and ITALIC.
    pub fn mac_style(&self, current: MacStyle) -> MacStyle {
        let mut style = current;
        if self.bold {
            style.insert(MacStyle::BOLD);
        } else {
            style.remove(MacStyle::BOLD);
        }
        if self.italic {
            style.insert(MacStyle::ITALIC);
        } else {
            style.remove(MacStyle::ITALIC);
        }
        style
    }
}
