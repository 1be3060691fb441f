//! Style buckets and filename classification.

use std::fmt;

/// Style words found in a font identity (usually its filename).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub is_italic: bool,
    pub is_bold: bool,
    pub is_medium: bool,
    pub is_semibold: bool,
}

impl StyleFlags {
    /// Detect style words by case-sensitive substring match.
    ///
    /// "SemiBold" also sets `is_bold`, since the word contains "Bold".
    pub fn from_name(name: &str) -> Self {
        Self {
            is_italic: name.contains("Italic"),
            is_bold: name.contains("Bold"),
            is_medium: name.contains("Medium"),
            is_semibold: name.contains("SemiBold"),
        }
    }

    /// The bucket these flags fall into.
    ///
    /// SemiBold and Medium take precedence over Bold; a name with none of
    /// the weight words is Regular or Italic.
    pub const fn bucket(self) -> StyleBucket {
        match (self.is_semibold, self.is_medium, self.is_bold, self.is_italic) {
            (true, _, _, false) => StyleBucket::SemiBold,
            (true, _, _, true) => StyleBucket::SemiBoldItalic,
            (false, true, _, false) => StyleBucket::Medium,
            (false, true, _, true) => StyleBucket::MediumItalic,
            (false, false, true, false) => StyleBucket::Bold,
            (false, false, true, true) => StyleBucket::BoldItalic,
            (false, false, false, false) => StyleBucket::Regular,
            (false, false, false, true) => StyleBucket::Italic,
        }
    }
}

/// The eight styles a Miranda Sans static font can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleBucket {
    Regular,
    Italic,
    Bold,
    BoldItalic,
    Medium,
    MediumItalic,
    SemiBold,
    SemiBoldItalic,
}

impl StyleBucket {
    pub const ALL: [Self; 8] = [
        Self::Regular,
        Self::Italic,
        Self::Bold,
        Self::BoldItalic,
        Self::Medium,
        Self::MediumItalic,
        Self::SemiBold,
        Self::SemiBoldItalic,
    ];

    /// Classify a font by its filename.
    pub fn classify(filename: &str) -> Self {
        StyleFlags::from_name(filename).bucket()
    }

    pub const fn is_italic(self) -> bool {
        matches!(
            self,
            Self::Italic | Self::BoldItalic | Self::MediumItalic | Self::SemiBoldItalic
        )
    }

    /// Bold in the RIBBI sense; SemiBold is not bold.
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Regular, Italic, Bold and Bold Italic live in the base family;
    /// every other style needs typographic names.
    pub const fn is_ribbi(self) -> bool {
        matches!(self, Self::Regular | Self::Italic | Self::Bold | Self::BoldItalic)
    }

    /// Nominal `wght` value.
    pub const fn weight(self) -> u16 {
        match self {
            Self::Regular | Self::Italic => 400,
            Self::Medium | Self::MediumItalic => 500,
            Self::SemiBold | Self::SemiBoldItalic => 600,
            Self::Bold | Self::BoldItalic => 700,
        }
    }

    /// The weight word appended to the family name of non-RIBBI styles.
    pub const fn family_suffix(self) -> Option<&'static str> {
        match self {
            Self::Medium | Self::MediumItalic => Some("Medium"),
            Self::SemiBold | Self::SemiBoldItalic => Some("SemiBold"),
            _ => None,
        }
    }

    /// Legacy subfamily name (name ID 2).
    pub const fn subfamily(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::BoldItalic => "Bold Italic",
            _ if self.is_italic() => "Italic",
            _ => "Regular",
        }
    }

    /// Human readable style label, e.g. "SemiBold Italic".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Italic => "Italic",
            Self::Bold => "Bold",
            Self::BoldItalic => "Bold Italic",
            Self::Medium => "Medium",
            Self::MediumItalic => "Medium Italic",
            Self::SemiBold => "SemiBold",
            Self::SemiBoldItalic => "SemiBold Italic",
        }
    }

    /// Style part of the canonical filename, e.g. "SemiBoldItalic".
    pub const fn file_style(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Italic => "Italic",
            Self::Bold => "Bold",
            Self::BoldItalic => "BoldItalic",
            Self::Medium => "Medium",
            Self::MediumItalic => "MediumItalic",
            Self::SemiBold => "SemiBold",
            Self::SemiBoldItalic => "SemiBoldItalic",
        }
    }
}

impl fmt::Display for StyleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
