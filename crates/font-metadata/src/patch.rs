//! One-pass application of name, style bit, STAT and italic edits.

use log::debug;
use miranda_font_ops::{NamePatch, NameSlot, NameTable, rewrite_font};
use read_fonts::{
    FontRef, TableProvider,
    types::{Fixed, NameId, Tag},
};
use write_fonts::{
    FontBuilder,
    from_obj::ToOwnedTable,
    tables::{head::Head, os2::Os2, post::Post, stat::Stat},
};

use crate::{
    error::{Error, Result, require},
    stat::{StatLayout, normalize_elision, relabel_axis},
    style_bits::StyleBits,
};

const NAME: Tag = Tag::new(b"name");
const OS2: Tag = Tag::new(b"OS/2");
const HEAD: Tag = Tag::new(b"head");
const STAT: Tag = Tag::new(b"STAT");

/// What to do with the STAT table.
#[derive(Debug, Clone, PartialEq)]
pub enum StatAction {
    /// Replace STAT with a freshly built table.
    Build(StatLayout),
    /// Point every value of `axis` at a neutral `label` stored under
    /// `name_id`. Requires an existing STAT with that axis.
    RelabelAxis { axis: Tag, name_id: u16, label: String },
    /// Fix elision flags of boolean values in an existing STAT, if any.
    NormalizeElision,
}

/// A set of metadata edits applied to a font in a single rewrite.
///
/// Either every edit lands or, on error, no output is produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontPatch {
    pub names: Option<NamePatch>,
    pub style_bits: Option<StyleBits>,
    pub stat: Option<StatAction>,
    pub italic_angle: Option<f64>,
}

impl FontPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(mut self, names: NamePatch) -> Self {
        self.names = Some(names);
        self
    }

    pub fn with_style_bits(mut self, bits: StyleBits) -> Self {
        self.style_bits = Some(bits);
        self
    }

    pub fn with_stat(mut self, action: StatAction) -> Self {
        self.stat = Some(action);
        self
    }

    pub fn with_italic_angle(mut self, angle: f64) -> Self {
        self.italic_angle = Some(angle);
        self
    }

    fn touches_names(&self) -> bool {
        self.names.is_some()
            || matches!(self.stat, Some(StatAction::Build(_) | StatAction::RelabelAxis { .. }))
    }

    /// Apply this patch to font data.
    ///
    /// `name`, `OS/2` and `head` are required when the patch edits them;
    /// STAT is required for [`StatAction::RelabelAxis`]. `post` is only
    /// touched when present.
    pub fn apply(&self, data: &[u8]) -> Result<Vec<u8>> {
        rewrite_font(data, |font, builder| self.apply_tables(font, builder))
    }

    fn apply_tables(&self, font: &FontRef, builder: &mut FontBuilder) -> Result<()> {
        let mut names = if self.touches_names() {
            Some(require(NameTable::from_font(font), NAME)?)
        } else {
            None
        };

        if let (Some(names), Some(patch)) = (names.as_mut(), self.names.as_ref()) {
            names.apply(patch);
        }

        if let Some(bits) = self.style_bits {
            let mut os2: Os2 = require(font.os2(), OS2)?.to_owned_table();
            os2.fs_selection = bits.selection(os2.fs_selection);
            builder.add_table(&os2)?;

            let mut head: Head = require(font.head(), HEAD)?.to_owned_table();
            head.mac_style = bits.mac_style(head.mac_style);
            builder.add_table(&head)?;
        }

        match &self.stat {
            Some(StatAction::Build(layout)) => {
                let names = names.as_mut().ok_or(Error::MissingTable(NAME))?;
                let stat = layout.build(names)?;
                builder.add_table(&stat)?;
            }
            Some(StatAction::RelabelAxis { axis, name_id, label }) => {
                let names = names.as_mut().ok_or(Error::MissingTable(NAME))?;
                let mut stat: Stat = require(font.stat(), STAT)?.to_owned_table();
                relabel_axis(&mut stat, *axis, NameId::new(*name_id))?;
                names.apply(&NamePatch::new().with(*name_id, NameSlot::Present(label.clone())));
                builder.add_table(&stat)?;
            }
            Some(StatAction::NormalizeElision) => {
                if let Ok(stat) = font.stat() {
                    let mut stat: Stat = stat.to_owned_table();
                    let count = normalize_elision(&mut stat);
                    debug!("normalized elision on {count} STAT values");
                    builder.add_table(&stat)?;
                }
            }
            None => {}
        }

        if let Some(angle) = self.italic_angle
            && let Ok(post) = font.post()
        {
            let mut post: Post = post.to_owned_table();
            post.italic_angle = Fixed::from_f64(angle);
            builder.add_table(&post)?;
        }

        if let Some(names) = names {
            builder.add_table(&names.to_table())?;
        }

        Ok(())
    }
}
