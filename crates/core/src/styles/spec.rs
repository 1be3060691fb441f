//! Everything a patch pass writes for one style.

use miranda_font_metadata::{FontPatch, StatAction, StatLayout, StyleBits};

use crate::{naming::FontNaming, styles::StyleBucket};

/// Names, style bits and STAT data of one style, all derived from its
/// bucket so they cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSpec {
    pub bucket: StyleBucket,
    pub weight: u16,
    pub naming: FontNaming,
    pub bits: StyleBits,
}

impl StyleSpec {
    pub fn new(base_family: &str, bucket: StyleBucket) -> Self {
        Self {
            bucket,
            weight: bucket.weight(),
            naming: FontNaming::new(base_family, bucket),
            bits: StyleBits::new(bucket.is_bold(), bucket.is_italic()),
        }
    }

    /// Classify `filename` and project the result.
    pub fn from_filename(base_family: &str, filename: &str) -> Self {
        Self::new(base_family, StyleBucket::classify(filename))
    }

    /// Two-axis STAT layout: the weight labelled with the style name minus
    /// "Italic", plus the linked italic value.
    pub fn stat_layout(&self) -> StatLayout {
        StatLayout::weight_and_italic(
            f64::from(self.weight),
            self.naming.style_label(),
            self.bits.italic,
        )
    }

    /// Names, style bits and a rebuilt STAT.
    pub fn static_patch(&self) -> FontPatch {
        FontPatch::new()
            .with_names(self.naming.name_patch())
            .with_style_bits(self.bits)
            .with_stat(StatAction::Build(self.stat_layout()))
    }

    /// Names plus the italic technicals: elision fixes on an existing STAT
    /// and, for italic styles, the italic angle.
    pub fn italic_patch(&self, italic_angle: f64) -> FontPatch {
        let patch = FontPatch::new()
            .with_names(self.naming.name_patch())
            .with_stat(StatAction::NormalizeElision);
        if self.bits.italic { patch.with_italic_angle(italic_angle) } else { patch }
    }
}
