//! Name-table strings projected from a style bucket.

use miranda_font_ops::{NamePatch, NameSlot};

use crate::styles::StyleBucket;

const NAME_ID_FAMILY: u16 = 1;
const NAME_ID_SUBFAMILY: u16 = 2;
const NAME_ID_FULL_NAME: u16 = 4;
const NAME_ID_POSTSCRIPT: u16 = 6;
const NAME_ID_TYPO_FAMILY: u16 = 16;
const NAME_ID_TYPO_SUBFAMILY: u16 = 17;

/// Typographic family/subfamily pair (name IDs 16 and 17).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographicNames {
    pub family: String,
    pub subfamily: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNaming {
    pub family: String,
    pub subfamily: String,
    /// Only set for non-RIBBI styles.
    pub typographic: Option<TypographicNames>,
}

impl FontNaming {
    pub fn new(base_family: &str, bucket: StyleBucket) -> Self {
        let family = match bucket.family_suffix() {
            Some(suffix) => format!("{base_family} {suffix}"),
            None => base_family.to_string(),
        };

        let typographic = (!bucket.is_ribbi()).then(|| TypographicNames {
            family: base_family.to_string(),
            subfamily: bucket.label().to_string(),
        });

        Self { family, subfamily: bucket.subfamily().to_string(), typographic }
    }

    /// "Miranda Sans Bold", or just "Miranda Sans" for the Regular style.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.family, self.subfamily).replace(" Regular", "")
    }

    /// "MirandaSans-Bold", or "MirandaSans" for the Regular style.
    pub fn postscript_name(&self) -> String {
        let name = format!("{}-{}", self.family, self.subfamily).replace(' ', "");
        let name = name.replace("Regular", "");
        name.trim_end_matches('-').to_string()
    }

    /// The label naming this font's weight, from the typographic subfamily
    /// when there is one.
    pub fn style_label(&self) -> &str {
        self.typographic.as_ref().map_or(&self.subfamily, |t| &t.subfamily)
    }

    /// Name edits for IDs 1, 2, 4, 6, 16 and 17.
    ///
    /// IDs 1-6 are rewritten on every record; typographic names are set
    /// afresh on the default platforms.
    pub fn name_patch(&self) -> NamePatch {
        let (typo_family, typo_subfamily) = match &self.typographic {
            Some(t) => {
                (NameSlot::Replace(t.family.clone()), NameSlot::Replace(t.subfamily.clone()))
            }
            None => (NameSlot::Absent, NameSlot::Absent),
        };

        NamePatch::new()
            .with(NAME_ID_FAMILY, NameSlot::Present(self.family.clone()))
            .with(NAME_ID_SUBFAMILY, NameSlot::Present(self.subfamily.clone()))
            .with(NAME_ID_FULL_NAME, NameSlot::Present(self.full_name()))
            .with(NAME_ID_POSTSCRIPT, NameSlot::Present(self.postscript_name()))
            .with(NAME_ID_TYPO_FAMILY, typo_family)
            .with(NAME_ID_TYPO_SUBFAMILY, typo_subfamily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "Miranda Sans";

    #[test]
    fn test_regular_names() {
        let naming = FontNaming::new(BASE, StyleBucket::Regular);
        assert_eq!(naming.family, "Miranda Sans");
        assert_eq!(naming.subfamily, "Regular");
        assert_eq!(naming.full_name(), "Miranda Sans");
        assert_eq!(naming.postscript_name(), "MirandaSans");
        assert!(naming.typographic.is_none());
    }

    #[test]
    fn test_semibold_italic_names() {
        let naming = FontNaming::new(BASE, StyleBucket::SemiBoldItalic);
        assert_eq!(naming.family, "Miranda Sans SemiBold");
        assert_eq!(naming.subfamily, "Italic");
        assert_eq!(naming.full_name(), "Miranda Sans SemiBold Italic");
        assert_eq!(naming.postscript_name(), "MirandaSansSemiBold-Italic");
        assert_eq!(
            naming.typographic,
            Some(TypographicNames {
                family: "Miranda Sans".to_string(),
                subfamily: "SemiBold Italic".to_string(),
            })
        );
        assert_eq!(naming.style_label(), "SemiBold Italic");
    }

    #[test]
    fn test_medium_drops_regular() {
        let naming = FontNaming::new(BASE, StyleBucket::Medium);
        assert_eq!(naming.full_name(), "Miranda Sans Medium");
        assert_eq!(naming.postscript_name(), "MirandaSansMedium");
    }

    #[test]
    fn test_bold_italic_names() {
        let naming = FontNaming::new(BASE, StyleBucket::BoldItalic);
        assert_eq!(naming.full_name(), "Miranda Sans Bold Italic");
        assert_eq!(naming.postscript_name(), "MirandaSans-BoldItalic");
        assert_eq!(naming.style_label(), "Bold Italic");
    }

    #[test]
    fn test_generated_names_are_clean() {
        for bucket in StyleBucket::ALL {
            let naming = FontNaming::new(BASE, bucket);
            assert!(!naming.full_name().contains(" Regular"), "{bucket}");
            let ps = naming.postscript_name();
            assert!(!ps.contains(' ') && !ps.contains("Regular"), "{ps}");
            assert!(!ps.ends_with('-'), "{ps}");
        }
    }

    #[test]
    fn test_name_patch_typographic_slots() {
        let ribbi = FontNaming::new(BASE, StyleBucket::Bold).name_patch();
        assert_eq!(ribbi.get(16), Some(&NameSlot::Absent));
        assert_eq!(ribbi.get(17), Some(&NameSlot::Absent));
        assert_eq!(ribbi.get(4), Some(&NameSlot::Present("Miranda Sans Bold".to_string())));

        let medium = FontNaming::new(BASE, StyleBucket::MediumItalic).name_patch();
        assert_eq!(medium.get(16), Some(&NameSlot::Replace("Miranda Sans".to_string())));
        assert_eq!(medium.get(17), Some(&NameSlot::Replace("Medium Italic".to_string())));
    }
}
