mod common;

use std::fs;

use common::{FontSpec, ITAL, WGHT, build_font, snapshot, write_font};
use miranda_core::{
    config::{WEIGHT_LABEL, WEIGHT_LABEL_NAME_ID},
    patch_weight_label,
};

#[test]
fn test_weight_values_point_at_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MirandaSans-Italic.ttf");
    write_font(&path, FontSpec { subfamily: "Italic", ..FontSpec::default() });

    patch_weight_label(&path, WEIGHT_LABEL).unwrap();

    let font = snapshot(&path);
    assert_eq!(font.names.get(WEIGHT_LABEL_NAME_ID), Some("Regular"));
    assert_eq!(font.names.strings(WEIGHT_LABEL_NAME_ID).count(), 2);
    assert_eq!(font.elided_fallback, Some(WEIGHT_LABEL_NAME_ID));

    for value in font.values.iter().filter(|v| v.axis == WGHT) {
        assert_eq!(value.name, "Regular");
    }
    // Other axes keep their labels, and ID 2 keeps its text.
    let italic = font.values.iter().find(|v| v.axis == ITAL).unwrap();
    assert_eq!(italic.name, "Italic");
    assert_eq!(font.names.get(2), Some("Italic"));
}

#[test]
fn test_missing_stat_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MirandaSans-Italic.ttf");
    let spec = FontSpec { with_stat: false, ..FontSpec::default() };
    write_font(&path, spec);

    let err = patch_weight_label(&path, WEIGHT_LABEL).unwrap_err();
    assert!(format!("{err:#}").contains("STAT"), "{err:#}");
    assert_eq!(fs::read(&path).unwrap(), build_font(spec));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(patch_weight_label(&dir.path().join("nope.ttf"), WEIGHT_LABEL).is_err());
}
