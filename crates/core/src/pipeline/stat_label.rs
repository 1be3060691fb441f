use std::path::Path;

use anyhow::Result;
use miranda_font_metadata::{FontPatch, StatAction, WGHT};

use crate::{config::WEIGHT_LABEL_NAME_ID, io::FontFile};

/// Point every STAT weight value of the font at `label`, stored under the
/// dedicated weight-label name ID, and make it the elided fallback name.
///
/// Fails without touching the file when the font has no STAT, no `wght`
/// axis, or no value on that axis.
pub fn patch_weight_label(path: &Path, label: &str) -> Result<()> {
    let file = FontFile::new(path);
    let patch = FontPatch::new().with_stat(StatAction::RelabelAxis {
        axis: WGHT,
        name_id: WEIGHT_LABEL_NAME_ID,
        label: label.to_string(),
    });

    file.transform(|data| Ok(patch.apply(data)?))?;
    println!(
        "Patched STAT weight label in {}: name ID {WEIGHT_LABEL_NAME_ID} = '{label}'",
        file.file_name()
    );
    Ok(())
}
