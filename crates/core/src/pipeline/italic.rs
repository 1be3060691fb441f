use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::{
    config::{FONT_EXTENSION, ITALIC_ANGLE},
    io::{FontFile, list_fonts},
    pipeline::PatchReport,
    styles::{StyleBucket, StyleSpec},
};

/// Apply names and italic technicals to one font.
pub fn patch_italic_font(file: &FontFile, spec: &StyleSpec) -> Result<()> {
    let patch = spec.italic_patch(ITALIC_ANGLE);
    file.transform(|data| Ok(patch.apply(data)?))?;
    info!(
        "{}: family '{}', subfamily '{}'",
        file.file_name(),
        spec.naming.family,
        spec.naming.subfamily
    );
    Ok(())
}

/// Patch the italic variable font and every static italic in `static_dir`.
///
/// The variable font always gets the plain "Italic" style of the base
/// family; statics are classified by filename. A missing variable font or
/// directory is reported and the rest of the pass still runs.
pub fn patch_italic_fonts(vf_path: &Path, static_dir: &Path, family: &str) -> Result<PatchReport> {
    let mut report = PatchReport::default();

    if vf_path.is_file() {
        let file = FontFile::new(vf_path);
        patch_italic_font(&file, &StyleSpec::new(family, StyleBucket::Italic))?;
        println!("Patched {}", file.file_name());
        report.patched.push(vf_path.to_path_buf());
    } else {
        warn!("italic variable font not found: {}", vf_path.display());
        println!("Skipped {} (not found)", vf_path.display());
        report.missing.push(vf_path.to_path_buf());
    }

    if !static_dir.is_dir() {
        warn!("static font directory not found: {}", static_dir.display());
        println!("Skipped {} (not found)", static_dir.display());
        report.missing.push(static_dir.to_path_buf());
        return Ok(report);
    }

    for path in list_fonts(static_dir, FONT_EXTENSION)? {
        let file = FontFile::new(&path);
        let filename = file.file_name();
        if !filename.contains("Italic") {
            continue;
        }

        let spec = StyleSpec::from_filename(family, &filename);
        patch_italic_font(&file, &spec)?;
        println!("Patched {filename} ({})", spec.bucket);
        report.patched.push(path);
    }

    println!("Patched {} italic fonts", report.patched.len());
    Ok(report)
}
