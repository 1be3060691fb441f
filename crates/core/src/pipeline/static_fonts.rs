use std::path::Path;

use anyhow::Result;
use log::{debug, info, warn};

use crate::{
    config::FONT_EXTENSION,
    io::{FontFile, list_fonts},
    pipeline::PatchReport,
    styles::{Registry, StyleSpec},
};

/// Apply names, style bits and a fresh STAT to one static font.
pub fn patch_static_font(file: &FontFile, spec: &StyleSpec) -> Result<()> {
    let patch = spec.static_patch();
    debug!("{}: {patch:?}", file.file_name());
    file.transform(|data| Ok(patch.apply(data)?))
}

/// Patch every registered static font found in `dir`.
///
/// The registry is validated before any file is opened. Files the registry
/// does not know are skipped, and registry entries with no file on disk are
/// reported as missing. A missing `dir` is reported and nothing is patched.
pub fn patch_static_fonts(dir: &Path, registry: &Registry) -> Result<PatchReport> {
    registry.validate()?;

    let mut report = PatchReport::default();

    if !dir.is_dir() {
        warn!("static font directory not found: {}", dir.display());
        println!("Skipped {} (not found)", dir.display());
        report.missing.push(dir.to_path_buf());
        return Ok(report);
    }

    for path in list_fonts(dir, FONT_EXTENSION)? {
        let file = FontFile::new(&path);
        let filename = file.file_name();

        let Some(entry) = registry.get(&filename) else {
            println!("Skipped {filename} (not in registry)");
            report.skipped.push(path);
            continue;
        };

        let spec = registry.spec(entry);
        patch_static_font(&file, &spec)?;
        info!(
            "{filename}: {} ({}), weight {}",
            spec.naming.full_name(),
            spec.naming.postscript_name(),
            spec.weight
        );
        println!("Patched {filename}");
        report.patched.push(path);
    }

    for filename in registry.filenames() {
        let path = dir.join(filename);
        if !path.is_file() {
            println!("Missing {filename}");
            report.missing.push(path);
        }
    }

    println!(
        "Patched {} static fonts in {}/ ({} skipped, {} missing)",
        report.patched.len(),
        dir.display(),
        report.skipped.len(),
        report.missing.len()
    );
    Ok(report)
}
