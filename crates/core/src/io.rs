//! Font file I/O.

use std::{
    fs::{read, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{Pattern, glob};

/// A font file patched in place.
#[derive(Debug, Clone)]
pub struct FontFile {
    path: PathBuf,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Final path component, lossily decoded.
    pub fn file_name(&self) -> String {
        self.path.file_name().unwrap_or_default().to_string_lossy().into_owned()
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read font: {}", self.path.display()))
    }

    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        write(&self.path, data)
            .with_context(|| format!("Failed to write font: {}", self.path.display()))
    }

    /// Read, transform, and write back to the same file.
    ///
    /// Nothing is written when `f` fails.
    pub fn transform(&self, f: impl FnOnce(&[u8]) -> Result<Vec<u8>>) -> Result<()> {
        let data = self.read()?;
        let new_data = f(&data)
            .with_context(|| format!("Failed to patch font: {}", self.path.display()))?;
        self.write(new_data)
    }
}

/// Fonts in `dir` with the given extension, sorted by path.
pub fn list_fonts(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let dir_str = dir.to_str().context("Invalid directory path")?;
    let pattern = format!("{}/*.{extension}", Pattern::escape(dir_str));
    let mut fonts: Vec<PathBuf> = glob(&pattern)
        .with_context(|| format!("Failed to glob pattern: {pattern}"))?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    fonts.sort();
    Ok(fonts)
}
