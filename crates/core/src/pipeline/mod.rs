//! Patch passes over the built fonts.

mod italic;
mod resolve;
mod stat_label;
mod static_fonts;

use std::path::PathBuf;

pub use italic::{patch_italic_font, patch_italic_fonts};
pub use resolve::{Resolution, resolve};
pub use stat_label::patch_weight_label;
pub use static_fonts::{patch_static_font, patch_static_fonts};

/// What a pass did, file by file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub patched: Vec<PathBuf>,
    /// Files seen but left alone.
    pub skipped: Vec<PathBuf>,
    /// Expected files or directories that do not exist.
    pub missing: Vec<PathBuf>,
}
