//! Miranda Core - style resolution and metadata patch passes for Miranda Sans.

pub mod config;
pub mod io;
pub mod naming;
pub mod pipeline;
pub mod styles;

pub use miranda_font_metadata::{FontPatch, StatAction, StyleBits};
pub use naming::{FontNaming, TypographicNames};
pub use pipeline::{
    PatchReport, Resolution, patch_italic_fonts, patch_static_fonts, patch_weight_label, resolve,
};
pub use styles::{MIRANDA_SANS, Registry, RegistryEntry, StyleBucket, StyleFlags, StyleSpec};
