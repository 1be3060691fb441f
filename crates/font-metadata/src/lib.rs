//! Font metadata projection: style bits, STAT and italic angle.
//!
//! Edits are collected in a [`FontPatch`] and written in one rewrite of the
//! font, so a failing edit never leaves a half-patched file behind.

mod error;
mod patch;
mod stat;
mod style_bits;

pub use error::{Error, Result};
pub use patch::{FontPatch, StatAction};
pub use stat::{
    AxisValueEntry, ITAL, StatAxis, StatLayout, WGHT, normalize_elision, relabel_axis,
    weight_display_name,
};
pub use style_bits::StyleBits;
