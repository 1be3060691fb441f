//! Error types for font metadata patching.

use std::result;

use read_fonts::{ReadError, types::Tag};
use write_fonts::BuilderError;

/// Errors that can occur while projecting metadata onto a font.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse font: {0}")]
    Parse(#[from] ReadError),

    #[error("failed to build font: {0}")]
    Build(#[from] BuilderError),

    #[error("no {0} table in font")]
    MissingTable(Tag),

    #[error("no '{0}' axis in STAT")]
    MissingAxis(Tag),

    #[error("no STAT axis value found for '{0}' to patch")]
    NoAxisValues(Tag),

    #[error("no free name ID left for '{0}'")]
    NameIdsExhausted(String),
}

pub type Result<T> = result::Result<T, Error>;

/// Turn a failed table lookup into [`Error::MissingTable`] when the table is
/// absent, keeping other parse failures as they are.
pub(crate) fn require<T>(table: result::Result<T, ReadError>, tag: Tag) -> Result<T> {
    table.map_err(|err| match err {
        ReadError::TableIsMissing(_) => Error::MissingTable(tag),
        err => Error::Parse(err),
    })
}
