//! Generic font table manipulation utilities.

mod name;

pub use name::{MAC_ROMAN, NameEntry, NamePatch, NameSlot, NameTable, PlatformKey, WINDOWS_EN_US};

use read_fonts::{FontRef, ReadError};
use write_fonts::FontBuilder;

/// Rewrite font data by applying a transformation function.
///
/// Copies all tables from the source font, then calls `f` to modify or add tables.
/// The function receives a reference to the source font and a mutable builder
/// that already contains all original tables, so any table added by `f`
/// replaces the original one with the same tag.
///
/// The error type is chosen by the caller; it only has to absorb the parse
/// error of the source font.
pub fn rewrite_font<E>(
    data: &[u8],
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<(), E>,
) -> Result<Vec<u8>, E>
where
    E: From<ReadError>,
{
    let font = FontRef::new(data)?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    f(&font, &mut builder)?;
    Ok(builder.build())
}
