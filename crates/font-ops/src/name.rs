//! Owned, editable view of the `name` table.

use std::collections::BTreeMap;

use log::debug;
use read_fonts::{FontRef, ReadError, TableProvider, types::NameId};
use write_fonts::tables::name::{Name, NameRecord};

/// First name ID available for font-specific strings (STAT labels etc).
const FIRST_FONT_SPECIFIC_NAME_ID: u16 = 256;

/// A `(platform, encoding, language)` triple identifying one name record slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformKey {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
}

impl PlatformKey {
    pub const fn new(platform_id: u16, encoding_id: u16, language_id: u16) -> Self {
        Self { platform_id, encoding_id, language_id }
    }
}

/// Windows, Unicode BMP, English (US).
pub const WINDOWS_EN_US: PlatformKey = PlatformKey::new(3, 1, 0x0409);

/// Macintosh, Roman, English.
pub const MAC_ROMAN: PlatformKey = PlatformKey::new(1, 0, 0);

/// Platforms that every explicitly set name ID gets a record for.
const DEFAULT_PLATFORMS: [PlatformKey; 2] = [WINDOWS_EN_US, MAC_ROMAN];

/// A single decoded name record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub key: PlatformKey,
    pub name_id: u16,
    pub value: String,
}

/// Desired state of one name ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSlot {
    /// Every record with this ID is dropped.
    Absent,
    /// Every existing record with this ID carries the value, and the default
    /// platforms are guaranteed to have one.
    Present(String),
    /// Every existing record with this ID is dropped, then the value is set on
    /// the default platforms only.
    Replace(String),
}

/// A set of name ID edits applied in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePatch {
    slots: BTreeMap<u16, NameSlot>,
}

impl NamePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`NamePatch::set`].
    pub fn with(mut self, name_id: u16, slot: NameSlot) -> Self {
        self.set(name_id, slot);
        self
    }

    /// Set the desired state of `name_id`, replacing any earlier one.
    pub fn set(&mut self, name_id: u16, slot: NameSlot) {
        self.slots.insert(name_id, slot);
    }

    /// The slot set for `name_id`, if any.
    pub fn get(&self, name_id: u16) -> Option<&NameSlot> {
        self.slots.get(&name_id)
    }

    /// Slots in ascending name ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &NameSlot)> {
        self.slots.iter().map(|(id, slot)| (*id, slot))
    }
}

/// Owned copy of a font's name records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: Vec<NameEntry>,
}

impl NameTable {
    /// Decode all records of the font's `name` table.
    ///
    /// Records whose string cannot be decoded are dropped.
    pub fn from_font(font: &FontRef) -> Result<Self, ReadError> {
        let name = font.name()?;
        let mut entries = Vec::new();

        for record in name.name_record() {
            let value = match record.string(name.string_data()) {
                Ok(s) => s.chars().collect::<String>(),
                Err(_) => {
                    debug!("dropping undecodable name record {}", record.name_id().to_u16());
                    continue;
                }
            };

            entries.push(NameEntry {
                key: PlatformKey::new(
                    record.platform_id(),
                    record.encoding_id(),
                    record.language_id(),
                ),
                name_id: record.name_id().to_u16(),
                value,
            });
        }

        Ok(Self { entries })
    }

    /// Decoded records, in table order.
    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Whether any platform has a record for `name_id`.
    pub fn contains(&self, name_id: u16) -> bool {
        self.entries.iter().any(|e| e.name_id == name_id)
    }

    /// All strings stored under `name_id`, in record order.
    pub fn strings(&self, name_id: u16) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(move |e| e.name_id == name_id).map(|e| e.value.as_str())
    }

    /// The Windows English string for `name_id`, or any record with that ID.
    pub fn get(&self, name_id: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name_id == name_id && e.key == WINDOWS_EN_US)
            .or_else(|| self.entries.iter().find(|e| e.name_id == name_id))
            .map(|e| e.value.as_str())
    }

    /// Remove every record with `name_id`, returning how many were dropped.
    pub fn remove(&mut self, name_id: u16) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.name_id != name_id);
        before - self.entries.len()
    }

    /// Store `value` under `name_id` for one platform, replacing any record
    /// already in that slot.
    pub fn set_for(&mut self, key: PlatformKey, name_id: u16, value: &str) {
        match self.entries.iter_mut().find(|e| e.key == key && e.name_id == name_id) {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(NameEntry { key, name_id, value: value.to_string() }),
        }
    }

    /// Store `value` under `name_id` for the Windows and Macintosh platforms.
    pub fn set(&mut self, name_id: u16, value: &str) {
        for key in DEFAULT_PLATFORMS {
            self.set_for(key, name_id, value);
        }
    }

    /// Apply a patch slot by slot, see [`NameSlot`].
    pub fn apply(&mut self, patch: &NamePatch) {
        for (name_id, slot) in patch.iter() {
            match slot {
                NameSlot::Absent => {
                    self.remove(name_id);
                }
                NameSlot::Present(value) => {
                    for entry in self.entries.iter_mut().filter(|e| e.name_id == name_id) {
                        entry.value = value.clone();
                    }
                    self.set(name_id, value);
                }
                NameSlot::Replace(value) => {
                    self.remove(name_id);
                    self.set(name_id, value);
                }
            }
        }
    }

    /// Return the ID of a font-specific record holding `value`, adding a new
    /// one (on the default platforms) when no such record exists.
    ///
    /// Returns `None` when a new record is needed but the highest name ID
    /// is already in use.
    pub fn find_or_insert(&mut self, value: &str) -> Option<NameId> {
        let existing = self.entries.iter().find(|e| {
            e.name_id >= FIRST_FONT_SPECIFIC_NAME_ID && e.key == WINDOWS_EN_US && e.value == value
        });
        if let Some(entry) = existing {
            return Some(NameId::new(entry.name_id));
        }

        let next = match self.entries.iter().map(|e| e.name_id).max() {
            Some(max) => max.checked_add(1)?.max(FIRST_FONT_SPECIFIC_NAME_ID),
            None => FIRST_FONT_SPECIFIC_NAME_ID,
        };
        self.set(next, value);
        Some(NameId::new(next))
    }

    /// Build a `name` table with records in canonical order.
    pub fn to_table(&self) -> Name {
        let mut entries: Vec<&NameEntry> = self.entries.iter().collect();
        entries.sort_by_key(|e| (e.key, e.name_id));

        let records = entries
            .into_iter()
            .map(|e| {
                NameRecord::new(
                    e.key.platform_id,
                    e.key.encoding_id,
                    e.key.language_id,
                    NameId::new(e.name_id),
                    e.value.clone().into(),
                )
            })
            .collect::<Vec<_>>();

        Name::new(records)
    }
}
