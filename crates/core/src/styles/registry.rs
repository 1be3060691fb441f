//! Compile-time registry of the static fonts a family ships.

use anyhow::{Result, bail};

use crate::{
    config::FAMILY_BASE,
    styles::{StyleBucket, StyleSpec},
};

/// One known static font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub filename: &'static str,
    pub bucket: StyleBucket,
    pub weight: u16,
}

impl RegistryEntry {
    pub const fn new(filename: &'static str, bucket: StyleBucket) -> Self {
        Self { filename, bucket, weight: bucket.weight() }
    }
}

/// The static fonts of one family, keyed by exact filename.
///
/// The registry decides which files get patched and what they become; the
/// filename classifier only cross-checks it.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    pub family: &'static str,
    pub entries: &'static [RegistryEntry],
}

/// The eight Miranda Sans statics.
pub const MIRANDA_SANS: Registry = Registry {
    family: FAMILY_BASE,
    entries: &[
        RegistryEntry::new("MirandaSans-Regular.ttf", StyleBucket::Regular),
        RegistryEntry::new("MirandaSans-Italic.ttf", StyleBucket::Italic),
        RegistryEntry::new("MirandaSans-Bold.ttf", StyleBucket::Bold),
        RegistryEntry::new("MirandaSans-BoldItalic.ttf", StyleBucket::BoldItalic),
        RegistryEntry::new("MirandaSans-Medium.ttf", StyleBucket::Medium),
        RegistryEntry::new("MirandaSans-MediumItalic.ttf", StyleBucket::MediumItalic),
        RegistryEntry::new("MirandaSans-SemiBold.ttf", StyleBucket::SemiBold),
        RegistryEntry::new("MirandaSans-SemiBoldItalic.ttf", StyleBucket::SemiBoldItalic),
    ],
};

impl Registry {
    /// The entry registered under an exact filename.
    pub fn get(&self, filename: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.filename == filename)
    }

    /// Registered filenames, in registry order.
    pub fn filenames(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.filename)
    }

    /// Style spec for `entry`, carrying the registered weight.
    pub fn spec(&self, entry: &RegistryEntry) -> StyleSpec {
        let mut spec = StyleSpec::new(self.family, entry.bucket);
        spec.weight = entry.weight;
        spec
    }

    /// Check every entry against the filename classifier and the bucket's
    /// nominal weight, and reject duplicate filenames.
    pub fn validate(&self) -> Result<()> {
        for (idx, entry) in self.entries.iter().enumerate() {
            let classified = StyleBucket::classify(entry.filename);
            if classified != entry.bucket {
                bail!(
                    "Registry entry {} is {} but its filename classifies as {}",
                    entry.filename,
                    entry.bucket,
                    classified
                );
            }
            if entry.weight != entry.bucket.weight() {
                bail!(
                    "Registry entry {} has weight {}, expected {} for {}",
                    entry.filename,
                    entry.weight,
                    entry.bucket.weight(),
                    entry.bucket
                );
            }
            if self.entries[..idx].iter().any(|e| e.filename == entry.filename) {
                bail!("Registry lists {} twice", entry.filename);
            }
        }
        Ok(())
    }
}
