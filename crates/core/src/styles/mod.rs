//! Style classification and the per-style projection of names, bits and STAT.

mod bucket;
mod registry;
mod spec;

pub use bucket::{StyleBucket, StyleFlags};
pub use registry::{MIRANDA_SANS, Registry, RegistryEntry};
pub use spec::StyleSpec;
