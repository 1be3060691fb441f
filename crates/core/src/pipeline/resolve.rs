use std::fmt;

use miranda_font_metadata::{ITAL, WGHT};

use crate::styles::{Registry, RegistryEntry, StyleSpec};

/// How a filename would be patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub filename: String,
    pub registered: Option<RegistryEntry>,
    pub spec: StyleSpec,
}

/// Resolve `filename` against the registry, falling back to the filename
/// classifier for unregistered names. No file is read.
pub fn resolve(filename: &str, registry: &Registry) -> Resolution {
    let registered = registry.get(filename).copied();
    let spec = match &registered {
        Some(entry) => registry.spec(entry),
        None => StyleSpec::from_filename(registry.family, filename),
    };
    Resolution { filename: filename.to_string(), registered, spec }
}

fn or_absent(value: Option<&str>) -> &str {
    value.unwrap_or("(absent)")
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = &self.spec;
        let naming = &spec.naming;
        let source = if self.registered.is_some() { "registry" } else { "filename" };
        let typographic = naming.typographic.as_ref();

        writeln!(f, "{} (from {source})", self.filename)?;
        writeln!(f, "  style:        {} (weight {})", spec.bucket, spec.weight)?;
        writeln!(f, "  name ID 1:    {}", naming.family)?;
        writeln!(f, "  name ID 2:    {}", naming.subfamily)?;
        writeln!(f, "  name ID 4:    {}", naming.full_name())?;
        writeln!(f, "  name ID 6:    {}", naming.postscript_name())?;
        writeln!(f, "  name ID 16:   {}", or_absent(typographic.map(|t| t.family.as_str())))?;
        writeln!(f, "  name ID 17:   {}", or_absent(typographic.map(|t| t.subfamily.as_str())))?;
        writeln!(
            f,
            "  style bits:   regular={} bold={} italic={}",
            spec.bits.regular, spec.bits.bold, spec.bits.italic
        )?;

        let layout = spec.stat_layout();
        for value in [layout.value(WGHT), layout.value(ITAL)].into_iter().flatten() {
            write!(f, "  STAT {}:    {} '{}'", value.tag, value.value, value.name)?;
            if let Some(linked) = value.linked_value {
                write!(f, " linked {linked}")?;
            }
            writeln!(f, "{}", if value.elidable { " (elidable)" } else { "" })?;
        }
        Ok(())
    }
}
