//! STAT (style attributes) table construction and patching.

use font_types::{Fixed, NameId, Tag};
use log::debug;
use miranda_font_ops::NameTable;
use write_fonts::tables::stat::{AxisRecord, AxisValue, AxisValueTableFlags, Stat};

use crate::error::{Error, Result};

/// Weight axis tag.
pub const WGHT: Tag = Tag::new(b"wght");

/// Italic axis tag.
pub const ITAL: Tag = Tag::new(b"ital");

/// Weight value whose name is elided from composed style names.
const NEUTRAL_WEIGHT: f64 = 400.0;

/// Label used when stripping "Italic" leaves a weight name empty.
const NEUTRAL_WEIGHT_NAME: &str = "Regular";

/// Name ID used as elided fallback for built tables (the subfamily name).
const SUBFAMILY_NAME_ID: NameId = NameId::new(2);

/// One axis value entry to be written to STAT.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValueEntry {
    pub tag: Tag,
    pub value: f64,
    pub name: String,
    pub elidable: bool,
    /// Only for boolean-style axes: the value of the logical opposite.
    pub linked_value: Option<f64>,
}

impl AxisValueEntry {
    /// A weight axis entry. The name never carries "Italic", and the entry is
    /// elidable only at the neutral weight.
    pub fn weight(value: f64, name: &str) -> Self {
        Self {
            tag: WGHT,
            value,
            name: weight_display_name(name),
            elidable: value == NEUTRAL_WEIGHT,
            linked_value: None,
        }
    }

    /// A boolean italic axis entry linked to its opposite.
    ///
    /// Upright ("Roman", 0.0) is elidable and links to 1.0; italic (1.0) is
    /// not elidable and links to 0.0.
    pub fn italic(is_italic: bool) -> Self {
        let (value, linked, name) =
            if is_italic { (1.0, 0.0, "Italic") } else { (0.0, 1.0, "Roman") };
        Self {
            tag: ITAL,
            value,
            name: name.to_string(),
            elidable: !is_italic,
            linked_value: Some(linked),
        }
    }

    fn flags(&self) -> AxisValueTableFlags {
        if self.elidable {
            AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME
        } else {
            AxisValueTableFlags::empty()
        }
    }

    fn to_axis_value(&self, axis_index: u16, name_id: NameId) -> AxisValue {
        match self.linked_value {
            Some(linked) => AxisValue::format_3(
                axis_index,
                self.flags(),
                name_id,
                Fixed::from_f64(self.value),
                Fixed::from_f64(linked),
            ),
            None => {
                AxisValue::format_1(axis_index, self.flags(), name_id, Fixed::from_f64(self.value))
            }
        }
    }
}

/// Strip "Italic" from a style label so it can name a weight.
///
/// "SemiBold Italic" becomes "SemiBold"; a bare "Italic" becomes "Regular".
pub fn weight_display_name(name: &str) -> String {
    let stripped = name.replace("Italic", "");
    let stripped = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if stripped.is_empty() { NEUTRAL_WEIGHT_NAME.to_string() } else { stripped }
}

/// A design axis of the STAT table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatAxis {
    pub tag: Tag,
    pub name: String,
}

impl StatAxis {
    pub fn new(tag: Tag, name: impl Into<String>) -> Self {
        Self { tag, name: name.into() }
    }
}

/// Full description of a STAT table to build.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLayout {
    /// Axes in ordering order.
    pub axes: Vec<StatAxis>,
    pub values: Vec<AxisValueEntry>,
}

impl StatLayout {
    /// The two-axis layout of a static font: one weight value and one linked
    /// italic value.
    pub fn weight_and_italic(weight: f64, weight_name: &str, is_italic: bool) -> Self {
        Self {
            axes: vec![StatAxis::new(WGHT, "Weight"), StatAxis::new(ITAL, "Italic")],
            values: vec![
                AxisValueEntry::weight(weight, weight_name),
                AxisValueEntry::italic(is_italic),
            ],
        }
    }

    pub fn value(&self, tag: Tag) -> Option<&AxisValueEntry> {
        self.values.iter().find(|v| v.tag == tag)
    }

    /// Build the table, registering axis and value names in `names`.
    pub fn build(&self, names: &mut NameTable) -> Result<Stat> {
        let axis_records = self
            .axes
            .iter()
            .enumerate()
            .map(|(idx, axis)| {
                let name_id = register(names, &axis.name)?;
                Ok(AxisRecord::new(axis.tag, name_id, idx as u16))
            })
            .collect::<Result<Vec<_>>>()?;

        let axis_values = self
            .values
            .iter()
            .map(|entry| {
                let axis_index = self
                    .axes
                    .iter()
                    .position(|axis| axis.tag == entry.tag)
                    .ok_or(Error::MissingAxis(entry.tag))?;
                let name_id = register(names, &entry.name)?;
                Ok(entry.to_axis_value(axis_index as u16, name_id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Stat::new(axis_records, axis_values, SUBFAMILY_NAME_ID))
    }
}

fn register(names: &mut NameTable, label: &str) -> Result<NameId> {
    names.find_or_insert(label).ok_or_else(|| Error::NameIdsExhausted(label.to_string()))
}

/// Point every axis value on `axis` at `name_id`, and use `name_id` as the
/// elided fallback name.
///
/// Fails when the axis is absent or carries no value entries; the table is
/// left untouched in that case. Returns the number of entries redirected.
pub fn relabel_axis(stat: &mut Stat, axis: Tag, name_id: NameId) -> Result<usize> {
    let axis_index = stat
        .design_axes
        .iter()
        .position(|record| record.axis_tag == axis)
        .ok_or(Error::MissingAxis(axis))? as u16;

    let mut patched = 0;
    if let Some(values) = stat.offset_to_axis_values.as_mut() {
        for value in values.iter_mut().map(|v| v.as_mut()) {
            let value_name_id = match value {
                AxisValue::Format1(v) if v.axis_index == axis_index => &mut v.value_name_id,
                AxisValue::Format2(v) if v.axis_index == axis_index => &mut v.value_name_id,
                AxisValue::Format3(v) if v.axis_index == axis_index => &mut v.value_name_id,
                _ => continue,
            };
            *value_name_id = name_id;
            patched += 1;
        }
    }

    if patched == 0 {
        return Err(Error::NoAxisValues(axis));
    }

    stat.elided_fallback_name_id = Some(name_id);
    debug!("redirected {patched} '{axis}' STAT values to name ID {}", name_id.to_u16());
    Ok(patched)
}

/// Normalize elision on boolean axis values: 1.0 is never elidable, 0.0
/// always is. Other values are left alone. Returns the number of entries
/// visited with a boolean value.
pub fn normalize_elision(stat: &mut Stat) -> usize {
    let Some(values) = stat.offset_to_axis_values.as_mut() else {
        return 0;
    };

    let mut normalized = 0;
    for value in values.iter_mut().map(|v| v.as_mut()) {
        let (value, flags) = match value {
            AxisValue::Format1(v) => (v.value, &mut v.flags),
            AxisValue::Format3(v) => (v.value, &mut v.flags),
            _ => continue,
        };

        let value = value.to_f64();
        if value == 1.0 {
            *flags = AxisValueTableFlags::empty();
            normalized += 1;
        } else if value == 0.0 {
            *flags = AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME;
            normalized += 1;
        }
    }
    normalized
}
