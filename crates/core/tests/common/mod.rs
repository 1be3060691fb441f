//! Synthetic fonts for the pass tests.

#![allow(dead_code)]

use std::path::Path;

use miranda_font_ops::NameTable;
use read_fonts::{
    FontRef, TableProvider,
    tables::stat::AxisValue as ReadAxisValue,
    types::{NameId, Tag},
};
use write_fonts::{
    FontBuilder,
    tables::{
        head::{Flags, Head, MacStyle},
        name::{Name, NameRecord},
        os2::{Os2, SelectionFlags},
        post::Post,
        stat::{AxisRecord, AxisValue, AxisValueTableFlags, Stat},
    },
    types::{FWord, Fixed, LongDateTime, Version16Dot16},
};

pub const WGHT: Tag = Tag::new(b"wght");
pub const ITAL: Tag = Tag::new(b"ital");

const ELIDABLE: AxisValueTableFlags = AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME;

/// (platform, encoding, language)
const PLATFORMS: [(u16, u16, u16); 2] = [(1, 0, 0), (3, 1, 0x0409)];

/// Name records as a stale build would leave them: IDs 1/2/4/6 on Mac and
/// Windows, a Unicode-platform family name, and leftover typographic names,
/// including a Unicode ID 16 and a French ID 17.
fn stale_names(family: &str, subfamily: &str) -> Name {
    let full_name = format!("{family} {subfamily}");
    let ps_name = format!("{}-{}", family.replace(' ', ""), subfamily.replace(' ', ""));
    let mut records = vec![
        NameRecord::new(0, 4, 0, NameId::new(1), family.to_string().into()),
        NameRecord::new(0, 4, 0, NameId::new(16), "Stale Typo Family".to_string().into()),
        NameRecord::new(3, 1, 0x040C, NameId::new(17), "Gras".to_string().into()),
    ];

    for (platform_id, encoding_id, language_id) in PLATFORMS {
        for (id, value) in [
            (1, family),
            (2, subfamily),
            (4, full_name.as_str()),
            (6, ps_name.as_str()),
            (16, "Stale Typo Family"),
            (17, "Stale Typo Subfamily"),
            (256, "Weight"),
            (257, "Italic"),
        ] {
            records.push(NameRecord::new(
                platform_id,
                encoding_id,
                language_id,
                NameId::new(id),
                value.to_string().into(),
            ));
        }
    }
    records.sort_by_key(|r| (r.platform_id, r.encoding_id, r.language_id, r.name_id));
    Name::new(records)
}

fn os2(fs_selection: SelectionFlags) -> Os2 {
    Os2 { fs_selection, us_weight_class: 400, ..Default::default() }
}

fn head(mac_style: MacStyle) -> Head {
    Head::new(
        Fixed::from_f64(1.0),
        0,
        Flags::empty(),
        1000,
        LongDateTime::new(0),
        LongDateTime::new(0),
        0,
        -200,
        600,
        800,
        mac_style,
        8,
        0,
    )
}

fn post() -> Post {
    let mut post =
        Post::new(Fixed::from_f64(0.0), FWord::new(-75), FWord::new(50), 0, 0, 0, 0, 0);
    post.version = Version16Dot16::VERSION_3_0;
    post
}

/// A gen-stat style two-axis table whose weight value and fallback point at
/// name ID 2, with the ital elision flags the wrong way round.
fn external_stat() -> Stat {
    Stat::new(
        vec![
            AxisRecord::new(WGHT, NameId::new(256), 0),
            AxisRecord::new(ITAL, NameId::new(257), 1),
        ],
        vec![
            AxisValue::format_1(
                0,
                AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME,
                NameId::new(2),
                Fixed::from_f64(400.0),
            ),
            AxisValue::format_1(
                0,
                AxisValueTableFlags::empty(),
                NameId::new(2),
                Fixed::from_f64(700.0),
            ),
            AxisValue::format_3(
                1,
                AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME,
                NameId::new(257),
                Fixed::from_f64(1.0),
                Fixed::from_f64(0.0),
            ),
        ],
        NameId::new(2),
    )
}

/// Options for [`build_font`].
#[derive(Debug, Clone, Copy)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub subfamily: &'a str,
    pub with_stat: bool,
    pub with_os2: bool,
}

impl Default for FontSpec<'_> {
    fn default() -> Self {
        Self { family: "Old Family", subfamily: "Bold", with_stat: true, with_os2: true }
    }
}

/// A bold-flagged font with stale names; the passes must fix all of it.
pub fn build_font(spec: FontSpec) -> Vec<u8> {
    let mut builder = FontBuilder::new();
    builder.add_table(&stale_names(spec.family, spec.subfamily)).unwrap();
    if spec.with_os2 {
        builder
            .add_table(&os2(SelectionFlags::BOLD | SelectionFlags::USE_TYPO_METRICS))
            .unwrap();
    }
    builder.add_table(&head(MacStyle::BOLD)).unwrap();
    builder.add_table(&post()).unwrap();
    if spec.with_stat {
        builder.add_table(&external_stat()).unwrap();
    }
    builder.build()
}

pub fn write_font(path: &Path, spec: FontSpec) {
    std::fs::write(path, build_font(spec)).unwrap();
}

pub fn read_names(path: &Path) -> NameTable {
    let data = std::fs::read(path).unwrap();
    NameTable::from_font(&FontRef::new(&data).unwrap()).unwrap()
}

/// Snapshot of the tables the passes touch.
#[derive(Debug)]
pub struct Snapshot {
    pub names: NameTable,
    pub fs_selection: SelectionFlags,
    pub mac_style: MacStyle,
    pub italic_angle: f64,
    /// (axis tag, axis name) in ordering order.
    pub axes: Vec<(Tag, String)>,
    pub values: Vec<ValueSnapshot>,
    pub elided_fallback: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueSnapshot {
    pub axis: Tag,
    pub value: f64,
    pub linked_value: Option<f64>,
    pub name: String,
    pub elidable: bool,
}

pub fn snapshot(path: &Path) -> Snapshot {
    let data = std::fs::read(path).unwrap();
    let font = FontRef::new(&data).unwrap();
    let names = NameTable::from_font(&font).unwrap();
    let name_of = |id: NameId| names.get(id.to_u16()).unwrap_or_default().to_string();

    let mut axes = Vec::new();
    let mut values = Vec::new();
    let mut elided_fallback = None;

    if let Ok(stat) = font.stat() {
        let records = stat.design_axes().unwrap();
        axes = records.iter().map(|a| (a.axis_tag(), name_of(a.axis_name_id()))).collect();
        elided_fallback = stat.elided_fallback_name_id().map(|id| id.to_u16());

        if let Some(array) = stat.offset_to_axis_values() {
            for value in array.unwrap().axis_values().iter() {
                let snapshot = match value.unwrap() {
                    ReadAxisValue::Format1(v) => ValueSnapshot {
                        axis: records[v.axis_index() as usize].axis_tag(),
                        value: v.value().to_f64(),
                        linked_value: None,
                        name: name_of(v.value_name_id()),
                        elidable: v.flags().contains(ELIDABLE),
                    },
                    ReadAxisValue::Format3(v) => ValueSnapshot {
                        axis: records[v.axis_index() as usize].axis_tag(),
                        value: v.value().to_f64(),
                        linked_value: Some(v.linked_value().to_f64()),
                        name: name_of(v.value_name_id()),
                        elidable: v.flags().contains(ELIDABLE),
                    },
                    _ => panic!("unexpected axis value format"),
                };
                values.push(snapshot);
            }
        }
    }

    Snapshot {
        fs_selection: font.os2().unwrap().fs_selection(),
        mac_style: font.head().unwrap().mac_style(),
        italic_angle: font.post().unwrap().italic_angle().to_f64(),
        names,
        axes,
        values,
        elided_fallback,
    }
}
