//! Decoding stored border records into validated borders.

use serde::{Deserialize, Serialize};

use super::kind::BorderKind;
use super::record::BorderRecord;
use super::variant::{BevelColors, BorderSpec, EtchedColors, ImageBorder, NineSlice, ThreeSlice};
use crate::error::{DecodeError, DecodeResult};
use crate::image::{ImageHandle, ImageLookup};
use crate::key::{AttributeKey, AttributeName};
use crate::theme::{ThemeMap, ThemeValue};

const NINE_SLOTS: [&str; 9] = [
    "top",
    "bottom",
    "left",
    "right",
    "top_left",
    "top_right",
    "bottom_left",
    "bottom_right",
    "center",
];
const THREE_SLOTS: [&str; 3] = ["top", "top_left", "center"];
const H_SLOTS: [&str; 3] = ["left", "right", "center"];
const V_SLOTS: [&str; 3] = ["top", "bottom", "center"];

/// Options controlling border decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderOptions {
    /// Reinterpret a nine-slot image border with unresolvable edge or corner
    /// slots as a three-slot border when its top, top-left and center slots
    /// resolve.
    pub allow_degrade: bool,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            allow_degrade: true,
        }
    }
}

/// Decodes the border stored at `key`'s node as a border of `kind`.
///
/// The attribute part of `key` is ignored; the node's `border` attribute is
/// read. `Null` always decodes to [`BorderSpec::Null`], and `Empty` decodes
/// to [`BorderSpec::Empty`] when nothing is stored.
///
/// # Errors
///
/// - [`DecodeError::InvalidBorderParams`] if the stored record is missing,
///   of another kind, or has missing or non-positive fields
/// - [`DecodeError::MissingImage`] if a required image slot cannot be resolved
/// - [`DecodeError::InvalidValue`] if the stored value is not a border record
pub fn decode(
    kind: BorderKind,
    map: &ThemeMap,
    key: &AttributeKey,
    lookup: &dyn ImageLookup,
) -> DecodeResult<BorderSpec> {
    decode_with(kind, map, key, lookup, &BorderOptions::default())
}

/// [`decode`] with explicit options.
pub fn decode_with(
    kind: BorderKind,
    map: &ThemeMap,
    key: &AttributeKey,
    lookup: &dyn ImageLookup,
    options: &BorderOptions,
) -> DecodeResult<BorderSpec> {
    if kind == BorderKind::Null {
        return Ok(BorderSpec::Null);
    }
    match stored_record(map, key)? {
        Some(record) if record.kind == kind => decode_record(record, lookup, options),
        Some(record) => Err(DecodeError::border(
            kind,
            format!("stored border is {}", record.kind),
        )),
        None if kind == BorderKind::Empty => Ok(BorderSpec::Empty),
        None => Err(DecodeError::border(kind, "no border stored")),
    }
}

/// Decodes whatever border is stored at `key`'s node, or `Null` if none is.
pub fn decode_stored(
    map: &ThemeMap,
    key: &AttributeKey,
    lookup: &dyn ImageLookup,
    options: &BorderOptions,
) -> DecodeResult<BorderSpec> {
    match stored_record(map, key)? {
        Some(record) => decode_record(record, lookup, options),
        None => Ok(BorderSpec::Null),
    }
}

/// Encodes a border as a stored record. `Null` has no record.
pub fn encode(spec: &BorderSpec) -> Option<BorderRecord> {
    spec.to_record()
}

/// Writes `spec` to `key`'s node, removing the `border` attribute for `Null`.
pub fn commit(map: &mut ThemeMap, key: &AttributeKey, spec: &BorderSpec) {
    let key = key.with_attribute(AttributeName::Border);
    match spec.to_record() {
        Some(record) => {
            map.set(&key, ThemeValue::Border(record));
        }
        None => {
            map.remove_attr(&key);
        }
    }
}

fn stored_record<'a>(map: &'a ThemeMap, key: &AttributeKey) -> DecodeResult<Option<&'a BorderRecord>> {
    let key = key.with_attribute(AttributeName::Border);
    match map.get_attr(&key) {
        None => Ok(None),
        Some(ThemeValue::Border(record)) => Ok(Some(record)),
        Some(other) => Err(DecodeError::invalid_value(
            AttributeName::Border,
            other.to_string(),
            "expected a border record",
        )),
    }
}

/// Validates a stored record.
///
/// Either the whole record is valid and a complete [`BorderSpec`] comes
/// back, or an error does; no partially filled value is produced.
pub fn decode_record(
    record: &BorderRecord,
    lookup: &dyn ImageLookup,
    options: &BorderOptions,
) -> DecodeResult<BorderSpec> {
    let kind = record.kind;
    match kind {
        BorderKind::Null => Ok(BorderSpec::Null),
        BorderKind::Empty => Ok(BorderSpec::Empty),
        BorderKind::Bevel => {
            let colors = if record.theme_colors {
                BevelColors::Theme
            } else {
                let raw: [u32; 4] = record.colors.as_slice().try_into().map_err(|_| {
                    DecodeError::border(
                        kind,
                        format!("expected 4 colors, found {}", record.colors.len()),
                    )
                })?;
                BevelColors::from_raw(record.raised, raw)
            };
            Ok(BorderSpec::Bevel {
                raised: record.raised,
                colors,
            })
        }
        BorderKind::Etched => {
            let colors = if record.theme_colors {
                EtchedColors::Theme
            } else {
                let raw: [u32; 2] = record.colors.as_slice().try_into().map_err(|_| {
                    DecodeError::border(
                        kind,
                        format!("expected 2 colors, found {}", record.colors.len()),
                    )
                })?;
                EtchedColors::from_raw(record.raised, raw)
            };
            Ok(BorderSpec::Etched {
                raised: record.raised,
                colors,
            })
        }
        BorderKind::Line => Ok(BorderSpec::Line {
            thickness: positive(kind, "thickness", record.thickness)?,
            color: single_color(record)?,
        }),
        BorderKind::Round => Ok(BorderSpec::Round {
            arc_width: positive(kind, "arc width", record.arc_width)?,
            arc_height: positive(kind, "arc height", record.arc_height)?,
            color: single_color(record)?,
        }),
        BorderKind::Image => decode_image(record, lookup, options).map(BorderSpec::Image),
        BorderKind::HorizontalImage => {
            let (left, right, center) = decode_pair(record, lookup, H_SLOTS)?;
            Ok(BorderSpec::HorizontalImage {
                left,
                right,
                center,
            })
        }
        BorderKind::VerticalImage => {
            let (top, bottom, center) = decode_pair(record, lookup, V_SLOTS)?;
            Ok(BorderSpec::VerticalImage {
                top,
                bottom,
                center,
            })
        }
    }
}

fn positive(kind: BorderKind, field: &str, value: Option<i64>) -> DecodeResult<u32> {
    match value {
        Some(v) if v > 0 => u32::try_from(v)
            .map_err(|_| DecodeError::border(kind, format!("{} out of range, got {}", field, v))),
        Some(v) => Err(DecodeError::border(kind, format!("{} must be positive, got {}", field, v))),
        None => Err(DecodeError::border(kind, format!("missing {}", field))),
    }
}

fn single_color(record: &BorderRecord) -> DecodeResult<Option<u32>> {
    if record.theme_colors {
        return Ok(None);
    }
    match record.colors.as_slice() {
        [color] => Ok(Some(*color)),
        [] => Err(DecodeError::border(record.kind, "missing color")),
        colors => Err(DecodeError::border(
            record.kind,
            format!("expected 1 color, found {}", colors.len()),
        )),
    }
}

fn resolve_slot(
    kind: BorderKind,
    slot: &'static str,
    name: &str,
    lookup: &dyn ImageLookup,
) -> DecodeResult<ImageHandle> {
    lookup.resolve(name).ok_or_else(|| DecodeError::MissingImage {
        kind,
        slot,
        name: name.to_string(),
    })
}

/// Resolves an optional center slot. An empty name means no center.
fn resolve_center(
    kind: BorderKind,
    name: Option<&String>,
    lookup: &dyn ImageLookup,
) -> DecodeResult<Option<ImageHandle>> {
    match name {
        Some(name) if !name.is_empty() => resolve_slot(kind, "center", name, lookup).map(Some),
        _ => Ok(None),
    }
}

/// Decodes a two-slot record with an optional center (h-image, v-image).
fn decode_pair(
    record: &BorderRecord,
    lookup: &dyn ImageLookup,
    slots: [&'static str; 3],
) -> DecodeResult<(ImageHandle, ImageHandle, Option<ImageHandle>)> {
    let kind = record.kind;
    let names = &record.images;
    if !matches!(names.len(), 2 | 3) {
        return Err(DecodeError::border(
            kind,
            format!("expected 2 or 3 images, found {}", names.len()),
        ));
    }
    let first = resolve_slot(kind, slots[0], &names[0], lookup)?;
    let second = resolve_slot(kind, slots[1], &names[1], lookup)?;
    let center = resolve_center(kind, names.get(2), lookup)?;
    Ok((first, second, center))
}

fn decode_image(
    record: &BorderRecord,
    lookup: &dyn ImageLookup,
    options: &BorderOptions,
) -> DecodeResult<ImageBorder> {
    let kind = record.kind;
    let names = &record.images;
    match names.len() {
        2 | 3 => Ok(ImageBorder::Three(ThreeSlice {
            top: resolve_slot(kind, THREE_SLOTS[0], &names[0], lookup)?,
            top_left: resolve_slot(kind, THREE_SLOTS[1], &names[1], lookup)?,
            center: resolve_center(kind, names.get(2), lookup)?,
        })),
        8 | 9 => decode_nine(record, lookup, options),
        n => Err(DecodeError::border(
            kind,
            format!("expected 2, 3, 8 or 9 images, found {}", n),
        )),
    }
}

fn decode_nine(
    record: &BorderRecord,
    lookup: &dyn ImageLookup,
    options: &BorderOptions,
) -> DecodeResult<ImageBorder> {
    let kind = record.kind;
    let names = &record.images;

    let mut frame = Vec::with_capacity(8);
    let mut missing = None;
    for (slot, name) in NINE_SLOTS.into_iter().zip(names.iter().take(8)) {
        match lookup.resolve(name) {
            Some(handle) => frame.push(handle),
            None => {
                missing = Some(DecodeError::MissingImage {
                    kind,
                    slot,
                    name: name.clone(),
                });
                break;
            }
        }
    }
    let center = resolve_center(kind, names.get(8), lookup)?;

    let Some(missing) = missing else {
        let frame: [ImageHandle; 8] = frame
            .try_into()
            .map_err(|_| DecodeError::border(kind, "expected 8 frame images"))?;
        let [top, bottom, left, right, top_left, top_right, bottom_left, bottom_right] = frame;
        return Ok(ImageBorder::Nine(NineSlice {
            top,
            bottom,
            left,
            right,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            center,
        }));
    };

    if !options.allow_degrade {
        return Err(missing);
    }
    let (Some(top), Some(top_left)) = (lookup.resolve(&names[0]), lookup.resolve(&names[4])) else {
        return Err(missing);
    };
    tracing::warn!(
        error = %missing,
        "nine-slot image border degraded to three-slot"
    );
    Ok(ImageBorder::Three(ThreeSlice {
        top,
        top_left,
        center,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::NoImages;
    use crate::key::StateTag;
    use std::collections::HashMap;

    fn images(names: &[&str]) -> HashMap<String, ImageHandle> {
        names
            .iter()
            .map(|n| (n.to_string(), ImageHandle::new(*n)))
            .collect()
    }

    fn button() -> AttributeKey {
        AttributeKey::new("Button", StateTag::Unselected, AttributeName::Border)
    }

    fn stored(record: BorderRecord) -> ThemeMap {
        ThemeMap::new().with("Button.border", record)
    }

    const FRAME: [&str; 9] = ["t", "b", "l", "r", "tl", "tr", "bl", "br", "c"];

    #[test]
    fn test_null_ignores_stored_value() {
        let map = stored(BorderRecord::new(BorderKind::Line).thickness(2).colors([0]));
        let spec = decode(BorderKind::Null, &map, &button(), &NoImages).unwrap();
        assert_eq!(spec, BorderSpec::Null);
    }

    #[test]
    fn test_empty_without_record() {
        let spec = decode(BorderKind::Empty, &ThemeMap::new(), &button(), &NoImages).unwrap();
        assert_eq!(spec, BorderSpec::Empty);
    }

    #[test]
    fn test_missing_record_for_line() {
        let result = decode(BorderKind::Line, &ThemeMap::new(), &button(), &NoImages);
        assert!(matches!(result, Err(DecodeError::InvalidBorderParams { .. })));
    }

    #[test]
    fn test_kind_mismatch() {
        let map = stored(BorderRecord::new(BorderKind::Empty));
        let result = decode(BorderKind::Bevel, &map, &button(), &NoImages);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidBorderParams { kind: BorderKind::Bevel, .. })
        ));
    }

    #[test]
    fn test_non_record_value() {
        let map = ThemeMap::new().with("Button.border", "line");
        let result = decode(BorderKind::Line, &map, &button(), &NoImages);
        assert!(matches!(result, Err(DecodeError::InvalidValue { .. })));
    }

    #[test]
    fn test_bevel_theme_colors() {
        let map = stored(BorderRecord::new(BorderKind::Bevel).raised(true).theme_colors());
        let spec = decode(BorderKind::Bevel, &map, &button(), &NoImages).unwrap();
        assert_eq!(
            spec,
            BorderSpec::Bevel {
                raised: true,
                colors: BevelColors::Theme
            }
        );
    }

    #[test]
    fn test_bevel_swaps_b_and_c_when_lowered() {
        let raw = [0x111111, 0x222222, 0x333333, 0x444444];
        let raised = decode_record(
            &BorderRecord::new(BorderKind::Bevel).raised(true).colors(raw),
            &NoImages,
            &BorderOptions::default(),
        )
        .unwrap();
        let lowered = decode_record(
            &BorderRecord::new(BorderKind::Bevel).raised(false).colors(raw),
            &NoImages,
            &BorderOptions::default(),
        )
        .unwrap();

        let (
            BorderSpec::Bevel {
                colors: BevelColors::Explicit { color_a: ra, color_b: rb, color_c: rc, color_d: rd },
                ..
            },
            BorderSpec::Bevel {
                colors: BevelColors::Explicit { color_a: la, color_b: lb, color_c: lc, color_d: ld },
                ..
            },
        ) = (raised, lowered)
        else {
            panic!("expected explicit bevel colors");
        };
        assert_eq!(ra, la);
        assert_eq!(rd, ld);
        assert_eq!(rb, lc);
        assert_eq!(rc, lb);
        assert_ne!(rb, lb);
    }

    #[test]
    fn test_bevel_requires_four_colors() {
        let record = BorderRecord::new(BorderKind::Bevel).colors([1, 2, 3]);
        let result = decode_record(&record, &NoImages, &BorderOptions::default());
        assert!(matches!(result, Err(DecodeError::InvalidBorderParams { .. })));
    }

    #[test]
    fn test_etched_lowered_reads_shadow_first() {
        let record = BorderRecord::new(BorderKind::Etched).raised(false).colors([0xaa, 0xbb]);
        let spec = decode_record(&record, &NoImages, &BorderOptions::default()).unwrap();
        assert_eq!(
            spec,
            BorderSpec::Etched {
                raised: false,
                colors: EtchedColors::Explicit {
                    highlight: 0xbb,
                    shadow: 0xaa
                }
            }
        );
        assert_eq!(spec.to_record(), Some(record));
    }

    #[test]
    fn test_line_requires_positive_thickness() {
        for record in [
            BorderRecord::new(BorderKind::Line).colors([0]),
            BorderRecord::new(BorderKind::Line).thickness(0).colors([0]),
            BorderRecord::new(BorderKind::Line).thickness(-3).colors([0]),
        ] {
            let result = decode_record(&record, &NoImages, &BorderOptions::default());
            assert!(matches!(result, Err(DecodeError::InvalidBorderParams { .. })));
        }
    }

    #[test]
    fn test_large_dimensions_survive_encoding() {
        let spec = BorderSpec::Round {
            arc_width: u32::MAX,
            arc_height: u32::MAX - 1,
            color: None,
        };
        let record = encode(&spec).unwrap();
        assert_eq!(record.arc_width, Some(i64::from(u32::MAX)));
        assert_eq!(decode_record(&record, &NoImages, &BorderOptions::default()), Ok(spec));

        let record = BorderRecord::new(BorderKind::Line)
            .thickness(i64::from(u32::MAX) + 1)
            .theme_colors();
        let err = decode_record(&record, &NoImages, &BorderOptions::default()).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_line_color_optional_with_theme_colors() {
        let record = BorderRecord::new(BorderKind::Line).thickness(2).theme_colors();
        let spec = decode_record(&record, &NoImages, &BorderOptions::default()).unwrap();
        assert_eq!(spec, BorderSpec::Line { thickness: 2, color: None });

        let record = BorderRecord::new(BorderKind::Line).thickness(2);
        let result = decode_record(&record, &NoImages, &BorderOptions::default());
        assert!(matches!(result, Err(DecodeError::InvalidBorderParams { .. })));
    }

    #[test]
    fn test_round_requires_both_arcs() {
        let record = BorderRecord::new(BorderKind::Round).arc(4, 0).colors([0xff]);
        let err = decode_record(&record, &NoImages, &BorderOptions::default()).unwrap_err();
        assert!(err.to_string().contains("arc height"));

        let record = BorderRecord::new(BorderKind::Round).arc(4, 6).colors([0xff]);
        let spec = decode_record(&record, &NoImages, &BorderOptions::default()).unwrap();
        assert_eq!(
            spec,
            BorderSpec::Round {
                arc_width: 4,
                arc_height: 6,
                color: Some(0xff)
            }
        );
    }

    #[test]
    fn test_nine_slice_resolves_all_slots() {
        let lookup = images(&FRAME);
        let record = BorderRecord::new(BorderKind::Image).images(FRAME);
        let spec = decode_record(&record, &lookup, &BorderOptions::default()).unwrap();
        let BorderSpec::Image(ImageBorder::Nine(slice)) = &spec else {
            panic!("expected nine-slice border, got {:?}", spec);
        };
        assert_eq!(slice.top_right.id, "tr");
        assert_eq!(slice.center.as_ref().map(|c| c.id.as_str()), Some("c"));
        assert_eq!(spec.to_record(), Some(record));
    }

    #[test]
    fn test_nine_slice_degrades_to_three() {
        let lookup = images(&["t", "tl", "c"]);
        let record = BorderRecord::new(BorderKind::Image).images(FRAME);
        let spec = decode_record(&record, &lookup, &BorderOptions::default()).unwrap();
        assert_eq!(
            spec,
            BorderSpec::Image(ImageBorder::Three(ThreeSlice {
                top: ImageHandle::new("t"),
                top_left: ImageHandle::new("tl"),
                center: Some(ImageHandle::new("c")),
            }))
        );
    }

    #[test]
    fn test_nine_slice_without_degrade_reports_slot() {
        let lookup = images(&["t", "tl", "c"]);
        let record = BorderRecord::new(BorderKind::Image).images(FRAME);
        let options = BorderOptions {
            allow_degrade: false,
        };
        let result = decode_record(&record, &lookup, &options);
        assert_eq!(
            result,
            Err(DecodeError::MissingImage {
                kind: BorderKind::Image,
                slot: "bottom",
                name: "b".to_string()
            })
        );
    }

    #[test]
    fn test_degrade_needs_canonical_slots() {
        let lookup = images(&["t", "c"]);
        let record = BorderRecord::new(BorderKind::Image).images(FRAME);
        let result = decode_record(&record, &lookup, &BorderOptions::default());
        assert!(matches!(result, Err(DecodeError::MissingImage { .. })));
    }

    #[test]
    fn test_image_slot_counts() {
        let lookup = images(&FRAME);
        for count in [2, 3, 8, 9] {
            let record = BorderRecord::new(BorderKind::Image).images(FRAME[..count].to_vec());
            let spec = decode_record(&record, &lookup, &BorderOptions::default()).unwrap();
            assert_eq!(spec.to_record(), Some(record), "count {}", count);
        }
        for count in [0, 1, 4, 7] {
            let record = BorderRecord::new(BorderKind::Image).images(FRAME[..count].to_vec());
            let result = decode_record(&record, &lookup, &BorderOptions::default());
            assert!(matches!(result, Err(DecodeError::InvalidBorderParams { .. })));
        }
    }

    #[test]
    fn test_horizontal_and_vertical_images() {
        let lookup = images(&["l", "r", "c"]);
        let record = BorderRecord::new(BorderKind::HorizontalImage).images(["l", "r", "c"]);
        let spec = decode_record(&record, &lookup, &BorderOptions::default()).unwrap();
        assert_eq!(spec.kind(), BorderKind::HorizontalImage);
        assert_eq!(spec.to_record(), Some(record));

        let record = BorderRecord::new(BorderKind::VerticalImage).images(["l", "r"]);
        let spec = decode_record(&record, &lookup, &BorderOptions::default()).unwrap();
        assert_eq!(
            spec,
            BorderSpec::VerticalImage {
                top: ImageHandle::new("l"),
                bottom: ImageHandle::new("r"),
                center: None
            }
        );

        let record = BorderRecord::new(BorderKind::VerticalImage).images(["l", "missing"]);
        let result = decode_record(&record, &lookup, &BorderOptions::default());
        assert!(matches!(result, Err(DecodeError::MissingImage { slot: "bottom", .. })));
    }

    #[test]
    fn test_commit_writes_and_removes() {
        let mut map = ThemeMap::new();
        let spec = BorderSpec::Line {
            thickness: 1,
            color: Some(0x00ff00),
        };
        commit(&mut map, &button(), &spec);
        assert_eq!(decode(BorderKind::Line, &map, &button(), &NoImages), Ok(spec));

        commit(&mut map, &button(), &BorderSpec::Null);
        assert!(map.get("Button.border").is_none());
        assert_eq!(
            decode_stored(&map, &button(), &NoImages, &BorderOptions::default()),
            Ok(BorderSpec::Null)
        );
    }

    #[test]
    fn test_decode_reads_border_of_any_node_key() {
        let map = ThemeMap::new().with(
            "Button.sel#border",
            BorderRecord::new(BorderKind::Empty),
        );
        let key = AttributeKey::new("Button", StateTag::Selected, AttributeName::FgColor);
        let spec = decode_stored(&map, &key, &NoImages, &BorderOptions::default()).unwrap();
        assert_eq!(spec, BorderSpec::Empty);
    }
}
