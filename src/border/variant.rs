//! Validated border values.

use serde::Serialize;

use super::kind::BorderKind;
use super::record::BorderRecord;
use crate::image::ImageHandle;

/// Colors of a bevel border.
///
/// Fields are named by role. Stored records list four raw colors; a raised
/// bevel reads them as `(a, b, c, d)` and a lowered bevel as `(a, c, b, d)`,
/// so `color_b` and `color_c` trade places between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BevelColors {
    /// Use the ambient highlight and shadow colors at render time.
    Theme,
    Explicit {
        /// Highlight.
        color_a: u32,
        /// Secondary highlight.
        color_b: u32,
        /// Shadow.
        color_c: u32,
        /// Secondary shadow.
        color_d: u32,
    },
}

impl BevelColors {
    /// Interprets four raw stored colors.
    pub fn from_raw(raised: bool, raw: [u32; 4]) -> Self {
        let [a, b, c, d] = raw;
        if raised {
            BevelColors::Explicit {
                color_a: a,
                color_b: b,
                color_c: c,
                color_d: d,
            }
        } else {
            BevelColors::Explicit {
                color_a: a,
                color_b: c,
                color_c: b,
                color_d: d,
            }
        }
    }

    /// Returns the raw stored colors, inverting [`BevelColors::from_raw`].
    pub fn to_raw(self, raised: bool) -> Option<[u32; 4]> {
        match self {
            BevelColors::Theme => None,
            BevelColors::Explicit {
                color_a,
                color_b,
                color_c,
                color_d,
            } => Some(if raised {
                [color_a, color_b, color_c, color_d]
            } else {
                [color_a, color_c, color_b, color_d]
            }),
        }
    }
}

/// Colors of an etched border.
///
/// Raised records store `(highlight, shadow)`, lowered records store
/// `(shadow, highlight)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EtchedColors {
    Theme,
    Explicit { highlight: u32, shadow: u32 },
}

impl EtchedColors {
    pub fn from_raw(raised: bool, raw: [u32; 2]) -> Self {
        let [a, b] = raw;
        if raised {
            EtchedColors::Explicit {
                highlight: a,
                shadow: b,
            }
        } else {
            EtchedColors::Explicit {
                highlight: b,
                shadow: a,
            }
        }
    }

    pub fn to_raw(self, raised: bool) -> Option<[u32; 2]> {
        match self {
            EtchedColors::Theme => None,
            EtchedColors::Explicit { highlight, shadow } => Some(if raised {
                [highlight, shadow]
            } else {
                [shadow, highlight]
            }),
        }
    }
}

/// An image border drawn from the top edge and top-left corner, rotated
/// into place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreeSlice {
    pub top: ImageHandle,
    pub top_left: ImageHandle,
    pub center: Option<ImageHandle>,
}

/// An image border with every edge and corner given explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NineSlice {
    pub top: ImageHandle,
    pub bottom: ImageHandle,
    pub left: ImageHandle,
    pub right: ImageHandle,
    pub top_left: ImageHandle,
    pub top_right: ImageHandle,
    pub bottom_left: ImageHandle,
    pub bottom_right: ImageHandle,
    pub center: Option<ImageHandle>,
}

impl NineSlice {
    /// The eight edge and corner slots in stored order.
    pub fn frame(&self) -> [&ImageHandle; 8] {
        [
            &self.top,
            &self.bottom,
            &self.left,
            &self.right,
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageBorder {
    Three(ThreeSlice),
    Nine(NineSlice),
}

/// A fully validated border.
///
/// Built by decoding a [`BorderRecord`] or directly by an editor, and turned
/// back into a record by [`BorderSpec::to_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BorderSpec {
    Null,
    Empty,
    Bevel {
        raised: bool,
        colors: BevelColors,
    },
    Etched {
        raised: bool,
        colors: EtchedColors,
    },
    Line {
        thickness: u32,
        /// `None` draws in the theme color.
        color: Option<u32>,
    },
    Round {
        arc_width: u32,
        arc_height: u32,
        color: Option<u32>,
    },
    Image(ImageBorder),
    #[serde(rename = "h-image")]
    HorizontalImage {
        left: ImageHandle,
        right: ImageHandle,
        center: Option<ImageHandle>,
    },
    #[serde(rename = "v-image")]
    VerticalImage {
        top: ImageHandle,
        bottom: ImageHandle,
        center: Option<ImageHandle>,
    },
}

impl BorderSpec {
    pub fn kind(&self) -> BorderKind {
        match self {
            BorderSpec::Null => BorderKind::Null,
            BorderSpec::Empty => BorderKind::Empty,
            BorderSpec::Bevel { .. } => BorderKind::Bevel,
            BorderSpec::Etched { .. } => BorderKind::Etched,
            BorderSpec::Line { .. } => BorderKind::Line,
            BorderSpec::Round { .. } => BorderKind::Round,
            BorderSpec::Image(_) => BorderKind::Image,
            BorderSpec::HorizontalImage { .. } => BorderKind::HorizontalImage,
            BorderSpec::VerticalImage { .. } => BorderKind::VerticalImage,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BorderSpec::Null)
    }

    /// Encodes the border as a stored record. `Null` has no record.
    pub fn to_record(&self) -> Option<BorderRecord> {
        let record = BorderRecord::new(self.kind());
        let record = match self {
            BorderSpec::Null => return None,
            BorderSpec::Empty => record,
            BorderSpec::Bevel { raised, colors } => match colors.to_raw(*raised) {
                Some(raw) => record.raised(*raised).colors(raw),
                None => record.raised(*raised).theme_colors(),
            },
            BorderSpec::Etched { raised, colors } => match colors.to_raw(*raised) {
                Some(raw) => record.raised(*raised).colors(raw),
                None => record.raised(*raised).theme_colors(),
            },
            BorderSpec::Line { thickness, color } => {
                with_color(record.thickness(i64::from(*thickness)), *color)
            }
            BorderSpec::Round {
                arc_width,
                arc_height,
                color,
            } => with_color(record.arc(i64::from(*arc_width), i64::from(*arc_height)), *color),
            BorderSpec::Image(ImageBorder::Three(slice)) => record.images(names(
                [&slice.top, &slice.top_left],
                slice.center.as_ref(),
            )),
            BorderSpec::Image(ImageBorder::Nine(slice)) => {
                record.images(names(slice.frame(), slice.center.as_ref()))
            }
            BorderSpec::HorizontalImage {
                left,
                right,
                center,
            } => record.images(names([left, right], center.as_ref())),
            BorderSpec::VerticalImage {
                top,
                bottom,
                center,
            } => record.images(names([top, bottom], center.as_ref())),
        };
        Some(record)
    }
}

fn with_color(record: BorderRecord, color: Option<u32>) -> BorderRecord {
    match color {
        Some(color) => record.colors([color]),
        None => record.theme_colors(),
    }
}

fn names<const N: usize>(slots: [&ImageHandle; N], center: Option<&ImageHandle>) -> Vec<String> {
    slots
        .into_iter()
        .chain(center)
        .map(|handle| handle.id.clone())
        .collect()
}
