//! Raw and decoded attribute values.

use serde::{Deserialize, Serialize};

use super::attrs::{
    format_color, parse_color, Alignment, BackgroundType, Gradient, Spacing, TextDecoration,
    UnitSet,
};
use crate::border::BorderRecord;
use crate::error::{DecodeError, DecodeResult};
use crate::image::ImageHandle;
use crate::key::{AttributeName, DeriveTarget, ValueShape};

/// A value as stored in a [`ThemeMap`](super::ThemeMap).
///
/// Values carry no attribute information; the same text may be a color, a
/// derive target or a spacing list depending on the key it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeValue {
    Text(String),
    Int(i32),
    Byte(u8),
    Units([u8; 4]),
    Gradient(Gradient),
    Image(ImageHandle),
    Border(BorderRecord),
    Font(String),
}

impl ThemeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ThemeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageHandle> {
        match self {
            ThemeValue::Image(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn as_border(&self) -> Option<&BorderRecord> {
        match self {
            ThemeValue::Border(record) => Some(record),
            _ => None,
        }
    }

    /// Reads an integer from numeric values or numeric text.
    fn as_integer(&self) -> Option<i64> {
        match self {
            ThemeValue::Int(n) => Some(i64::from(*n)),
            ThemeValue::Byte(b) => Some(i64::from(*b)),
            ThemeValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValue::Text(text) | ThemeValue::Font(text) => f.write_str(text),
            ThemeValue::Int(n) => write!(f, "{}", n),
            ThemeValue::Byte(b) => write!(f, "{}", b),
            ThemeValue::Units([a, b, c, d]) => write!(f, "{},{},{},{}", a, b, c, d),
            ThemeValue::Gradient(gradient) => write!(f, "{}", gradient),
            ThemeValue::Image(handle) => f.write_str(&handle.id),
            ThemeValue::Border(record) => write!(f, "{} border", record.kind),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(text: &str) -> Self {
        ThemeValue::Text(text.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(text: String) -> Self {
        ThemeValue::Text(text)
    }
}

impl From<i32> for ThemeValue {
    fn from(n: i32) -> Self {
        ThemeValue::Int(n)
    }
}

impl From<u8> for ThemeValue {
    fn from(b: u8) -> Self {
        ThemeValue::Byte(b)
    }
}

impl From<[u8; 4]> for ThemeValue {
    fn from(units: [u8; 4]) -> Self {
        ThemeValue::Units(units)
    }
}

impl From<Gradient> for ThemeValue {
    fn from(gradient: Gradient) -> Self {
        ThemeValue::Gradient(gradient)
    }
}

impl From<ImageHandle> for ThemeValue {
    fn from(handle: ImageHandle) -> Self {
        ThemeValue::Image(handle)
    }
}

impl From<BorderRecord> for ThemeValue {
    fn from(record: BorderRecord) -> Self {
        ThemeValue::Border(record)
    }
}

/// An attribute value decoded according to its attribute's shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue {
    Color(u32),
    Derive(DeriveTarget),
    Alignment(Alignment),
    TextDecoration(TextDecoration),
    Border(BorderRecord),
    Font(String),
    Image(ImageHandle),
    BackgroundType(BackgroundType),
    Gradient(Gradient),
    Transparency(u8),
    Spacing(Spacing),
    Units(UnitSet),
}

impl StyleValue {
    /// Decodes a stored value for `attribute`.
    ///
    /// Numeric attributes accept numbers stored as text, as older theme
    /// files do.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidValue`] when the value does not have
    /// the attribute's shape, or [`DecodeError::InvalidDeriveTarget`] for a
    /// malformed `derive` value.
    pub fn decode(attribute: AttributeName, value: &ThemeValue) -> DecodeResult<StyleValue> {
        let invalid = |reason: &str| DecodeError::invalid_value(attribute, value.to_string(), reason);

        let decoded = match attribute.shape() {
            ValueShape::Color => match value {
                ThemeValue::Text(text) => parse_color(text).map(StyleValue::Color),
                ThemeValue::Int(n) => u32::try_from(*n).ok().map(StyleValue::Color),
                _ => None,
            }
            .ok_or_else(|| invalid("expected a hex color"))?,
            ValueShape::DeriveTarget => match value {
                ThemeValue::Text(text) => StyleValue::Derive(DeriveTarget::parse(text)?),
                _ => return Err(invalid("expected a style name")),
            },
            ValueShape::Alignment => value
                .as_integer()
                .and_then(|n| i32::try_from(n).ok())
                .and_then(Alignment::from_code)
                .map(StyleValue::Alignment)
                .ok_or_else(|| invalid("expected an alignment code"))?,
            ValueShape::TextDecoration => value
                .as_integer()
                .and_then(|n| i32::try_from(n).ok())
                .and_then(TextDecoration::from_code)
                .map(StyleValue::TextDecoration)
                .ok_or_else(|| invalid("expected a text decoration code"))?,
            ValueShape::Border => match value {
                ThemeValue::Border(record) => StyleValue::Border(record.clone()),
                _ => return Err(invalid("expected a border record")),
            },
            ValueShape::Font => match value {
                ThemeValue::Font(name) | ThemeValue::Text(name) => StyleValue::Font(name.clone()),
                _ => return Err(invalid("expected a font")),
            },
            ValueShape::Image => match value {
                ThemeValue::Image(handle) => StyleValue::Image(handle.clone()),
                _ => return Err(invalid("expected an image")),
            },
            ValueShape::BackgroundType => value
                .as_integer()
                .and_then(|n| u8::try_from(n).ok())
                .and_then(BackgroundType::from_code)
                .map(StyleValue::BackgroundType)
                .ok_or_else(|| invalid("expected a background type code"))?,
            ValueShape::Gradient => match value {
                ThemeValue::Gradient(gradient) => StyleValue::Gradient(*gradient),
                _ => return Err(invalid("expected a gradient")),
            },
            ValueShape::Transparency => value
                .as_integer()
                .and_then(|n| u8::try_from(n).ok())
                .map(StyleValue::Transparency)
                .ok_or_else(|| invalid("expected a number from 0 to 255"))?,
            ValueShape::Spacing => match value {
                ThemeValue::Text(text) => Spacing::parse(text)
                    .map(StyleValue::Spacing)
                    .ok_or_else(|| invalid("expected 4 values"))?,
                _ => return Err(invalid("expected 4 values")),
            },
            ValueShape::UnitSet => match value {
                ThemeValue::Units(bytes) => UnitSet::from_bytes(*bytes)
                    .map(StyleValue::Units)
                    .ok_or_else(|| invalid("unknown unit code"))?,
                _ => return Err(invalid("expected 4 unit codes")),
            },
        };
        Ok(decoded)
    }

    /// Returns the canonical stored form.
    pub fn encode(&self) -> ThemeValue {
        match self {
            StyleValue::Color(rgb) => ThemeValue::Text(format_color(*rgb)),
            StyleValue::Derive(target) => ThemeValue::Text(target.encode()),
            StyleValue::Alignment(a) => ThemeValue::Int(a.code()),
            StyleValue::TextDecoration(d) => ThemeValue::Int(d.code()),
            StyleValue::Border(record) => ThemeValue::Border(record.clone()),
            StyleValue::Font(name) => ThemeValue::Font(name.clone()),
            StyleValue::Image(handle) => ThemeValue::Image(handle.clone()),
            StyleValue::BackgroundType(t) => ThemeValue::Byte(t.code()),
            StyleValue::Gradient(g) => ThemeValue::Gradient(*g),
            StyleValue::Transparency(t) => ThemeValue::Text(t.to_string()),
            StyleValue::Spacing(s) => ThemeValue::Text(s.to_string()),
            StyleValue::Units(u) => ThemeValue::Units(u.to_bytes()),
        }
    }

    pub fn shape(&self) -> ValueShape {
        match self {
            StyleValue::Color(_) => ValueShape::Color,
            StyleValue::Derive(_) => ValueShape::DeriveTarget,
            StyleValue::Alignment(_) => ValueShape::Alignment,
            StyleValue::TextDecoration(_) => ValueShape::TextDecoration,
            StyleValue::Border(_) => ValueShape::Border,
            StyleValue::Font(_) => ValueShape::Font,
            StyleValue::Image(_) => ValueShape::Image,
            StyleValue::BackgroundType(_) => ValueShape::BackgroundType,
            StyleValue::Gradient(_) => ValueShape::Gradient,
            StyleValue::Transparency(_) => ValueShape::Transparency,
            StyleValue::Spacing(_) => ValueShape::Spacing,
            StyleValue::Units(_) => ValueShape::UnitSet,
        }
    }
}
