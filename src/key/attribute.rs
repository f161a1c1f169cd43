//! Style attribute names and the value shape each one carries.

use serde::{Deserialize, Serialize};

/// A recognized style attribute.
///
/// Attribute tokens are matched exactly; `alignment` is not `align` and
/// `fgColorDark` is not `fgColor`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AttributeName {
    FgColor,
    BgColor,
    Derive,
    Align,
    TextDecoration,
    Border,
    Font,
    BgImage,
    BgType,
    BgGradient,
    Transparency,
    Padding,
    PadUnit,
    Margin,
    MarUnit,
}

/// The encoded shape of an attribute's value in a theme map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// Hex RGB string such as `"ff00aa"`.
    Color,
    /// `Base` or `Base.<state>` string.
    DeriveTarget,
    /// Integer alignment code.
    Alignment,
    /// Integer text decoration code.
    TextDecoration,
    /// Border record.
    Border,
    /// Opaque font handle.
    Font,
    /// Opaque image handle.
    Image,
    /// Background type byte.
    BackgroundType,
    /// Gradient colors, center and size.
    Gradient,
    /// Numeric string in `0..=255`.
    Transparency,
    /// CSV of four integers: top, bottom, left, right.
    Spacing,
    /// Four unit bytes indexed top, left, bottom, right.
    UnitSet,
}

impl AttributeName {
    /// All attributes in declaration order.
    pub const ALL: [AttributeName; 15] = [
        AttributeName::FgColor,
        AttributeName::BgColor,
        AttributeName::Derive,
        AttributeName::Align,
        AttributeName::TextDecoration,
        AttributeName::Border,
        AttributeName::Font,
        AttributeName::BgImage,
        AttributeName::BgType,
        AttributeName::BgGradient,
        AttributeName::Transparency,
        AttributeName::Padding,
        AttributeName::PadUnit,
        AttributeName::Margin,
        AttributeName::MarUnit,
    ];

    /// Returns the token used in theme keys.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::FgColor => "fgColor",
            AttributeName::BgColor => "bgColor",
            AttributeName::Derive => "derive",
            AttributeName::Align => "align",
            AttributeName::TextDecoration => "textDecoration",
            AttributeName::Border => "border",
            AttributeName::Font => "font",
            AttributeName::BgImage => "bgImage",
            AttributeName::BgType => "bgType",
            AttributeName::BgGradient => "bgGradient",
            AttributeName::Transparency => "transparency",
            AttributeName::Padding => "padding",
            AttributeName::PadUnit => "padUnit",
            AttributeName::Margin => "margin",
            AttributeName::MarUnit => "marUnit",
        }
    }

    /// Parses an attribute token. Matching is exact and case sensitive.
    pub fn parse(token: &str) -> Option<AttributeName> {
        match token {
            "fgColor" => Some(AttributeName::FgColor),
            "bgColor" => Some(AttributeName::BgColor),
            "derive" => Some(AttributeName::Derive),
            "align" => Some(AttributeName::Align),
            "textDecoration" => Some(AttributeName::TextDecoration),
            "border" => Some(AttributeName::Border),
            "font" => Some(AttributeName::Font),
            "bgImage" => Some(AttributeName::BgImage),
            "bgType" => Some(AttributeName::BgType),
            "bgGradient" => Some(AttributeName::BgGradient),
            "transparency" => Some(AttributeName::Transparency),
            "padding" => Some(AttributeName::Padding),
            "padUnit" => Some(AttributeName::PadUnit),
            "margin" => Some(AttributeName::Margin),
            "marUnit" => Some(AttributeName::MarUnit),
            _ => None,
        }
    }

    /// Returns the value shape this attribute is encoded with.
    ///
    /// | Attribute | Shape |
    /// |-----------|-------|
    /// | `fgColor`, `bgColor` | [`ValueShape::Color`] |
    /// | `derive` | [`ValueShape::DeriveTarget`] |
    /// | `align` | [`ValueShape::Alignment`] |
    /// | `textDecoration` | [`ValueShape::TextDecoration`] |
    /// | `border` | [`ValueShape::Border`] |
    /// | `font` | [`ValueShape::Font`] |
    /// | `bgImage` | [`ValueShape::Image`] |
    /// | `bgType` | [`ValueShape::BackgroundType`] |
    /// | `bgGradient` | [`ValueShape::Gradient`] |
    /// | `transparency` | [`ValueShape::Transparency`] |
    /// | `padding`, `margin` | [`ValueShape::Spacing`] |
    /// | `padUnit`, `marUnit` | [`ValueShape::UnitSet`] |
    pub fn shape(self) -> ValueShape {
        match self {
            AttributeName::FgColor | AttributeName::BgColor => ValueShape::Color,
            AttributeName::Derive => ValueShape::DeriveTarget,
            AttributeName::Align => ValueShape::Alignment,
            AttributeName::TextDecoration => ValueShape::TextDecoration,
            AttributeName::Border => ValueShape::Border,
            AttributeName::Font => ValueShape::Font,
            AttributeName::BgImage => ValueShape::Image,
            AttributeName::BgType => ValueShape::BackgroundType,
            AttributeName::BgGradient => ValueShape::Gradient,
            AttributeName::Transparency => ValueShape::Transparency,
            AttributeName::Padding | AttributeName::Margin => ValueShape::Spacing,
            AttributeName::PadUnit | AttributeName::MarUnit => ValueShape::UnitSet,
        }
    }
}

impl std::fmt::Display for AttributeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
