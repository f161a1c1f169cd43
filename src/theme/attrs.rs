//! Typed attribute values and their stored codes.

use serde::{Deserialize, Serialize};

/// Parses a hex RGB color such as `"ff00aa"`, `"#ff00aa"` or `"0xff00aa"`.
///
/// Leading zeros may be omitted (`"ff"` is blue). Returns `None` for empty
/// or non-hex input.
pub fn parse_color(text: &str) -> Option<u32> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('#'))
        .unwrap_or(text);
    if digits.is_empty() || digits.len() > 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Formats a color as six lowercase hex digits.
pub fn format_color(rgb: u32) -> String {
    format!("{:06x}", rgb)
}

/// Horizontal content alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn code(self) -> i32 {
        match self {
            Alignment::Left => 1,
            Alignment::Right => 3,
            Alignment::Center => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Alignment> {
        match code {
            1 => Some(Alignment::Left),
            3 => Some(Alignment::Right),
            4 => Some(Alignment::Center),
            _ => None,
        }
    }
}

/// Text decoration drawn over or around a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethru,
    Overline,
    Raised3d,
    Lowered3d,
    Shadow3dNorth,
}

impl TextDecoration {
    pub fn code(self) -> i32 {
        match self {
            TextDecoration::None => 0,
            TextDecoration::Underline => 1,
            TextDecoration::Strikethru => 2,
            TextDecoration::Overline => 4,
            TextDecoration::Raised3d => 8,
            TextDecoration::Lowered3d => 16,
            TextDecoration::Shadow3dNorth => 32,
        }
    }

    pub fn from_code(code: i32) -> Option<TextDecoration> {
        match code {
            0 => Some(TextDecoration::None),
            1 => Some(TextDecoration::Underline),
            2 => Some(TextDecoration::Strikethru),
            4 => Some(TextDecoration::Overline),
            8 => Some(TextDecoration::Raised3d),
            16 => Some(TextDecoration::Lowered3d),
            32 => Some(TextDecoration::Shadow3dNorth),
            _ => None,
        }
    }
}

/// How a style's background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundType {
    None,
    ImageScaled,
    TileBoth,
    TileVerticalAlignLeft,
    TileHorizontalAlignTop,
    GradientLinearVertical,
    GradientLinearHorizontal,
    GradientRadial,
    AlignedTop,
    AlignedBottom,
    AlignedLeft,
    AlignedRight,
    AlignedCenter,
    AlignedTopLeft,
    AlignedTopRight,
    AlignedBottomLeft,
    AlignedBottomRight,
    TileHorizontalAlignCenter,
    TileHorizontalAlignBottom,
    TileVerticalAlignCenter,
    TileVerticalAlignRight,
    ScaledFill,
    ScaledFit,
}

impl BackgroundType {
    pub const ALL: [BackgroundType; 23] = [
        BackgroundType::None,
        BackgroundType::ImageScaled,
        BackgroundType::TileBoth,
        BackgroundType::TileVerticalAlignLeft,
        BackgroundType::TileHorizontalAlignTop,
        BackgroundType::GradientLinearVertical,
        BackgroundType::GradientLinearHorizontal,
        BackgroundType::GradientRadial,
        BackgroundType::AlignedTop,
        BackgroundType::AlignedBottom,
        BackgroundType::AlignedLeft,
        BackgroundType::AlignedRight,
        BackgroundType::AlignedCenter,
        BackgroundType::AlignedTopLeft,
        BackgroundType::AlignedTopRight,
        BackgroundType::AlignedBottomLeft,
        BackgroundType::AlignedBottomRight,
        BackgroundType::TileHorizontalAlignCenter,
        BackgroundType::TileHorizontalAlignBottom,
        BackgroundType::TileVerticalAlignCenter,
        BackgroundType::TileVerticalAlignRight,
        BackgroundType::ScaledFill,
        BackgroundType::ScaledFit,
    ];

    /// Returns the stored byte code.
    pub fn code(self) -> u8 {
        match self {
            BackgroundType::None => 0,
            BackgroundType::ImageScaled => 1,
            BackgroundType::TileBoth => 2,
            BackgroundType::TileVerticalAlignLeft => 3,
            BackgroundType::TileHorizontalAlignTop => 4,
            BackgroundType::GradientLinearVertical => 6,
            BackgroundType::GradientLinearHorizontal => 7,
            BackgroundType::GradientRadial => 8,
            BackgroundType::AlignedTop => 20,
            BackgroundType::AlignedBottom => 21,
            BackgroundType::AlignedLeft => 22,
            BackgroundType::AlignedRight => 23,
            BackgroundType::AlignedCenter => 24,
            BackgroundType::AlignedTopLeft => 25,
            BackgroundType::AlignedTopRight => 26,
            BackgroundType::AlignedBottomLeft => 27,
            BackgroundType::AlignedBottomRight => 28,
            BackgroundType::TileHorizontalAlignCenter => 29,
            BackgroundType::TileHorizontalAlignBottom => 30,
            BackgroundType::TileVerticalAlignCenter => 31,
            BackgroundType::TileVerticalAlignRight => 32,
            BackgroundType::ScaledFill => 33,
            BackgroundType::ScaledFit => 34,
        }
    }

    pub fn from_code(code: u8) -> Option<BackgroundType> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Returns `true` for types painted from `bgGradient`.
    pub fn is_gradient(self) -> bool {
        matches!(
            self,
            BackgroundType::GradientLinearVertical
                | BackgroundType::GradientLinearHorizontal
                | BackgroundType::GradientRadial
        )
    }

    /// Returns `true` for types painted from `bgImage`.
    pub fn is_image(self) -> bool {
        self != BackgroundType::None && !self.is_gradient()
    }
}

/// A two-color gradient.
///
/// `x`, `y` and `size` are relative to the component bounds and only matter
/// for radial gradients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: u32,
    pub end: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Gradient {
    /// Creates a gradient centered in the component.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            x: 0.5,
            y: 0.5,
            size: 1.0,
        }
    }

    pub fn centered_at(mut self, x: f32, y: f32, size: f32) -> Self {
        self.x = x;
        self.y = y;
        self.size = size;
        self
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            format_color(self.start),
            format_color(self.end),
            self.x,
            self.y,
            self.size
        )
    }
}

/// Padding or margin widths, stored as `"top,bottom,left,right"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Spacing {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn uniform(width: i32) -> Self {
        Self::new(width, width, width, width)
    }

    /// Parses four integers separated by commas and/or spaces.
    pub fn parse(text: &str) -> Option<Spacing> {
        let mut values = text
            .split([',', ' '])
            .filter(|token| !token.is_empty())
            .map(str::parse::<i32>);
        let mut next = || values.next()?.ok();
        let spacing = Spacing::new(next()?, next()?, next()?, next()?);
        match values.next() {
            Some(_) => None,
            None => Some(spacing),
        }
    }
}

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.top, self.bottom, self.left, self.right)
    }
}

/// Unit a padding or margin width is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    #[default]
    Pixels,
    ScreenPercentage,
    Dips,
}

impl UnitType {
    pub fn code(self) -> u8 {
        match self {
            UnitType::Pixels => 0,
            UnitType::ScreenPercentage => 1,
            UnitType::Dips => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<UnitType> {
        match code {
            0 => Some(UnitType::Pixels),
            1 => Some(UnitType::ScreenPercentage),
            2 => Some(UnitType::Dips),
            _ => None,
        }
    }
}

/// Per-edge units, stored as four bytes indexed top, left, bottom, right.
///
/// Note the stored order differs from [`Spacing`]'s text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnitSet {
    pub top: UnitType,
    pub left: UnitType,
    pub bottom: UnitType,
    pub right: UnitType,
}

impl UnitSet {
    pub fn uniform(unit: UnitType) -> Self {
        Self {
            top: unit,
            left: unit,
            bottom: unit,
            right: unit,
        }
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Option<UnitSet> {
        Some(UnitSet {
            top: UnitType::from_code(bytes[0])?,
            left: UnitType::from_code(bytes[1])?,
            bottom: UnitType::from_code(bytes[2])?,
            right: UnitType::from_code(bytes[3])?,
        })
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [
            self.top.code(),
            self.left.code(),
            self.bottom.code(),
            self.right.code(),
        ]
    }

    /// An all-pixel set is the default and is not stored.
    pub fn is_all_pixels(self) -> bool {
        self == UnitSet::default()
    }
}
