//! Theme storage and attribute values.
//!
//! This module provides:
//!
//! - [`ThemeMap`]: the flat key-value store, with cheap copy-on-write snapshots
//! - [`ThemeValue`]: the raw stored value of an entry
//! - [`StyleValue`]: a value decoded according to its attribute's [`ValueShape`](crate::ValueShape)
//! - [`Background`]: the `bgType`/`bgImage`/`bgGradient` triple read and written as one
//! - typed attribute values: [`Spacing`], [`UnitSet`], [`Alignment`],
//!   [`TextDecoration`], [`BackgroundType`], [`Gradient`] and color helpers

mod attrs;
mod background;
mod map;
mod value;

pub use attrs::{
    format_color, parse_color, Alignment, BackgroundType, Gradient, Spacing, TextDecoration,
    UnitSet, UnitType,
};
pub use background::Background;
pub use map::ThemeMap;
pub use value::{StyleValue, ThemeValue};
