//! Theme key codec.
//!
//! Theme entries live in a flat key space. A style key has the form
//! `<UIID>.<state#><attribute>`:
//!
//! | Key | UIID | State | Attribute |
//! |-----|------|-------|-----------|
//! | `Button.fgColor` | `Button` | unselected | `fgColor` |
//! | `Button.sel#fgColor` | `Button` | selected | `fgColor` |
//! | `press#bgColor` | (global) | pressed | `bgColor` |
//! | `font` | (global) | unselected | `font` |
//!
//! Keys starting with `@` are theme constants and are not style keys.
//!
//! - [`StateTag`]: the rendering state a key applies to
//! - [`AttributeName`]: the closed set of style attributes, with their [`ValueShape`]
//! - [`AttributeKey`]: a decoded style key
//! - [`ThemeKey`]: classification of any raw key, preserving unknown ones
//! - [`DeriveTarget`]: the decoded value of a `derive` attribute

mod attribute;
mod codec;
mod derive;
mod state;

pub use attribute::{AttributeName, ValueShape};
pub use codec::{AttributeKey, ThemeKey, CONSTANT_PREFIX};
pub(crate) use codec::{node_prefix, split_key};
pub use derive::DeriveTarget;
pub use state::StateTag;
