//! Core model of a UI theme editor.
//!
//! A theme is a flat map from string keys to values. Style keys name a UIID,
//! a rendering state and an attribute (`Button.sel#fgColor`); styles inherit
//! from one another through `derive` attributes; borders and backgrounds are
//! stored as structured values; images come in density-tagged variants.
//!
//! # Modules
//!
//! - [`key`] - Style key codec: [`AttributeKey`], [`StateTag`], [`AttributeName`]
//! - [`theme`] - [`ThemeMap`] storage and typed attribute values
//! - [`resolve`] - Derive chain resolution into a [`ResolvedStyle`]
//! - [`image`] - [`MultiImage`] density selection and image lookup
//! - [`border`] - [`BorderRecord`] to [`BorderSpec`] codec
//! - [`config`] - [`CoreConfig`] loaded from YAML or JSON
//! - [`session`] - [`EditSession`], the context every operation runs in
//!
//! # Example
//!
//! ```rust
//! use themekit::{AttributeName, EditSession, ImageTable, StateTag, ThemeMap};
//!
//! let theme = ThemeMap::new()
//!     .with("Label.fgColor", "ffffff")
//!     .with("Button.derive", "Label")
//!     .with("Button.sel#fgColor", "000000");
//! let session = EditSession::new(theme, ImageTable::default());
//!
//! let style = session.resolve("Button", StateTag::Selected);
//! assert_eq!(style.text(AttributeName::FgColor), Some("000000"));
//! ```
//!
//! # Logging
//!
//! Recoverable oddities such as derive cycles, unknown attributes and
//! degraded image borders are reported through [`tracing`]. The library
//! never installs a subscriber.

pub mod border;
pub mod config;
mod error;
pub mod image;
pub mod key;
pub mod resolve;
pub mod session;
pub mod theme;

pub use border::{BorderKind, BorderOptions, BorderRecord, BorderSpec};
pub use config::{ConfigError, CoreConfig};
pub use error::{DecodeError, DecodeResult};
pub use image::{select, DensityTag, ImageHandle, ImageLookup, ImageTable, MultiImage, MultiImageError};
pub use key::{AttributeKey, AttributeName, DeriveTarget, StateTag, ThemeKey, ValueShape};
pub use resolve::{
    resolve, validate_derives, CycleDetected, ResolveDiagnostic, ResolveError, ResolveOptions,
    ResolvedStyle, StyleNode, StyleResolver,
};
pub use session::EditSession;
pub use theme::{Background, StyleValue, ThemeMap, ThemeValue};
