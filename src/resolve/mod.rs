//! Derive chain resolution.
//!
//! A style node inherits every attribute it does not set from the node its
//! `derive` attribute names, transitively. Resolution flattens that chain
//! into a [`ResolvedStyle`], where each attribute holds the value from the
//! nearest node that sets it.
//!
//! - [`resolve`], [`StyleResolver`]: flatten one node, or every node in a state
//! - [`ResolveOptions`]: depth limit and global fallback
//! - [`ResolvedStyle`]: the result, with per-attribute sources and diagnostics
//! - [`validate_derives`]: whole-theme check for malformed derives and cycles
//!
//! Resolution never fails. A cycle, a malformed derive value or an overlong
//! chain stops the walk and is recorded as a [`ResolveDiagnostic`]; the
//! attributes found up to that point are kept.

mod error;
mod resolver;
mod style;
mod validate;

pub use error::{CycleDetected, ResolveError};
pub use resolver::{resolve, ResolveOptions, StyleResolver};
pub use style::{ResolveDiagnostic, ResolvedAttribute, ResolvedStyle, StyleNode};
pub use validate::validate_derives;
