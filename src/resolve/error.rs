//! Derive chain errors.

use serde::Serialize;
use thiserror::Error;

use super::style::StyleNode;

/// A derive chain that returns to a node it already visited.
///
/// `path` lists the nodes in visiting order and ends with the repeated node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("cycle detected in derive chain: {}", format_path(.path))]
pub struct CycleDetected {
    pub path: Vec<StyleNode>,
}

fn format_path(path: &[StyleNode]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Error returned by [`validate_derives`](super::validate_derives).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A `derive` value that is not a valid target.
    #[error("invalid derive target '{value}' at '{key}'")]
    InvalidDerive { key: String, value: String },

    #[error(transparent)]
    Cycle(#[from] CycleDetected),
}
