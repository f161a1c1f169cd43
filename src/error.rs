//! Decoding errors shared by the key, value and border codecs.
//!
//! Every failure in this crate is recoverable: callers decide whether to drop,
//! repair or surface an offending entry. Nothing here is fatal.

use thiserror::Error;

use crate::border::BorderKind;
use crate::key::AttributeName;

/// Error returned when a theme key or value cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The attribute segment of a key is not a recognized attribute.
    ///
    /// Such keys are kept verbatim by [`ThemeKey::parse`](crate::ThemeKey::parse)
    /// so newer theme files survive a round trip.
    #[error("unknown attribute '{attribute}' in key '{key}'")]
    UnknownAttribute { key: String, attribute: String },

    /// The segment before `#` names none of the reserved state tokens.
    #[error("unknown state tag '{token}' in key '{key}'")]
    UnknownStateTag { key: String, token: String },

    /// A `derive` value that is not `Base` or `Base.<state>`.
    #[error("invalid derive target '{value}'")]
    InvalidDeriveTarget { value: String },

    /// A value whose shape does not match its attribute.
    #[error("invalid value '{value}' for attribute '{attribute}': {reason}")]
    InvalidValue {
        attribute: AttributeName,
        value: String,
        reason: String,
    },

    /// A border record with missing, non-positive or malformed parameters.
    #[error("invalid {kind} border parameters: {reason}")]
    InvalidBorderParams { kind: BorderKind, reason: String },

    /// A border image slot that the image lookup cannot resolve.
    #[error("{kind} border slot '{slot}' refers to missing image '{name}'")]
    MissingImage {
        kind: BorderKind,
        slot: &'static str,
        name: String,
    },
}

impl DecodeError {
    pub(crate) fn invalid_value(
        attribute: AttributeName,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidValue {
            attribute,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn border(kind: BorderKind, reason: impl Into<String>) -> Self {
        DecodeError::InvalidBorderParams {
            kind,
            reason: reason.into(),
        }
    }
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
