//! Values of the `derive` attribute.

use serde::{Deserialize, Serialize};

use super::state::StateTag;
use crate::error::{DecodeError, DecodeResult};

/// The base style named by a `derive` attribute.
///
/// A target without a state suffix continues in the state being resolved;
/// an explicit suffix overrides it. Unselected has no suffix, so a target
/// never names it explicitly. Serialized as its encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DeriveTarget {
    base: String,
    state: Option<StateTag>,
}

impl DeriveTarget {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            state: None,
        }
    }

    /// Creates a target with a state suffix.
    ///
    /// [`StateTag::Unselected`] yields the same bare target as
    /// [`DeriveTarget::new`].
    pub fn with_state(base: impl Into<String>, state: StateTag) -> Self {
        Self {
            base: base.into(),
            state: state.token().map(|_| state),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The explicit state suffix, never [`StateTag::Unselected`].
    pub fn state(&self) -> Option<StateTag> {
        self.state
    }

    /// Parses a derive value.
    ///
    /// Accepted forms are `Base` and `Base.<token>` with `token` one of `sel`,
    /// `press`, `dis`. The forms `Base.` and `Base.<token>#` written by older
    /// editors are accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDeriveTarget`] for an empty base or an
    /// unknown suffix.
    pub fn parse(value: &str) -> DecodeResult<DeriveTarget> {
        let trimmed = value.trim();
        let invalid = || DecodeError::InvalidDeriveTarget {
            value: value.to_string(),
        };

        let (base, suffix) = match trimmed.split_once('.') {
            Some((base, suffix)) => (base, Some(suffix)),
            None => (trimmed, None),
        };
        if base.is_empty() || base.contains('#') {
            return Err(invalid());
        }

        let state = match suffix.map(|s| s.strip_suffix('#').unwrap_or(s)) {
            None | Some("") => None,
            Some(token) => Some(StateTag::from_token(token).ok_or_else(invalid)?),
        };

        Ok(DeriveTarget {
            base: base.to_string(),
            state,
        })
    }

    /// Encodes the target in its canonical form.
    pub fn encode(&self) -> String {
        match self.state.and_then(StateTag::token) {
            Some(token) => format!("{}.{}", self.base, token),
            None => self.base.clone(),
        }
    }

    /// Returns the node resolution continues at when leaving `(uiid, current)`.
    ///
    /// Without a suffix the current state carries over, except that a target
    /// naming its own UIID continues at that UIID's unselected node
    /// (`Button.sel#derive = Button`).
    pub fn next_node(&self, uiid: &str, current: StateTag) -> (&str, StateTag) {
        let state = match self.state {
            Some(state) => state,
            None if self.base == uiid => StateTag::Unselected,
            None => current,
        };
        (&self.base, state)
    }
}

impl std::fmt::Display for DeriveTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<DeriveTarget> for String {
    fn from(target: DeriveTarget) -> Self {
        target.encode()
    }
}

impl TryFrom<String> for DeriveTarget {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DeriveTarget::parse(&value)
    }
}

impl std::str::FromStr for DeriveTarget {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeriveTarget::parse(s)
    }
}
