//! Encoding and decoding of style keys.

use serde::{Deserialize, Serialize};

use super::attribute::AttributeName;
use super::state::StateTag;
use crate::error::{DecodeError, DecodeResult};

/// Prefix marking theme constant keys (`@name`).
pub const CONSTANT_PREFIX: char = '@';

/// A decoded style key: which UIID, in which state, for which attribute.
///
/// An empty `uiid` denotes the global (theme default) style.
///
/// # Example
///
/// ```rust
/// use themekit::{AttributeKey, AttributeName, StateTag};
///
/// let key = AttributeKey::decode("Button.sel#fgColor").unwrap();
/// assert_eq!(key.uiid, "Button");
/// assert_eq!(key.state, StateTag::Selected);
/// assert_eq!(key.attribute, AttributeName::FgColor);
/// assert_eq!(key.encode(), "Button.sel#fgColor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeKey {
    pub uiid: String,
    pub state: StateTag,
    pub attribute: AttributeName,
}

impl AttributeKey {
    /// Creates a key for a named UIID.
    pub fn new(uiid: impl Into<String>, state: StateTag, attribute: AttributeName) -> Self {
        Self {
            uiid: uiid.into(),
            state,
            attribute,
        }
    }

    /// Creates a key for the global style.
    pub fn global(state: StateTag, attribute: AttributeName) -> Self {
        Self::new("", state, attribute)
    }

    /// Returns `true` if this key belongs to the global style.
    pub fn is_global(&self) -> bool {
        self.uiid.is_empty()
    }

    /// Returns the same node with another attribute.
    pub fn with_attribute(&self, attribute: AttributeName) -> Self {
        Self::new(self.uiid.clone(), self.state, attribute)
    }

    /// Returns `true` if [`AttributeKey::decode`] reproduces this key from
    /// its encoding.
    ///
    /// A UIID must not contain `.` and must not start with `@`.
    pub fn is_canonical(&self) -> bool {
        !self.uiid.contains('.') && !self.uiid.starts_with(CONSTANT_PREFIX)
    }

    /// Encodes the key as `<UIID>.<state#><attribute>`.
    pub fn encode(&self) -> String {
        let mut out = node_prefix(&self.uiid, self.state);
        out.push_str(self.attribute.as_str());
        out
    }

    /// Decodes a style key.
    ///
    /// The key is split on its first `.`; without one the key is global. The
    /// remainder is split on its first `#`, and the left part names the state
    /// by substring match (see [`StateTag::detect`]).
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownStateTag`] if the state segment has no reserved token
    /// - [`DecodeError::UnknownAttribute`] if the attribute token is not recognized
    pub fn decode(key: &str) -> DecodeResult<AttributeKey> {
        let (uiid, state, token) = split_key(key)?;
        let attribute = AttributeName::parse(token).ok_or_else(|| DecodeError::UnknownAttribute {
            key: key.to_string(),
            attribute: token.to_string(),
        })?;

        Ok(AttributeKey::new(uiid, state, attribute))
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for AttributeKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKey::decode(s)
    }
}

/// Splits a key into its node and raw attribute token without checking the
/// token against the known attributes.
pub(crate) fn split_key(key: &str) -> DecodeResult<(&str, StateTag, &str)> {
    let (uiid, rest) = key.split_once('.').unwrap_or(("", key));

    match rest.split_once('#') {
        Some((segment, token)) => {
            let state = StateTag::detect(segment).ok_or_else(|| DecodeError::UnknownStateTag {
                key: key.to_string(),
                token: segment.to_string(),
            })?;
            Ok((uiid, state, token))
        }
        None => Ok((uiid, StateTag::Unselected, rest)),
    }
}

/// Returns the key prefix shared by every attribute of one style node.
pub(crate) fn node_prefix(uiid: &str, state: StateTag) -> String {
    let mut out = String::with_capacity(uiid.len() + 8);
    if !uiid.is_empty() {
        out.push_str(uiid);
        out.push('.');
    }
    out.push_str(state.prefix());
    out
}

/// Classification of a raw theme key.
///
/// Unlike [`AttributeKey::decode`], classification never fails: keys that are
/// not valid style keys are kept verbatim so that attributes written by newer
/// toolkit versions pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeKey {
    /// A recognized style key.
    Style(AttributeKey),
    /// A theme constant, stored without its `@` prefix.
    Constant(String),
    /// Any other key, preserved exactly as found.
    Unrecognized(String),
}

impl ThemeKey {
    /// Classifies a raw key.
    ///
    /// A key is only a [`ThemeKey::Style`] if it is in canonical form, so that
    /// [`ThemeKey::encode`] always gives back `raw`. Decodable but
    /// non-canonical spellings such as `Button.xsel#fgColor` are unrecognized.
    pub fn parse(raw: &str) -> ThemeKey {
        if let Some(name) = raw.strip_prefix(CONSTANT_PREFIX) {
            return ThemeKey::Constant(name.to_string());
        }
        match AttributeKey::decode(raw) {
            Ok(key) if key.encode() == raw => ThemeKey::Style(key),
            _ => ThemeKey::Unrecognized(raw.to_string()),
        }
    }

    /// Re-encodes the key.
    pub fn encode(&self) -> String {
        match self {
            ThemeKey::Style(key) => key.encode(),
            ThemeKey::Constant(name) => format!("{}{}", CONSTANT_PREFIX, name),
            ThemeKey::Unrecognized(raw) => raw.clone(),
        }
    }

    /// Returns the UIID this key belongs to, if it is a style key.
    pub fn uiid(&self) -> Option<&str> {
        match self {
            ThemeKey::Style(key) => Some(&key.uiid),
            _ => None,
        }
    }
}
