//! Flattened styles produced by resolution.

use std::collections::BTreeMap;

use serde::Serialize;

use super::error::CycleDetected;
use crate::error::DecodeResult;
use crate::key::{AttributeName, StateTag};
use crate::theme::{Background, StyleValue, ThemeValue};

/// One `(uiid, state)` node of a derive chain. An empty `uiid` is the
/// global style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StyleNode {
    pub uiid: String,
    pub state: StateTag,
}

impl StyleNode {
    pub fn new(uiid: impl Into<String>, state: StateTag) -> Self {
        Self {
            uiid: uiid.into(),
            state,
        }
    }

    pub fn is_global(&self) -> bool {
        self.uiid.is_empty()
    }
}

impl std::fmt::Display for StyleNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let uiid = if self.uiid.is_empty() {
            "(global)"
        } else {
            &self.uiid
        };
        match self.state.token() {
            Some(token) => write!(f, "{}.{}", uiid, token),
            None => f.write_str(uiid),
        }
    }
}

/// A resolved attribute value and the node that supplied it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAttribute {
    pub value: ThemeValue,
    pub source: StyleNode,
}

/// Why a resolution stopped early.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveDiagnostic {
    /// The chain revisited a node.
    Cycle(CycleDetected),
    /// A `derive` value could not be parsed; the chain stops at `node`.
    InvalidDerive { node: StyleNode, value: String },
    /// More derive links than the configured maximum.
    DepthLimit { limit: usize },
}

/// The flattened attribute set of one `(uiid, state)`.
///
/// Each attribute holds the nearest explicitly set value along the derive
/// chain. Attributes no node defines are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub(super) node: StyleNode,
    pub(super) attributes: BTreeMap<AttributeName, ResolvedAttribute>,
    pub(super) passthrough: BTreeMap<String, ThemeValue>,
    pub(super) chain: Vec<StyleNode>,
    pub(super) diagnostics: Vec<ResolveDiagnostic>,
}

impl ResolvedStyle {
    pub(super) fn new(node: StyleNode) -> Self {
        Self {
            node,
            attributes: BTreeMap::new(),
            passthrough: BTreeMap::new(),
            chain: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn uiid(&self) -> &str {
        &self.node.uiid
    }

    pub fn state(&self) -> StateTag {
        self.node.state
    }

    pub fn get(&self, attribute: AttributeName) -> Option<&ThemeValue> {
        self.attributes.get(&attribute).map(|a| &a.value)
    }

    /// Returns the value as text, for color and other text-shaped attributes.
    pub fn text(&self, attribute: AttributeName) -> Option<&str> {
        self.get(attribute).and_then(ThemeValue::as_text)
    }

    pub fn attribute(&self, attribute: AttributeName) -> Option<&ResolvedAttribute> {
        self.attributes.get(&attribute)
    }

    /// The node that supplied `attribute`.
    pub fn source(&self, attribute: AttributeName) -> Option<&StyleNode> {
        self.attributes.get(&attribute).map(|a| &a.source)
    }

    pub fn is_defined(&self, attribute: AttributeName) -> bool {
        self.attributes.contains_key(&attribute)
    }

    /// Decodes `attribute` according to its shape, if defined.
    pub fn decoded(&self, attribute: AttributeName) -> Option<DecodeResult<StyleValue>> {
        self.get(attribute)
            .map(|value| StyleValue::decode(attribute, value))
    }

    /// The background formed by the resolved `bgType`, `bgImage` and
    /// `bgGradient`.
    pub fn background(&self) -> DecodeResult<Option<Background>> {
        Background::from_values(
            self.get(AttributeName::BgType),
            self.get(AttributeName::BgImage),
            self.get(AttributeName::BgGradient),
        )
    }

    pub fn attributes(&self) -> impl Iterator<Item = (AttributeName, &ResolvedAttribute)> {
        self.attributes.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Entries with unknown attributes at the requested node, kept verbatim.
    pub fn passthrough(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.passthrough.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Nodes visited, starting with the requested node.
    pub fn chain(&self) -> &[StyleNode] {
        &self.chain
    }

    pub fn diagnostics(&self) -> &[ResolveDiagnostic] {
        &self.diagnostics
    }

    pub fn has_cycle(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, ResolveDiagnostic::Cycle(_)))
    }

    /// Returns `true` if the chain ended without diagnostics.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
