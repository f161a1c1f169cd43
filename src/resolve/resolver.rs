//! Derive chain resolution.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::CycleDetected;
use super::style::{ResolveDiagnostic, ResolvedAttribute, ResolvedStyle, StyleNode};
use crate::key::{AttributeKey, AttributeName, StateTag, ThemeKey};
use crate::theme::{ThemeMap, ThemeValue};

/// Options controlling derive resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Maximum number of derive links followed.
    pub max_depth: usize,
    /// Fill attributes from the global style when a chain ends.
    pub global_fallback: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            global_fallback: true,
        }
    }
}

/// Resolves a style with default options.
///
/// # Example
///
/// ```rust
/// use themekit::{resolve, AttributeName, StateTag, ThemeMap};
///
/// let theme = ThemeMap::new()
///     .with("Button.derive", "Label")
///     .with("Label.fgColor", "ffffff")
///     .with("Button.sel#fgColor", "000000");
///
/// let selected = resolve(&theme, "Button", StateTag::Selected);
/// assert_eq!(selected.text(AttributeName::FgColor), Some("000000"));
///
/// let unselected = resolve(&theme, "Button", StateTag::Unselected);
/// assert_eq!(unselected.text(AttributeName::FgColor), Some("ffffff"));
/// ```
pub fn resolve(map: &ThemeMap, uiid: &str, state: StateTag) -> ResolvedStyle {
    StyleResolver::new(map).resolve(uiid, state)
}

/// Resolves styles against one theme.
///
/// Nothing is cached: every call reads the map as it is.
#[derive(Debug, Clone)]
pub struct StyleResolver<'a> {
    map: &'a ThemeMap,
    options: ResolveOptions,
}

impl<'a> StyleResolver<'a> {
    pub fn new(map: &'a ThemeMap) -> Self {
        Self {
            map,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolves `(uiid, state)`.
    ///
    /// Attributes set at the requested node win. Missing ones are filled from
    /// the node named by its `derive` attribute, then from that node's base,
    /// and so on. A derive without a state suffix keeps the current state.
    /// The walk stops when a node has no `derive`, when a node repeats, when
    /// a `derive` value is malformed, or at the depth limit; the last three
    /// are reported as diagnostics. Finally, if enabled, the global style of
    /// the requested state and then the unselected global style fill what is
    /// still missing.
    pub fn resolve(&self, uiid: &str, state: StateTag) -> ResolvedStyle {
        let requested = StyleNode::new(uiid, state);
        let mut style = ResolvedStyle::new(requested.clone());
        let mut visited: HashSet<StyleNode> = HashSet::new();
        let mut node = requested;
        let mut hops = 0;

        loop {
            if !visited.insert(node.clone()) {
                let mut path = style.chain.clone();
                path.push(node);
                let cycle = CycleDetected { path };
                tracing::warn!(error = %cycle, "stopping derive resolution");
                style.diagnostics.push(ResolveDiagnostic::Cycle(cycle));
                break;
            }
            self.collect(&mut style, &node);
            style.chain.push(node.clone());

            let (base, base_state) = match self.map.derive(&node.uiid, node.state) {
                Ok(Some(next)) => next,
                Ok(None) => break,
                Err(err) => {
                    let value = self.derive_value(&node).map(ThemeValue::to_string).unwrap_or_default();
                    tracing::warn!(node = %node, error = %err, "invalid derive target");
                    style.diagnostics.push(ResolveDiagnostic::InvalidDerive { node, value });
                    break;
                }
            };
            if hops == self.options.max_depth {
                tracing::warn!(limit = hops, uiid, "derive depth limit reached");
                style.diagnostics.push(ResolveDiagnostic::DepthLimit { limit: hops });
                break;
            }
            hops += 1;

            node = StyleNode::new(base, base_state);
        }

        if self.options.global_fallback {
            let mut fallbacks = vec![StyleNode::new("", state)];
            if state != StateTag::Unselected {
                fallbacks.push(StyleNode::new("", StateTag::Unselected));
            }
            for global in fallbacks {
                if visited.insert(global.clone()) {
                    self.collect(&mut style, &global);
                    style.chain.push(global);
                }
            }
        }

        style
    }

    /// Resolves every UIID that has entries in `state`.
    pub fn resolve_all(&self, state: StateTag) -> Vec<ResolvedStyle> {
        self.map
            .uiids(state)
            .iter()
            .map(|uiid| self.resolve(uiid, state))
            .collect()
    }

    fn derive_value(&self, node: &StyleNode) -> Option<&'a ThemeValue> {
        self.map
            .get_attr(&AttributeKey::new(node.uiid.as_str(), node.state, AttributeName::Derive))
    }

    /// Adds the entries of `node` for attributes not yet found.
    fn collect(&self, style: &mut ResolvedStyle, node: &StyleNode) {
        let at_requested = *node == style.node;
        for (key, value) in self.map.style_entries(&node.uiid, node.state) {
            let attribute = match ThemeKey::parse(key) {
                ThemeKey::Style(parsed) => Some(parsed.attribute),
                _ => None,
            };
            match attribute {
                Some(attribute) => {
                    style
                        .attributes
                        .entry(attribute)
                        .or_insert_with(|| ResolvedAttribute {
                            value: value.clone(),
                            source: node.clone(),
                        });
                }
                None if at_requested => {
                    tracing::debug!(key, "passing through unknown attribute");
                    style.passthrough.insert(key.to_string(), value.clone());
                }
                None => {}
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::key::DeriveTarget;
    use proptest::prelude::*;

    const UIIDS: [&str; 5] = ["A", "B", "C", "D", "E"];

    fn any_state() -> impl Strategy<Value = StateTag> {
        prop::sample::select(StateTag::ALL.to_vec())
    }

    /// Random themes over a few UIIDs with arbitrary, possibly cyclic derives.
    fn any_theme() -> impl Strategy<Value = ThemeMap> {
        let entry = (
            prop::sample::select(UIIDS.to_vec()),
            any_state(),
            prop_oneof![
                prop::sample::select(UIIDS.to_vec()).prop_map(|base| (AttributeName::Derive, base.to_string())),
                (prop::sample::select(UIIDS.to_vec()), any_state()).prop_map(|(base, st)| {
                    (AttributeName::Derive, DeriveTarget::with_state(base, st).encode())
                }),
                "[0-9a-f]{6}".prop_map(|c| (AttributeName::FgColor, c)),
                "[0-9a-f]{6}".prop_map(|c| (AttributeName::BgColor, c)),
            ],
        );
        prop::collection::vec(entry, 0..24).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(uiid, state, (attribute, value))| {
                    (AttributeKey::new(uiid, state, attribute).encode(), value)
                })
                .collect::<ThemeMap>()
        })
    }

    proptest! {
        #[test]
        fn resolution_terminates_and_is_idempotent(
            map in any_theme(),
            uiid in prop::sample::select(UIIDS.to_vec()),
            state in any_state(),
        ) {
            let first = resolve(&map, uiid, state);
            let second = resolve(&map, uiid, state);
            prop_assert!(first.chain().len() <= ResolveOptions::default().max_depth + 3);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn local_values_always_win(
            map in any_theme(),
            uiid in prop::sample::select(UIIDS.to_vec()),
            state in any_state(),
        ) {
            let style = resolve(&map, uiid, state);
            let key = AttributeKey::new(uiid, state, AttributeName::FgColor);
            if let Some(local) = map.get_attr(&key) {
                prop_assert_eq!(style.get(AttributeName::FgColor), Some(local));
            }
        }
    }
}
