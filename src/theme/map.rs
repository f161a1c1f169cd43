//! The flat theme key-value store.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::value::ThemeValue;
use crate::error::{DecodeError, DecodeResult};
use crate::key::{
    node_prefix, split_key, AttributeKey, AttributeName, DeriveTarget, StateTag, ThemeKey,
    CONSTANT_PREFIX,
};

/// A theme: serialized keys mapped to stored values.
///
/// Cloning is cheap and yields an independent snapshot. The first mutation
/// after a clone copies the entries; earlier snapshots never observe later
/// edits.
///
/// # Example
///
/// ```rust
/// use themekit::ThemeMap;
///
/// let theme = ThemeMap::new()
///     .with("Label.fgColor", "ffffff")
///     .with("Button.derive", "Label");
///
/// let snapshot = theme.clone();
/// let mut edited = theme;
/// edited.insert("Label.fgColor", "000000");
///
/// assert_eq!(snapshot.get("Label.fgColor").and_then(|v| v.as_text()), Some("ffffff"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeMap {
    entries: Arc<BTreeMap<String, ThemeValue>>,
}

impl ThemeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated map for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ThemeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.entries.get(key)
    }

    pub fn get_attr(&self, key: &AttributeKey) -> Option<&ThemeValue> {
        self.entries.get(&key.encode())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ThemeValue>) -> Option<ThemeValue> {
        Arc::make_mut(&mut self.entries).insert(key.into(), value.into())
    }

    pub fn set(&mut self, key: &AttributeKey, value: impl Into<ThemeValue>) -> Option<ThemeValue> {
        self.insert(key.encode(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<ThemeValue> {
        if !self.entries.contains_key(key) {
            return None;
        }
        Arc::make_mut(&mut self.entries).remove(key)
    }

    pub fn remove_attr(&mut self, key: &AttributeKey) -> Option<ThemeValue> {
        self.remove(&key.encode())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries classified by key.
    pub fn classified(&self) -> impl Iterator<Item = (ThemeKey, &ThemeValue)> {
        self.entries.iter().map(|(k, v)| (ThemeKey::parse(k), v))
    }

    /// Returns `true` if both maps share storage, i.e. neither has been
    /// mutated since one was cloned from the other.
    pub fn shares_storage(&self, other: &ThemeMap) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Sorted UIIDs with at least one entry in `state`.
    ///
    /// Constants and global keys are excluded. Keys with unknown attributes
    /// still count toward their UIID.
    pub fn uiids(&self, state: StateTag) -> Vec<String> {
        let found: BTreeSet<&str> = self
            .style_keys()
            .filter(|(_, (uiid, st, _))| *st == state && !uiid.is_empty())
            .map(|(_, (uiid, _, _))| uiid)
            .collect();
        found.into_iter().map(str::to_string).collect()
    }

    /// Sorted UIIDs with at least one entry in any state.
    pub fn all_uiids(&self) -> Vec<String> {
        let found: BTreeSet<&str> = self
            .style_keys()
            .map(|(_, (uiid, _, _))| uiid)
            .filter(|uiid| !uiid.is_empty())
            .collect();
        found.into_iter().map(str::to_string).collect()
    }

    /// The entries of exactly one style node, in key order.
    ///
    /// An empty `uiid` selects the global node. Entries with unknown
    /// attributes are included.
    pub fn style_entries(&self, uiid: &str, state: StateTag) -> Vec<(&str, &ThemeValue)> {
        let in_node = |key: &&String| {
            !key.starts_with(CONSTANT_PREFIX)
                && matches!(split_key(key), Ok((u, st, _)) if u == uiid && st == state)
        };

        if uiid.is_empty() {
            return self
                .entries
                .iter()
                .filter(|(k, _)| in_node(k))
                .map(|(k, v)| (k.as_str(), v))
                .collect();
        }

        let prefix = node_prefix(uiid, StateTag::Unselected);
        self.entries
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .filter(|(k, _)| in_node(k))
            .map(|(k, v)| (k.as_str(), v))
            .collect()
    }

    /// Removes every entry of one style node and returns how many were removed.
    ///
    /// Removing the unselected node leaves the UIID's state-tagged entries
    /// in place.
    pub fn remove_style(&mut self, uiid: &str, state: StateTag) -> usize {
        let keys: Vec<String> = self
            .style_entries(uiid, state)
            .into_iter()
            .map(|(k, _)| k.to_string())
            .collect();
        for key in &keys {
            self.remove(key);
        }
        keys.len()
    }

    /// The node a style node derives from, if it has a `derive` attribute.
    ///
    /// Only the canonical key of the node is consulted; keys that merely
    /// resemble it (`Button.selected#derive`) are not derive attributes.
    /// See [`DeriveTarget::next_node`] for how the state is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidDeriveTarget`] for a malformed target
    /// and [`DecodeError::InvalidValue`] for a value that is not text.
    pub fn derive(&self, uiid: &str, state: StateTag) -> DecodeResult<Option<(String, StateTag)>> {
        let key = AttributeKey::new(uiid, state, AttributeName::Derive);
        match self.get_attr(&key) {
            None => Ok(None),
            Some(ThemeValue::Text(text)) => {
                let target = DeriveTarget::parse(text)?;
                let (base, next) = target.next_node(uiid, state);
                Ok(Some((base.to_string(), next)))
            }
            Some(other) => Err(DecodeError::invalid_value(
                AttributeName::Derive,
                other.to_string(),
                "expected a style name",
            )),
        }
    }

    /// Derives the selected, pressed and disabled nodes of `uiid` from `base`.
    pub fn derive_all(&mut self, uiid: &str, base: &DeriveTarget) {
        for state in [StateTag::Selected, StateTag::Pressed, StateTag::Disabled] {
            let key = AttributeKey::new(uiid, state, AttributeName::Derive);
            self.set(&key, base.encode());
        }
    }

    /// Theme constants, without their `@` prefix.
    pub fn constants(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| k.strip_prefix(CONSTANT_PREFIX).map(|name| (name, v)))
    }

    pub fn set_constant(&mut self, name: &str, value: impl Into<ThemeValue>) -> Option<ThemeValue> {
        self.insert(format!("{}{}", CONSTANT_PREFIX, name), value)
    }

    /// Entries whose keys are not recognized style keys or constants.
    pub fn unrecognized(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.entries
            .iter()
            .filter(|(k, _)| matches!(ThemeKey::parse(k), ThemeKey::Unrecognized(_)))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Non-constant keys that split into a node, with their parts.
    fn style_keys(&self) -> impl Iterator<Item = (&str, (&str, StateTag, &str))> {
        self.entries
            .keys()
            .filter(|k| !k.starts_with(CONSTANT_PREFIX))
            .filter_map(|k| split_key(k).ok().map(|parts| (k.as_str(), parts)))
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> FromIterator<(K, V)> for ThemeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl<K: Into<String>, V: Into<ThemeValue>> Extend<(K, V)> for ThemeMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let entries = Arc::make_mut(&mut self.entries);
        for (k, v) in iter {
            entries.insert(k.into(), v.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ThemeMap {
        ThemeMap::from_iter([
            ("Button.fgColor", "ff0000"),
            ("Button.sel#fgColor", "00ff00"),
            ("Button.press#derive", "Button"),
            ("Label.fgColor", "ffffff"),
            ("Label.elevation", "3"),
            ("Toolbar.dis#bgColor", "cccccc"),
            ("fgColor", "000000"),
            ("@includeNativeBool", "true"),
        ])
    }

    #[test]
    fn test_uiids_per_state() {
        let map = sample();
        assert_eq!(map.uiids(StateTag::Unselected), vec!["Button", "Label"]);
        assert_eq!(map.uiids(StateTag::Selected), vec!["Button"]);
        assert_eq!(map.uiids(StateTag::Disabled), vec!["Toolbar"]);
        assert_eq!(map.all_uiids(), vec!["Button", "Label", "Toolbar"]);
    }

    #[test]
    fn test_style_entries_exact_node() {
        let map = sample();
        let keys: Vec<&str> = map
            .style_entries("Button", StateTag::Unselected)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["Button.fgColor"]);

        let keys: Vec<&str> = map
            .style_entries("Label", StateTag::Unselected)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["Label.elevation", "Label.fgColor"]);
    }

    #[test]
    fn test_style_entries_global_node() {
        let map = sample();
        let keys: Vec<&str> = map
            .style_entries("", StateTag::Unselected)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["fgColor"]);
    }

    #[test]
    fn test_style_entries_ignore_prefix_collisions() {
        let map = ThemeMap::new()
            .with("Button.fgColor", "1")
            .with("ButtonGroup.fgColor", "2");
        assert_eq!(map.style_entries("Button", StateTag::Unselected).len(), 1);
    }

    #[test]
    fn test_remove_unselected_keeps_tagged_entries() {
        let mut map = sample();
        assert_eq!(map.remove_style("Button", StateTag::Unselected), 1);
        assert!(map.get("Button.fgColor").is_none());
        assert!(map.get("Button.sel#fgColor").is_some());
        assert!(map.get("Button.press#derive").is_some());
    }

    #[test]
    fn test_derive_all() {
        let mut map = ThemeMap::new();
        map.derive_all("Title", &DeriveTarget::new("Title"));
        for key in ["Title.sel#derive", "Title.press#derive", "Title.dis#derive"] {
            assert_eq!(map.get(key).and_then(ThemeValue::as_text), Some("Title"));
        }
        assert!(map.get("Title.derive").is_none());
    }

    #[test]
    fn test_derive_reads_canonical_key_only() {
        let map = ThemeMap::new()
            .with("Button.selected#derive", "Label")
            .with("Button.press#derive", "Label.sel")
            .with("Button.dis#derive", "Label.focus")
            .with("Button.derive", 7)
            .with("Title.sel#derive", "Title")
            .with("Title.press#derive", "Label");

        assert_eq!(map.derive("Button", StateTag::Selected), Ok(None));
        assert_eq!(
            map.derive("Button", StateTag::Pressed),
            Ok(Some(("Label".to_string(), StateTag::Selected)))
        );
        assert_eq!(
            map.derive("Title", StateTag::Selected),
            Ok(Some(("Title".to_string(), StateTag::Unselected)))
        );
        assert_eq!(
            map.derive("Title", StateTag::Pressed),
            Ok(Some(("Label".to_string(), StateTag::Pressed)))
        );
        assert!(matches!(
            map.derive("Button", StateTag::Disabled),
            Err(DecodeError::InvalidDeriveTarget { .. })
        ));
        assert!(matches!(
            map.derive("Button", StateTag::Unselected),
            Err(DecodeError::InvalidValue { .. })
        ));
        assert_eq!(map.derive("Label", StateTag::Unselected), Ok(None));
    }

    #[test]
    fn test_constants_and_unrecognized() {
        let map = sample();
        let constants: Vec<(&str, &ThemeValue)> = map.constants().collect();
        assert_eq!(constants.len(), 1);
        assert_eq!(constants[0].0, "includeNativeBool");

        let unknown: Vec<&str> = map.unrecognized().map(|(k, _)| k).collect();
        assert_eq!(unknown, vec!["Label.elevation"]);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let original = sample();
        let snapshot = original.clone();
        assert!(snapshot.shares_storage(&original));

        let mut edited = original.clone();
        edited.insert("Label.fgColor", "123456");
        edited.remove("Button.fgColor");

        assert!(!edited.shares_storage(&snapshot));
        assert_eq!(snapshot, original);
        assert_eq!(
            snapshot.get("Label.fgColor").and_then(ThemeValue::as_text),
            Some("ffffff")
        );
        assert!(snapshot.get("Button.fgColor").is_some());
    }

    #[test]
    fn test_removing_absent_key_keeps_storage_shared() {
        let original = sample();
        let mut copy = original.clone();
        assert_eq!(copy.remove("Nope.fgColor"), None);
        assert!(copy.shares_storage(&original));
    }

    #[test]
    fn test_attr_accessors() {
        let mut map = ThemeMap::new();
        let key = AttributeKey::new("Button", StateTag::Pressed, AttributeName::BgColor);
        map.set(&key, "abcdef");
        assert!(map.contains_key("Button.press#bgColor"));
        assert_eq!(map.get_attr(&key).and_then(ThemeValue::as_text), Some("abcdef"));
        assert!(map.remove_attr(&key).is_some());
        assert!(map.is_empty());
    }
}
