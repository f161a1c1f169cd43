//! Whole-theme checks of `derive` attributes.

use std::collections::BTreeSet;

use super::error::{CycleDetected, ResolveError};
use super::style::StyleNode;
use crate::key::{AttributeName, ThemeKey};
use crate::theme::ThemeMap;

/// Checks every `derive` attribute of a theme.
///
/// Each derive value must parse, and following the derives from any node
/// must never return to a node already on the path. Keys are checked in
/// sorted order and the first problem is returned.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidDerive`] for a malformed value, or
/// [`ResolveError::Cycle`] with the looping path.
pub fn validate_derives(map: &ThemeMap) -> Result<(), ResolveError> {
    let mut starts = Vec::new();
    for (key, value) in map.classified() {
        let ThemeKey::Style(key) = key else {
            continue;
        };
        if key.attribute != AttributeName::Derive {
            continue;
        }
        if map.derive(&key.uiid, key.state).is_err() {
            return Err(ResolveError::InvalidDerive {
                key: key.encode(),
                value: value.to_string(),
            });
        }
        starts.push(StyleNode::new(key.uiid, key.state));
    }

    let mut cleared: BTreeSet<StyleNode> = BTreeSet::new();
    for start in starts {
        walk(map, start, &mut cleared)?;
    }
    Ok(())
}

/// Follows the derive chain from `start`, marking every node that is known
/// to reach an end.
fn walk(map: &ThemeMap, start: StyleNode, cleared: &mut BTreeSet<StyleNode>) -> Result<(), CycleDetected> {
    let mut path: Vec<StyleNode> = Vec::new();
    let mut node = start;

    loop {
        if cleared.contains(&node) {
            break;
        }
        if path.contains(&node) {
            path.push(node);
            return Err(CycleDetected { path });
        }
        let next = map.derive(&node.uiid, node.state).ok().flatten();
        path.push(node);

        match next {
            Some((base, state)) => node = StyleNode::new(base, state),
            None => break,
        }
    }

    tracing::trace!(len = path.len(), "derive chain ends");
    cleared.extend(path);
    Ok(())
}
