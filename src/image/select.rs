//! Selection and mutation over density-tagged entries.

use super::density::DensityTag;

/// Returns the index of the best entry for `requested`.
pub(crate) fn select_index<I>(entries: &[(DensityTag, I)], requested: DensityTag) -> Option<usize> {
    if let Some(exact) = entries.iter().position(|(d, _)| *d == requested) {
        return Some(exact);
    }

    let above = entries
        .iter()
        .enumerate()
        .filter(|(_, (d, _))| *d > requested)
        .min_by_key(|(_, (d, _))| *d)
        .map(|(i, _)| i);

    above.or_else(|| {
        entries
            .iter()
            .enumerate()
            .filter(|(_, (d, _))| *d < requested)
            .max_by_key(|(_, (d, _))| *d)
            .map(|(i, _)| i)
    })
}

/// Picks the best image for `requested`.
///
/// An exact density wins. Otherwise the nearest higher density is used, and
/// only when nothing is higher the nearest lower one. Returns `None` only for
/// an empty slice.
///
/// # Example
///
/// ```rust
/// use themekit::{select, DensityTag};
///
/// let entries = [(DensityTag::Low, "small"), (DensityTag::High, "large")];
/// assert_eq!(select(&entries, DensityTag::Medium), Some(&"large"));
/// ```
pub fn select<I>(entries: &[(DensityTag, I)], requested: DensityTag) -> Option<&I> {
    select_index(entries, requested).map(|i| &entries[i].1)
}

/// Stores `image` under `density`, replacing an existing entry with the same
/// density or appending otherwise. Returns the replaced image.
pub fn insert<I>(entries: &mut Vec<(DensityTag, I)>, density: DensityTag, image: I) -> Option<I> {
    match entries.iter_mut().find(|(d, _)| *d == density) {
        Some(slot) => Some(std::mem::replace(&mut slot.1, image)),
        None => {
            entries.push((density, image));
            None
        }
    }
}

/// Outcome of [`remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<I> {
    /// The entry was removed.
    Removed(I),
    /// No entry has the density.
    NotFound,
    /// The entry is the last one and was kept.
    Refused,
}

impl<I> Removal<I> {
    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed(_))
    }
}

/// Removes the entry for `density` unless it is the only entry left.
pub fn remove<I>(entries: &mut Vec<(DensityTag, I)>, density: DensityTag) -> Removal<I> {
    let Some(index) = entries.iter().position(|(d, _)| *d == density) else {
        return Removal::NotFound;
    };
    if entries.len() == 1 {
        tracing::debug!(%density, "refusing to remove the last image variant");
        return Removal::Refused;
    }
    Removal::Removed(entries.remove(index).1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_exact() {
        let entries = [(DensityTag::Low, 1), (DensityTag::Medium, 2), (DensityTag::High, 3)];
        assert_eq!(select(&entries, DensityTag::Medium), Some(&2));
    }

    #[test]
    fn test_select_prefers_higher() {
        let entries = [(DensityTag::Low, "low"), (DensityTag::High, "high")];
        assert_eq!(select(&entries, DensityTag::Medium), Some(&"high"));
    }

    #[test]
    fn test_select_nearest_higher_not_highest() {
        let entries = [
            (DensityTag::FourK, "4k"),
            (DensityTag::VeryHigh, "very high"),
            (DensityTag::Hd, "hd"),
        ];
        assert_eq!(select(&entries, DensityTag::High), Some(&"very high"));
    }

    #[test]
    fn test_select_falls_back_to_nearest_lower() {
        let entries = [(DensityTag::Low, "low"), (DensityTag::VeryLow, "very low")];
        assert_eq!(select(&entries, DensityTag::Medium), Some(&"low"));
    }

    #[test]
    fn test_select_empty() {
        let entries: [(DensityTag, u8); 0] = [];
        assert_eq!(select(&entries, DensityTag::Medium), None);
    }

    #[test]
    fn test_insert_replaces_same_density() {
        let mut entries = vec![(DensityTag::Low, "a"), (DensityTag::High, "b")];
        assert_eq!(insert(&mut entries, DensityTag::High, "c"), Some("b"));
        assert_eq!(entries, vec![(DensityTag::Low, "a"), (DensityTag::High, "c")]);
    }

    #[test]
    fn test_insert_appends_new_density() {
        let mut entries = vec![(DensityTag::Low, "a")];
        assert_eq!(insert(&mut entries, DensityTag::Hd, "b"), None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], (DensityTag::Hd, "b"));
    }

    #[test]
    fn test_remove_refuses_last_entry() {
        let mut entries = vec![(DensityTag::Medium, "only")];
        assert_eq!(remove(&mut entries, DensityTag::Medium), Removal::Refused);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_remove_missing_and_present() {
        let mut entries = vec![(DensityTag::Low, "a"), (DensityTag::High, "b")];
        assert_eq!(remove(&mut entries, DensityTag::Hd), Removal::NotFound);
        assert_eq!(remove(&mut entries, DensityTag::Low), Removal::Removed("a"));
        assert_eq!(entries, vec![(DensityTag::High, "b")]);
    }
}
