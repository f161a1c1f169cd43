//! Non-empty sets of density variants.

use thiserror::Error;

use super::density::DensityTag;
use super::lookup::ImageHandle;
use super::select::{self, Removal};

/// Error returned when building a [`MultiImage`] from raw entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiImageError {
    #[error("a multi-image needs at least one variant")]
    Empty,

    #[error("duplicate density '{0}' in multi-image")]
    DuplicateDensity(DensityTag),
}

/// One logical image stored at several densities.
///
/// A multi-image always holds at least one variant, and densities are unique.
/// Removing the last variant is refused.
///
/// # Example
///
/// ```rust
/// use themekit::{DensityTag, MultiImage};
///
/// let mut icon = MultiImage::new(DensityTag::Low, "icon_low");
/// icon.insert(DensityTag::High, "icon_high");
/// assert_eq!(*icon.best(DensityTag::Medium), "icon_high");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiImage<I = ImageHandle> {
    entries: Vec<(DensityTag, I)>,
}

impl<I> MultiImage<I> {
    /// Creates a multi-image with a single variant.
    pub fn new(density: DensityTag, image: I) -> Self {
        Self {
            entries: vec![(density, image)],
        }
    }

    /// Builds a multi-image from raw entries, rejecting empty input and
    /// repeated densities.
    pub fn from_entries(entries: Vec<(DensityTag, I)>) -> Result<Self, MultiImageError> {
        if entries.is_empty() {
            return Err(MultiImageError::Empty);
        }
        for (i, (density, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(d, _)| d == density) {
                return Err(MultiImageError::DuplicateDensity(*density));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the best variant for `requested`. Never fails.
    pub fn best(&self, requested: DensityTag) -> &I {
        let index = select::select_index(&self.entries, requested).unwrap_or(0);
        &self.entries[index].1
    }

    /// Returns the variant stored at exactly `density`.
    pub fn get(&self, density: DensityTag) -> Option<&I> {
        self.entries
            .iter()
            .find(|(d, _)| *d == density)
            .map(|(_, image)| image)
    }

    pub fn contains(&self, density: DensityTag) -> bool {
        self.get(density).is_some()
    }

    /// Stores a variant, replacing the one with the same density.
    pub fn insert(&mut self, density: DensityTag, image: I) -> Option<I> {
        select::insert(&mut self.entries, density, image)
    }

    /// Removes a variant. The last variant is never removed.
    pub fn remove(&mut self, density: DensityTag) -> Removal<I> {
        select::remove(&mut self.entries, density)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Densities in insertion order.
    pub fn densities(&self) -> impl Iterator<Item = DensityTag> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DensityTag, &I)> {
        self.entries.iter().map(|(d, image)| (*d, image))
    }

    pub fn entries(&self) -> &[(DensityTag, I)] {
        &self.entries
    }
}

impl<I> TryFrom<Vec<(DensityTag, I)>> for MultiImage<I> {
    type Error = MultiImageError;

    fn try_from(entries: Vec<(DensityTag, I)>) -> Result<Self, Self::Error> {
        MultiImage::from_entries(entries)
    }
}
