//! Image handles and name resolution.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::density::DensityTag;
use super::multi::MultiImage;

/// An opaque reference to image data held by the hosting resource store.
///
/// Only identity and density metadata are visible here; pixel data never is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<DensityTag>,
    /// Set on the placeholder substituted for an image that could not be found.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub broken: bool,
}

impl ImageHandle {
    /// Size in pixels of the broken-image placeholder.
    pub const PLACEHOLDER_SIZE: (u32, u32) = (5, 5);

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            density: None,
            broken: false,
        }
    }

    pub fn with_density(mut self, density: DensityTag) -> Self {
        self.density = Some(density);
        self
    }

    /// Creates the placeholder used in place of the missing image `id`.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            density: None,
            broken: true,
        }
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }
}

/// Resolves image names to handles.
///
/// Supplied by the hosting resource store. Implemented for plain maps, for
/// [`ImageTable`] and for closures wrapped in [`FnLookup`].
pub trait ImageLookup {
    fn resolve(&self, name: &str) -> Option<ImageHandle>;

    fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

impl<T: ImageLookup + ?Sized> ImageLookup for &T {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        (**self).resolve(name)
    }
}

impl ImageLookup for HashMap<String, ImageHandle> {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self.get(name).cloned()
    }
}

impl ImageLookup for BTreeMap<String, ImageHandle> {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self.get(name).cloned()
    }
}

/// Adapts a closure into an [`ImageLookup`].
pub struct FnLookup<F>(pub F);

impl<F> ImageLookup for FnLookup<F>
where
    F: Fn(&str) -> Option<ImageHandle>,
{
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        (self.0)(name)
    }
}

/// A lookup that resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageLookup for NoImages {
    fn resolve(&self, _name: &str) -> Option<ImageHandle> {
        None
    }
}

/// A named image resource: a single image or a set of density variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResource {
    Single(ImageHandle),
    Multi(MultiImage<ImageHandle>),
}

/// Named image resources with the device density used to pick variants.
#[derive(Debug, Clone, Default)]
pub struct ImageTable {
    images: BTreeMap<String, ImageResource>,
    device_density: DensityTag,
}

impl ImageTable {
    pub fn new(device_density: DensityTag) -> Self {
        Self {
            images: BTreeMap::new(),
            device_density,
        }
    }

    pub fn device_density(&self) -> DensityTag {
        self.device_density
    }

    pub fn set_device_density(&mut self, density: DensityTag) {
        self.device_density = density;
    }

    /// Adds a single image, returning the updated table for chaining.
    pub fn with_image(mut self, name: impl Into<String>, handle: ImageHandle) -> Self {
        self.insert(name, ImageResource::Single(handle));
        self
    }

    /// Adds a multi-image, returning the updated table for chaining.
    pub fn with_multi(mut self, name: impl Into<String>, image: MultiImage<ImageHandle>) -> Self {
        self.insert(name, ImageResource::Multi(image));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, resource: ImageResource) -> Option<ImageResource> {
        self.images.insert(name.into(), resource)
    }

    pub fn remove(&mut self, name: &str) -> Option<ImageResource> {
        self.images.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ImageResource> {
        self.images.get(name)
    }

    pub fn get_multi_mut(&mut self, name: &str) -> Option<&mut MultiImage<ImageHandle>> {
        match self.images.get_mut(name) {
            Some(ImageResource::Multi(multi)) => Some(multi),
            _ => None,
        }
    }

    /// Resource names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Resolves `name` at an explicit density instead of the device density.
    pub fn resolve_at(&self, name: &str, density: DensityTag) -> Option<ImageHandle> {
        match self.images.get(name) {
            Some(ImageResource::Single(handle)) => Some(handle.clone()),
            Some(ImageResource::Multi(multi)) => Some(multi.best(density).clone()),
            None => {
                tracing::debug!(name, "image not found in table");
                None
            }
        }
    }
}

impl ImageLookup for ImageTable {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self.resolve_at(name, self.device_density)
    }
}
