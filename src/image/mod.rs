//! Multi-resolution image selection.
//!
//! This module provides:
//!
//! - [`DensityTag`]: coarse display density classes with numeric codes
//! - [`select`], [`insert`], [`remove`]: selection and mutation over `(density, image)` slices
//! - [`MultiImage`]: a non-empty set of density-tagged variants of one image
//! - [`ImageHandle`], [`ImageLookup`], [`ImageTable`]: opaque handles and name resolution
//! - [`scaled_size`], [`variant_sizes`]: target dimensions when generating variants
//!
//! Selection prefers an exact density, then the nearest higher density, then
//! the nearest lower one. A larger image scaled down degrades better than a
//! smaller one scaled up.

mod density;
mod lookup;
mod multi;
mod select;

pub use density::{scaled_size, variant_sizes, DensityTag};
pub use lookup::{FnLookup, ImageHandle, ImageLookup, ImageResource, ImageTable, NoImages};
pub use multi::{MultiImage, MultiImageError};
pub use select::{insert, remove, select, Removal};
