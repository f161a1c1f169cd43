//! Editing session.
//!
//! An [`EditSession`] bundles the theme being edited with the images it
//! refers to and the configuration that governs resolution and decoding.
//! Everything that would otherwise be process-wide state is reached through
//! the session, so independent sessions never interfere.

use crate::border::{self, BorderSpec};
use crate::config::CoreConfig;
use crate::error::DecodeResult;
use crate::image::{ImageHandle, ImageLookup, ImageTable};
use crate::key::{AttributeKey, StateTag};
use crate::resolve::{ResolvedStyle, StyleResolver};
use crate::theme::ThemeMap;

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    map: ThemeMap,
    images: ImageTable,
    config: CoreConfig,
}

impl EditSession {
    pub fn new(map: ThemeMap, images: ImageTable) -> Self {
        Self::with_config(map, images, CoreConfig::default())
    }

    /// Creates a session whose image table uses the configured device density.
    pub fn with_config(map: ThemeMap, mut images: ImageTable, config: CoreConfig) -> Self {
        images.set_device_density(config.device_density);
        Self {
            map,
            images,
            config,
        }
    }

    pub fn map(&self) -> &ThemeMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut ThemeMap {
        &mut self.map
    }

    pub fn images(&self) -> &ImageTable {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageTable {
        &mut self.images
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Resolves a style against the current theme.
    pub fn resolve(&self, uiid: &str, state: StateTag) -> ResolvedStyle {
        StyleResolver::new(&self.map)
            .with_options(self.config.resolve.clone())
            .resolve(uiid, state)
    }

    /// Decodes the border stored at `key`'s node, or `Null` if none is.
    pub fn border(&self, key: &AttributeKey) -> DecodeResult<BorderSpec> {
        border::decode_stored(&self.map, key, &self.images, &self.config.border)
    }

    /// Stores `spec` at `key`'s node.
    ///
    /// The border is validated against the session's images first; on error
    /// the theme is left unchanged.
    pub fn set_border(&mut self, key: &AttributeKey, spec: &BorderSpec) -> DecodeResult<()> {
        if let Some(record) = border::encode(spec) {
            border::decode_record(&record, &self.images, &self.config.border)?;
        }
        border::commit(&mut self.map, key, spec);
        Ok(())
    }

    /// Resolves an image name at the device density.
    pub fn select_image(&self, name: &str) -> Option<ImageHandle> {
        self.images.resolve(name)
    }

    /// Resolves an image for display as a background, substituting the
    /// broken-image placeholder when `name` is unknown.
    pub fn background_image(&self, name: &str) -> ImageHandle {
        self.select_image(name).unwrap_or_else(|| {
            tracing::warn!(name, "image missing, using placeholder");
            ImageHandle::placeholder(name)
        })
    }

    /// A copy-on-write snapshot of the current theme.
    pub fn snapshot(&self) -> ThemeMap {
        self.map.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{BevelColors, BorderKind, ImageBorder, ThreeSlice};
    use crate::image::{DensityTag, MultiImage};
    use crate::key::AttributeName;

    fn session() -> EditSession {
        let map = ThemeMap::new()
            .with("Button.derive", "Label")
            .with("Label.fgColor", "ffffff");
        let icon = MultiImage::from_entries(vec![
            (DensityTag::Low, ImageHandle::new("icon@low")),
            (DensityTag::High, ImageHandle::new("icon@high")),
        ])
        .unwrap();
        let images = ImageTable::default()
            .with_image("edge", ImageHandle::new("edge"))
            .with_multi("icon", icon);
        EditSession::new(map, images)
    }

    #[test]
    fn test_resolve_uses_current_map() {
        let mut session = session();
        session.map_mut().insert("Button.fgColor", "000000");
        let style = session.resolve("Button", StateTag::Unselected);
        assert_eq!(style.text(AttributeName::FgColor), Some("000000"));
    }

    #[test]
    fn test_select_image_uses_device_density() {
        let session = session();
        assert_eq!(session.select_image("icon").unwrap().id, "icon@high");

        let config = CoreConfig::default().with_device_density(DensityTag::VeryLow);
        let low = EditSession::with_config(ThemeMap::new(), session.images().clone(), config);
        assert_eq!(low.images().device_density(), DensityTag::VeryLow);
        assert_eq!(low.select_image("icon").unwrap().id, "icon@low");
    }

    #[test]
    fn test_background_placeholder() {
        let session = session();
        let handle = session.background_image("missing.png");
        assert!(handle.is_broken());
        assert_eq!(handle.id, "missing.png");
        assert!(!session.background_image("edge").is_broken());
    }

    #[test]
    fn test_border_round_trip() {
        let mut session = session();
        let key = AttributeKey::new("Button", StateTag::Unselected, AttributeName::Border);
        assert_eq!(session.border(&key), Ok(BorderSpec::Null));

        let bevel = BorderSpec::Bevel {
            raised: true,
            colors: BevelColors::Theme,
        };
        session.set_border(&key, &bevel).unwrap();
        assert_eq!(session.border(&key), Ok(bevel));

        session.set_border(&key, &BorderSpec::Null).unwrap();
        assert!(session.map().get("Button.border").is_none());
    }

    #[test]
    fn test_invalid_border_leaves_map_unchanged() {
        let mut session = session();
        let key = AttributeKey::new("Button", StateTag::Unselected, AttributeName::Border);
        let before = session.snapshot();

        let spec = BorderSpec::Image(ImageBorder::Three(ThreeSlice {
            top: ImageHandle::new("nowhere"),
            top_left: ImageHandle::new("edge"),
            center: None,
        }));
        let err = session.set_border(&key, &spec).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
        assert_eq!(session.map(), &before);
        assert_eq!(spec.kind(), BorderKind::Image);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut session = session();
        let snapshot = session.snapshot();
        session.map_mut().insert("Label.fgColor", "123456");
        assert_eq!(snapshot.get("Label.fgColor").and_then(|v| v.as_text()), Some("ffffff"));
    }
}
