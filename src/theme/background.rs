//! Background painting read and written as one unit.

use serde::Serialize;

use super::attrs::{BackgroundType, Gradient};
use super::map::ThemeMap;
use super::value::{StyleValue, ThemeValue};
use crate::error::{DecodeError, DecodeResult};
use crate::image::ImageHandle;
use crate::key::{AttributeKey, AttributeName, StateTag};

/// The background of one style node.
///
/// Stored across three attributes: `bgType`, `bgImage` and `bgGradient`.
/// Writing a background stores only the attribute its type uses, so a node
/// never carries both an image and a gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "fill", rename_all = "snake_case")]
pub enum Background {
    /// Painted with `bgColor` only.
    Plain,
    Image {
        kind: BackgroundType,
        image: ImageHandle,
    },
    Gradient {
        kind: BackgroundType,
        gradient: Gradient,
    },
}

impl Background {
    /// A scaled image background.
    pub fn image(image: ImageHandle) -> Self {
        Background::Image {
            kind: BackgroundType::ImageScaled,
            image,
        }
    }

    /// A vertical linear gradient background.
    pub fn gradient(gradient: Gradient) -> Self {
        Background::Gradient {
            kind: BackgroundType::GradientLinearVertical,
            gradient,
        }
    }

    /// Returns the type code written to `bgType`.
    ///
    /// An image variant with a gradient type, or a gradient variant with an
    /// image type, is normalized to the variant's default type.
    pub fn kind(&self) -> BackgroundType {
        match self {
            Background::Plain => BackgroundType::None,
            Background::Image { kind, .. } if kind.is_image() => *kind,
            Background::Image { .. } => BackgroundType::ImageScaled,
            Background::Gradient { kind, .. } if kind.is_gradient() => *kind,
            Background::Gradient { .. } => BackgroundType::GradientLinearVertical,
        }
    }

    /// Interprets the three background attributes.
    ///
    /// `bgType` decides which of `bgImage` and `bgGradient` is used, so legacy
    /// data carrying both still reads consistently. Without `bgType`, an
    /// image wins over a gradient. Returns `None` when none of the three is
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidValue`] when a value has the wrong shape
    /// or the attribute `bgType` calls for is missing.
    pub fn from_values(
        bg_type: Option<&ThemeValue>,
        image: Option<&ThemeValue>,
        gradient: Option<&ThemeValue>,
    ) -> DecodeResult<Option<Background>> {
        let kind = match bg_type {
            Some(value) => match StyleValue::decode(AttributeName::BgType, value)? {
                StyleValue::BackgroundType(kind) => Some(kind),
                _ => None,
            },
            None => None,
        };

        if image.is_some() && gradient.is_some() {
            tracing::debug!(?kind, "background has both image and gradient");
        }

        let read_image = |value: &ThemeValue| -> DecodeResult<ImageHandle> {
            match StyleValue::decode(AttributeName::BgImage, value)? {
                StyleValue::Image(handle) => Ok(handle),
                _ => Err(DecodeError::invalid_value(
                    AttributeName::BgImage,
                    value.to_string(),
                    "expected an image",
                )),
            }
        };
        let read_gradient = |value: &ThemeValue| -> DecodeResult<Gradient> {
            match StyleValue::decode(AttributeName::BgGradient, value)? {
                StyleValue::Gradient(gradient) => Ok(gradient),
                _ => Err(DecodeError::invalid_value(
                    AttributeName::BgGradient,
                    value.to_string(),
                    "expected a gradient",
                )),
            }
        };

        let background = match (kind, image, gradient) {
            (Some(BackgroundType::None), _, _) => Background::Plain,
            (Some(kind), _, Some(value)) if kind.is_gradient() => Background::Gradient {
                kind,
                gradient: read_gradient(value)?,
            },
            (Some(kind), _, None) if kind.is_gradient() => {
                return Err(DecodeError::invalid_value(
                    AttributeName::BgGradient,
                    "",
                    format!("background type {:?} needs a gradient", kind),
                ))
            }
            (Some(kind), Some(value), _) => Background::Image {
                kind,
                image: read_image(value)?,
            },
            (Some(kind), None, _) => {
                return Err(DecodeError::invalid_value(
                    AttributeName::BgImage,
                    "",
                    format!("background type {:?} needs an image", kind),
                ))
            }
            (None, Some(value), _) => Background::image(read_image(value)?),
            (None, None, Some(value)) => Background::gradient(read_gradient(value)?),
            (None, None, None) => return Ok(None),
        };
        Ok(Some(background))
    }

    /// Reads the background stored at one node, without following derives.
    pub fn read(map: &ThemeMap, uiid: &str, state: StateTag) -> DecodeResult<Option<Background>> {
        let get = |attribute| map.get_attr(&AttributeKey::new(uiid, state, attribute));
        Background::from_values(
            get(AttributeName::BgType),
            get(AttributeName::BgImage),
            get(AttributeName::BgGradient),
        )
    }

    /// Writes the background to one node, removing whichever of `bgImage`
    /// and `bgGradient` it does not use.
    pub fn write(&self, map: &mut ThemeMap, uiid: &str, state: StateTag) {
        let key = |attribute| AttributeKey::new(uiid, state, attribute);
        map.set(&key(AttributeName::BgType), ThemeValue::Byte(self.kind().code()));
        match self {
            Background::Plain => {
                map.remove_attr(&key(AttributeName::BgImage));
                map.remove_attr(&key(AttributeName::BgGradient));
            }
            Background::Image { image, .. } => {
                map.set(&key(AttributeName::BgImage), image.clone());
                map.remove_attr(&key(AttributeName::BgGradient));
            }
            Background::Gradient { gradient, .. } => {
                map.set(&key(AttributeName::BgGradient), *gradient);
                map.remove_attr(&key(AttributeName::BgImage));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: (&str, StateTag) = ("Button", StateTag::Unselected);

    #[test]
    fn test_write_image_removes_gradient() {
        let mut map = ThemeMap::new().with("Button.bgGradient", Gradient::new(0, 0xffffff));
        Background::image(ImageHandle::new("bg.png")).write(&mut map, NODE.0, NODE.1);

        assert!(map.get("Button.bgGradient").is_none());
        assert_eq!(map.get("Button.bgType"), Some(&ThemeValue::Byte(1)));
        assert_eq!(
            Background::read(&map, NODE.0, NODE.1),
            Ok(Some(Background::image(ImageHandle::new("bg.png"))))
        );
    }

    #[test]
    fn test_write_gradient_removes_image() {
        let mut map = ThemeMap::new().with("Button.bgImage", ImageHandle::new("bg.png"));
        let background = Background::Gradient {
            kind: BackgroundType::GradientRadial,
            gradient: Gradient::new(0xff0000, 0x0000ff).centered_at(0.2, 0.8, 2.0),
        };
        background.write(&mut map, NODE.0, NODE.1);

        assert!(map.get("Button.bgImage").is_none());
        assert_eq!(Background::read(&map, NODE.0, NODE.1), Ok(Some(background)));
    }

    #[test]
    fn test_write_plain_clears_both() {
        let mut map = ThemeMap::new()
            .with("Button.bgImage", ImageHandle::new("bg.png"))
            .with("Button.bgGradient", Gradient::new(0, 1));
        Background::Plain.write(&mut map, NODE.0, NODE.1);
        assert_eq!(map.len(), 1);
        assert_eq!(Background::read(&map, NODE.0, NODE.1), Ok(Some(Background::Plain)));
    }

    #[test]
    fn test_legacy_contradiction_follows_type() {
        let map = ThemeMap::new()
            .with("Button.bgType", ThemeValue::Byte(7))
            .with("Button.bgImage", ImageHandle::new("bg.png"))
            .with("Button.bgGradient", Gradient::new(1, 2));
        let background = Background::read(&map, NODE.0, NODE.1).unwrap().unwrap();
        assert_eq!(
            background,
            Background::Gradient {
                kind: BackgroundType::GradientLinearHorizontal,
                gradient: Gradient::new(1, 2),
            }
        );

        let map = map.with("Button.bgType", ThemeValue::Byte(2));
        let background = Background::read(&map, NODE.0, NODE.1).unwrap().unwrap();
        assert_eq!(background.kind(), BackgroundType::TileBoth);
    }

    #[test]
    fn test_untyped_prefers_image() {
        let map = ThemeMap::new()
            .with("Button.bgImage", ImageHandle::new("bg.png"))
            .with("Button.bgGradient", Gradient::new(1, 2));
        let background = Background::read(&map, NODE.0, NODE.1).unwrap().unwrap();
        assert_eq!(background.kind(), BackgroundType::ImageScaled);
    }

    #[test]
    fn test_missing_payload_is_error() {
        let map = ThemeMap::new().with("Button.bgType", ThemeValue::Byte(8));
        assert!(Background::read(&map, NODE.0, NODE.1).is_err());
        let map = ThemeMap::new().with("Button.bgType", ThemeValue::Byte(24));
        assert!(Background::read(&map, NODE.0, NODE.1).is_err());
    }

    #[test]
    fn test_nothing_stored() {
        assert_eq!(Background::read(&ThemeMap::new(), NODE.0, NODE.1), Ok(None));
    }

    #[test]
    fn test_kind_normalizes_mismatch() {
        let background = Background::Image {
            kind: BackgroundType::GradientRadial,
            image: ImageHandle::new("x"),
        };
        assert_eq!(background.kind(), BackgroundType::ImageScaled);
    }
}
