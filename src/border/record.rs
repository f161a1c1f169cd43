//! The stored form of a border.

use serde::{Deserialize, Serialize};

use super::kind::BorderKind;

/// The stored form of a `border` attribute.
///
/// A record is raw data as found in a theme: nothing guarantees that its
/// fields fit its kind. [`decode`](super::decode) validates it into a
/// [`BorderSpec`](super::BorderSpec).
///
/// Image slot names follow the resource writer's layout:
///
/// | Kind | Names |
/// |------|-------|
/// | image, 2 or 3 names | top, top-left, center |
/// | image, 8 or 9 names | top, bottom, left, right, top-left, top-right, bottom-left, bottom-right, center |
/// | h-image, 2 or 3 names | left, right, center |
/// | v-image, 2 or 3 names | top, bottom, center |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BorderRecord {
    pub kind: BorderKind,
    #[serde(default)]
    pub raised: bool,
    #[serde(default)]
    pub theme_colors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_height: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl BorderRecord {
    pub fn new(kind: BorderKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    pub fn theme_colors(mut self) -> Self {
        self.theme_colors = true;
        self
    }

    pub fn thickness(mut self, thickness: i64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn arc(mut self, width: i64, height: i64) -> Self {
        self.arc_width = Some(width);
        self.arc_height = Some(height);
        self
    }

    pub fn colors(mut self, colors: impl IntoIterator<Item = u32>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    pub fn images<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.images = names.into_iter().map(Into::into).collect();
        self
    }
}
