//! Border kind tags.

use serde::{Deserialize, Serialize};

/// The nine border rendering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderKind {
    #[default]
    Null,
    Empty,
    Bevel,
    Etched,
    Line,
    Round,
    Image,
    #[serde(rename = "h-image")]
    HorizontalImage,
    #[serde(rename = "v-image")]
    VerticalImage,
}

impl BorderKind {
    /// All kinds, in the order the editor lists them.
    pub const ALL: [BorderKind; 9] = [
        BorderKind::Null,
        BorderKind::Empty,
        BorderKind::Bevel,
        BorderKind::Etched,
        BorderKind::Line,
        BorderKind::Round,
        BorderKind::Image,
        BorderKind::HorizontalImage,
        BorderKind::VerticalImage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BorderKind::Null => "null",
            BorderKind::Empty => "empty",
            BorderKind::Bevel => "bevel",
            BorderKind::Etched => "etched",
            BorderKind::Line => "line",
            BorderKind::Round => "round",
            BorderKind::Image => "image",
            BorderKind::HorizontalImage => "h-image",
            BorderKind::VerticalImage => "v-image",
        }
    }

    pub fn parse(token: &str) -> Option<BorderKind> {
        Self::ALL.into_iter().find(|k| k.as_str() == token)
    }

    /// Returns `true` for kinds whose colors may come from the theme.
    pub fn supports_theme_colors(self) -> bool {
        matches!(
            self,
            BorderKind::Bevel | BorderKind::Etched | BorderKind::Line | BorderKind::Round
        )
    }

    /// Returns `true` for kinds drawn from image slots.
    pub fn is_image(self) -> bool {
        matches!(
            self,
            BorderKind::Image | BorderKind::HorizontalImage | BorderKind::VerticalImage
        )
    }
}

impl std::fmt::Display for BorderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
