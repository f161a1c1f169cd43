//! Rendering state tags.

use serde::{Deserialize, Serialize};

/// The rendering state a style key applies to.
///
/// Unselected is the default and carries no tag in a key. The other states
/// are written as a `#`-terminated segment before the attribute name,
/// e.g. `Button.sel#fgColor`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StateTag {
    #[default]
    Unselected,
    Selected,
    Pressed,
    Disabled,
}

impl StateTag {
    /// All states, unselected first.
    pub const ALL: [StateTag; 4] = [
        StateTag::Unselected,
        StateTag::Selected,
        StateTag::Pressed,
        StateTag::Disabled,
    ];

    /// Tagged states in detection order.
    ///
    /// When a state segment contains more than one reserved token the first
    /// match in this order wins.
    const DETECTION_ORDER: [StateTag; 3] =
        [StateTag::Selected, StateTag::Disabled, StateTag::Pressed];

    /// Returns the reserved token for this state, or `None` for unselected.
    pub fn token(self) -> Option<&'static str> {
        match self {
            StateTag::Unselected => None,
            StateTag::Selected => Some("sel"),
            StateTag::Pressed => Some("press"),
            StateTag::Disabled => Some("dis"),
        }
    }

    /// Returns the key prefix for this state: `""` or `"<token>#"`.
    pub fn prefix(self) -> &'static str {
        match self {
            StateTag::Unselected => "",
            StateTag::Selected => "sel#",
            StateTag::Pressed => "press#",
            StateTag::Disabled => "dis#",
        }
    }

    /// Parses an exact state token (`sel`, `press`, `dis`).
    pub fn from_token(token: &str) -> Option<StateTag> {
        match token {
            "sel" => Some(StateTag::Selected),
            "press" => Some(StateTag::Pressed),
            "dis" => Some(StateTag::Disabled),
            _ => None,
        }
    }

    /// Detects the state named anywhere inside a state segment.
    ///
    /// Substring matching is checked in the order `sel`, `dis`, `press`.
    /// Returns `None` when the segment contains no reserved token.
    pub fn detect(segment: &str) -> Option<StateTag> {
        Self::DETECTION_ORDER.into_iter().find(|state| {
            state
                .token()
                .is_some_and(|token| segment.contains(token))
        })
    }

    /// Human readable name, as shown in theme editor tabs.
    pub fn label(self) -> &'static str {
        match self {
            StateTag::Unselected => "Unselected",
            StateTag::Selected => "Selected",
            StateTag::Pressed => "Pressed",
            StateTag::Disabled => "Disabled",
        }
    }
}

impl std::fmt::Display for StateTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
