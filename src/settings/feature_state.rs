use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the media bar is rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub enum FeatureState {
    /// The front-end does not render the bar.
    Disabled,

    /// The front-end renders the bar (default).
    #[default]
    Enabled,
}

impl FeatureState {
    /// Returns true if the bar should be rendered.
    pub fn is_enabled(self) -> bool {
        matches!(self, FeatureState::Enabled)
    }
}

impl fmt::Display for FeatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureState::Disabled => write!(f, "Disabled"),
            FeatureState::Enabled => write!(f, "Enabled"),
        }
    }
}
