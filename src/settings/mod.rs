//! Settings schema definitions and defaults.
//!
//! Defines the complete settings structure for the media bar: the feature
//! toggle, avatar source, and the nested web presentation bundle with its
//! icon overrides. All settings are serializable to/from JSON and every
//! field has a default, so partial documents always decode.

mod decoding;
mod feature_state;
mod icons;
mod paths;
mod web_config;


pub use decoding::{decode, encode};
pub(crate) use decoding::kind_of;
pub use feature_state::FeatureState;
pub use icons::IconOverrides;
pub use paths::SettingsPaths;
pub use web_config::{UNSET, WebPresentationConfig, override_value, resolve_or};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Version tag written into freshly created settings.
pub const DEFAULT_VERSION_STRING: &str = "v2.5.2";

/// Main settings structure for the media bar.
///
/// Represents the complete schema persisted between restarts and served to
/// the front-end. Missing fields take their defaults and unknown fields are
/// ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaBarSettings {
    /// Whether the media bar is rendered at all.
    pub enabled: FeatureState,

    /// Informational version tag. Not used for migrations.
    pub version_string: String,

    /// Whether the front-end reads avatars from an external file.
    pub use_avatars_file: bool,

    /// Name of the playlist used as avatar source. Empty means none.
    pub avatars_playlist: String,

    /// Presentation tuning values consumed by the front-end.
    pub web_config: WebPresentationConfig,
}

impl Default for MediaBarSettings {
    fn default() -> Self {
        Self {
            enabled: FeatureState::Enabled,
            version_string: DEFAULT_VERSION_STRING.to_string(),
            use_avatars_file: true,
            avatars_playlist: String::new(),
            web_config: WebPresentationConfig::default(),
        }
    }
}

impl MediaBarSettings {
    /// Returns the configured avatar playlist, or `None` when unset.
    pub fn avatar_playlist(&self) -> Option<&str> {
        if self.avatars_playlist.is_empty() {
            None
        } else {
            Some(&self.avatars_playlist)
        }
    }
}
