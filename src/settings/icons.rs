use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image overrides for the rating-source logos.
///
/// Each entry is either absent, in which case the front-end uses its bundled
/// asset, or a reference (URL or resource path) chosen by the administrator.
/// Absent entries serialize as `null` so they stay distinct from `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct IconOverrides {
    /// Streaming catalog logo.
    pub imdb_logo: Option<String>,

    /// Review aggregate logo.
    pub tomato_logo: Option<String>,

    /// Icon shown for a favourable review score.
    pub fresh_tomato: Option<String>,

    /// Icon shown for an unfavourable review score.
    pub rotten_tomato: Option<String>,
}

impl IconOverrides {
    /// Returns true if no icon is overridden.
    pub fn is_empty(&self) -> bool {
        self.imdb_logo.is_none()
            && self.tomato_logo.is_none()
            && self.fresh_tomato.is_none()
            && self.rotten_tomato.is_none()
    }
}
