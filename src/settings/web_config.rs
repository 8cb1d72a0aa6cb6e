use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::IconOverrides;

/// Sentinel for numeric tuning fields meaning "no override".
///
/// The front-end substitutes its own built-in default when it sees this
/// value. It is never a literal interval or count.
pub const UNSET: i32 = -1;

/// Returns the override carried by a tuning field, or `None` for [`UNSET`].
///
/// Any other value, including out-of-range negatives, is passed through.
pub fn override_value(value: i32) -> Option<i32> {
    if value == UNSET { None } else { Some(value) }
}

/// Resolves a tuning field against the caller's built-in default.
pub fn resolve_or(value: i32, fallback: i32) -> i32 {
    override_value(value).unwrap_or(fallback)
}

/// Presentation tuning values handed to the front-end.
///
/// Every numeric field defaults to [`UNSET`]. No range validation happens
/// here; the front-end owns the legal ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPresentationConfig {
    /// Rating-source icon overrides.
    pub image_svgs: IconOverrides,

    /// Milliseconds between automatic slide changes.
    pub shuffle_interval: i32,

    /// Milliseconds between retries when item data fails to load.
    pub retry_interval: i32,

    /// Minimum swipe distance in pixels to change slides.
    pub min_swipe_distance: i32,

    /// Milliseconds between checks for the host page to finish loading.
    pub loading_check_interval: i32,

    /// Plot summaries longer than this are truncated.
    pub max_plot_length: i32,

    /// Maximum number of movies in the rotation.
    pub max_movies: i32,

    /// Maximum number of TV shows in the rotation.
    pub max_tv_shows: i32,

    /// Maximum number of items overall.
    pub max_items: i32,

    /// Number of slides preloaded ahead of the current one.
    pub preload_count: i32,

    /// Duration of the fade between slides in milliseconds.
    pub fade_transition_duration: i32,

    /// Whether slides animate while shown.
    pub slide_animation_enabled: bool,
}

impl Default for WebPresentationConfig {
    fn default() -> Self {
        Self {
            image_svgs: IconOverrides::default(),
            shuffle_interval: UNSET,
            retry_interval: UNSET,
            min_swipe_distance: UNSET,
            loading_check_interval: UNSET,
            max_plot_length: UNSET,
            max_movies: UNSET,
            max_tv_shows: UNSET,
            max_items: UNSET,
            preload_count: UNSET,
            fade_transition_duration: UNSET,
            slide_animation_enabled: true,
        }
    }
}

impl WebPresentationConfig {
    /// Returns every numeric tuning field paired with its serialized name.
    pub fn tuning_fields(&self) -> [(&'static str, i32); 10] {
        [
            ("shuffleInterval", self.shuffle_interval),
            ("retryInterval", self.retry_interval),
            ("minSwipeDistance", self.min_swipe_distance),
            ("loadingCheckInterval", self.loading_check_interval),
            ("maxPlotLength", self.max_plot_length),
            ("maxMovies", self.max_movies),
            ("maxTvShows", self.max_tv_shows),
            ("maxItems", self.max_items),
            ("preloadCount", self.preload_count),
            ("fadeTransitionDuration", self.fade_transition_duration),
        ]
    }

    /// Returns the names of the tuning fields that carry an override.
    pub fn overridden_fields(&self) -> Vec<&'static str> {
        self.tuning_fields()
            .into_iter()
            .filter(|(_, value)| override_value(*value).is_some())
            .map(|(name, _)| name)
            .collect()
    }
}
