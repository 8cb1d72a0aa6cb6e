use std::sync::Arc;

use crate::settings::MediaBarSettings;

/// Read-only access to the live settings for whatever renders the front-end.
pub trait SettingsProvider: Send + Sync {
    /// Returns a snapshot of the current settings.
    fn current_settings(&self) -> Arc<MediaBarSettings>;
}
