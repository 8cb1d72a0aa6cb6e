use std::time::Instant;

use serde_json::Value;

use crate::SettingsError;

/// What caused a settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// An administrative edit through `update`, `set_by_path` or `reset`.
    Edit,
    /// A fresh load replaced the live settings.
    Reload,
}

/// Represents a settings change with path-based identification.
///
/// Captures what changed, where it came from and when it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsChange {
    /// Path to the changed field using dot notation (e.g., "webConfig.maxMovies").
    pub path: String,
    /// The previous value of the field, if it existed.
    pub old_value: Option<Value>,
    /// The new value of the field.
    pub new_value: Value,
    /// What triggered the change.
    pub source: ChangeSource,
    /// Timestamp when the change occurred.
    pub timestamp: Instant,
}

/// Errors that can occur while editing settings by path.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The specified settings path does not exist.
    #[error("invalid settings path: {0}")]
    InvalidPath(String),

    /// The value does not fit the field at the given path.
    #[error("type mismatch at {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The path where the mismatch occurred.
        path: String,
        /// JSON kind of the current value at the path.
        expected: &'static str,
        /// The rejected value.
        actual: Value,
    },

    /// The settings could not be converted to their JSON form.
    #[error("failed to serialize settings: {0}")]
    Serialization(String),

    /// Loading or persisting failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl SettingsChange {
    /// Creates a new settings change stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `path` - The dot-separated path to the field
    /// * `old_value` - The previous value of the field (if known)
    /// * `new_value` - The new value of the field
    /// * `source` - What triggered the change
    pub fn new(
        path: String,
        old_value: Option<Value>,
        new_value: Value,
        source: ChangeSource,
    ) -> Self {
        Self {
            path,
            old_value,
            new_value,
            source,
            timestamp: Instant::now(),
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `EditError::TypeMismatch` if the value cannot be deserialized
    /// into the requested type.
    pub fn extract<T>(&self) -> Result<T, EditError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.new_value.clone()).map_err(|_| EditError::TypeMismatch {
            path: self.path.clone(),
            expected: std::any::type_name::<T>(),
            actual: self.new_value.clone(),
        })
    }
}
