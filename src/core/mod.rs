use std::fmt;

use thiserror::Error;

/// Error types for loading and persisting media bar settings.
///
/// Missing or unknown fields are never errors. A stored blob is only
/// rejected when it is not a JSON object at all.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The persisted blob is not parseable as a JSON object
    #[error("stored settings are corrupt: {details}")]
    ConfigCorrupt {
        /// Parse error details
        details: String,
    },

    /// The persistence collaborator could not complete a read or write
    #[error("settings persistence unavailable at '{location}': {details}")]
    PersistenceUnavailable {
        /// Where the operation was attempted (file path, "memory", ...)
        location: String,
        /// Underlying error details
        details: String,
    },
}

/// A specialized `Result` type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

impl SettingsError {
    /// Creates a corrupt-blob error from any parse failure.
    pub fn corrupt(error: impl fmt::Display) -> Self {
        SettingsError::ConfigCorrupt {
            details: error.to_string(),
        }
    }

    /// Creates a persistence error with location context.
    ///
    /// # Arguments
    ///
    /// * `location` - Where the read or write was attempted
    /// * `error` - The underlying failure
    pub fn persistence(location: impl fmt::Display, error: impl fmt::Display) -> Self {
        SettingsError::PersistenceUnavailable {
            location: location.to_string(),
            details: error.to_string(),
        }
    }

    /// Returns true if this error means the stored blob was unreadable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, SettingsError::ConfigCorrupt { .. })
    }
}
