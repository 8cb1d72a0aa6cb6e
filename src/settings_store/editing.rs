use serde::Deserialize;
use serde_json::Value;

use super::{
    EditError, SettingsStore,
    path_ops::{navigate_path, set_value_at_path},
};
use crate::settings::{MediaBarSettings, kind_of};

impl SettingsStore {
    /// Retrieves a settings value at the specified path
    ///
    /// # Arguments
    /// * `path` - Dot-separated path using serialized names (e.g., "webConfig.maxMovies")
    ///
    /// # Errors
    /// * `EditError::InvalidPath` - If the path doesn't exist
    pub fn get_by_path(&self, path: &str) -> Result<Value, EditError> {
        let document = to_document(&self.current())?;
        navigate_path(&document, path).cloned()
    }

    /// Sets a settings value at the specified path, then saves and broadcasts
    ///
    /// The read-modify-write happens under the writer lock, so concurrent
    /// edits never interleave.
    ///
    /// # Errors
    /// * `EditError::InvalidPath` - If the path doesn't exist
    /// * `EditError::TypeMismatch` - If the value does not fit the field
    /// * `EditError::Settings` - If the new settings could not be saved
    pub fn set_by_path(&self, path: &str, value: Value) -> Result<(), EditError> {
        self.try_update(|settings| {
            let mut document = to_document(settings)?;
            let expected = match navigate_path(&document, path)? {
                // Only the optional icon overrides hold null.
                Value::Null => "string or null",
                current => kind_of(current),
            };

            set_value_at_path(&mut document, path, value.clone())?;

            *settings =
                MediaBarSettings::deserialize(&document).map_err(|_| EditError::TypeMismatch {
                    path: path.to_string(),
                    expected,
                    actual: value,
                })?;

            Ok(())
        })
    }
}

fn to_document(settings: &MediaBarSettings) -> Result<Value, EditError> {
    serde_json::to_value(settings).map_err(|e| EditError::Serialization(e.to_string()))
}
