use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::MediaBarSettings;
use crate::{Result, SettingsError};

/// Serializes settings into the persisted JSON form.
///
/// # Errors
/// Returns `SettingsError::PersistenceUnavailable` if the encoder fails, since
/// nothing can be written in that case.
pub fn encode(settings: &MediaBarSettings) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(settings).map_err(|e| SettingsError::persistence("encoder", e))
}

/// Decodes a persisted blob into settings.
///
/// Missing fields take their defaults and unknown fields are ignored. A field
/// holding a value of the wrong type is dropped with a warning and also takes
/// its default.
///
/// # Errors
/// Returns `SettingsError::ConfigCorrupt` if the blob is not valid JSON or its
/// root is not an object.
pub fn decode(bytes: &[u8]) -> Result<MediaBarSettings> {
    let value: Value = serde_json::from_slice(bytes).map_err(SettingsError::corrupt)?;

    if !value.is_object() {
        return Err(SettingsError::corrupt(format!(
            "expected a JSON object at the root, found {}",
            kind_of(&value)
        )));
    }

    from_value_lenient(value)
}

/// Converts a JSON object into settings, replacing mistyped fields by defaults.
fn from_value_lenient(mut value: Value) -> Result<MediaBarSettings> {
    if let Ok(settings) = MediaBarSettings::deserialize(&value) {
        return Ok(settings);
    }

    let defaults = serde_json::to_value(MediaBarSettings::default()).map_err(SettingsError::corrupt)?;

    let mut rejected = Vec::new();
    if let (Value::Object(user), Value::Object(default_map)) = (&mut value, &defaults) {
        drop_incompatible_fields(user, default_map, "", &defaults, &mut rejected);
    }

    for pointer in &rejected {
        warn!(field = %pointer, "Ignoring settings field with unexpected type, using default");
    }

    MediaBarSettings::deserialize(&value).map_err(SettingsError::corrupt)
}

/// Removes every field of `user` that would not deserialize in its slot.
///
/// Each leaf is probed in isolation against a copy of the defaults, so one
/// bad field never takes its siblings down with it.
fn drop_incompatible_fields(
    user: &mut Map<String, Value>,
    defaults: &Map<String, Value>,
    prefix: &str,
    default_root: &Value,
    rejected: &mut Vec<String>,
) {
    let keys: Vec<String> = user.keys().cloned().collect();

    for key in keys {
        let Some(default_value) = defaults.get(&key) else {
            debug!(field = %format!("{prefix}/{key}"), "Unknown settings field ignored");
            continue;
        };
        let pointer = format!("{prefix}/{key}");

        if let (Some(Value::Object(nested)), Value::Object(nested_defaults)) =
            (user.get_mut(&key), default_value)
        {
            drop_incompatible_fields(nested, nested_defaults, &pointer, default_root, rejected);
            continue;
        }

        let fits = user
            .get(&key)
            .is_some_and(|candidate| fits_slot(default_root, &pointer, candidate));

        if !fits {
            user.remove(&key);
            rejected.push(pointer);
        }
    }
}

fn fits_slot(default_root: &Value, pointer: &str, candidate: &Value) -> bool {
    let mut probe = default_root.clone();

    match probe.pointer_mut(pointer) {
        Some(slot) => *slot = candidate.clone(),
        None => return false,
    }

    MediaBarSettings::deserialize(&probe).is_ok()
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
