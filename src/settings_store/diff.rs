use std::{collections::BTreeSet, time::Instant};

use serde_json::Value;

use super::{ChangeSource, SettingsChange};
use crate::settings::MediaBarSettings;

/// Compares two settings values and lists the field-level changes.
///
/// Both sides are converted to JSON and compared recursively; only leaves
/// that differ are reported, in path order.
///
/// # Errors
/// Returns error if either side cannot be serialized to JSON.
pub(super) fn diff_settings(
    old: &MediaBarSettings,
    new: &MediaBarSettings,
    source: ChangeSource,
) -> Result<Vec<SettingsChange>, serde_json::Error> {
    let old_value = serde_json::to_value(old)?;
    let new_value = serde_json::to_value(new)?;

    let mut changes = Vec::new();
    diff_values("", Some(&old_value), &new_value, source, Instant::now(), &mut changes);

    Ok(changes)
}

fn diff_values(
    path: &str,
    old: Option<&Value>,
    new: &Value,
    source: ChangeSource,
    timestamp: Instant,
    changes: &mut Vec<SettingsChange>,
) {
    match (old, new) {
        (Some(Value::Object(old_map)), Value::Object(new_map)) => {
            let keys: BTreeSet<&String> = old_map.keys().chain(new_map.keys()).collect();

            for key in keys {
                let field_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };

                match new_map.get(key) {
                    Some(new_field) => diff_values(
                        &field_path,
                        old_map.get(key),
                        new_field,
                        source,
                        timestamp,
                        changes,
                    ),
                    None => changes.push(SettingsChange {
                        path: field_path,
                        old_value: old_map.get(key).cloned(),
                        new_value: Value::Null,
                        source,
                        timestamp,
                    }),
                }
            }
        }
        (old, new) if old != Some(new) => changes.push(SettingsChange {
            path: path.to_string(),
            old_value: old.cloned(),
            new_value: new.clone(),
            source,
            timestamp,
        }),
        _ => {}
    }
}
