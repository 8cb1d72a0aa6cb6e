use serde_json::Value;

use super::EditError;

/// Checks if a settings path matches a given pattern
///
/// The pattern must match a leading run of path segments; `*` matches any
/// single segment.
///
/// # Examples
/// * `"webConfig.maxMovies"` matches `"webConfig.maxMovies"`
/// * `"webConfig.maxMovies"` matches `"webConfig.*"` and `"webConfig"`
/// * `"enabled"` matches `"*"`
pub(super) fn path_matches(path: &str, pattern: &str) -> bool {
    const WILDCARD: &str = "*";

    if pattern == WILDCARD {
        return true;
    }

    let path_parts: Vec<&str> = path.split('.').collect();
    let pattern_parts: Vec<&str> = pattern.split('.').collect();

    if pattern_parts.len() > path_parts.len() {
        return false;
    }

    path_parts
        .iter()
        .zip(pattern_parts.iter())
        .all(|(path_part, pattern_part)| *pattern_part == WILDCARD || path_part == pattern_part)
}

/// Navigates through a JSON object structure following a dot-separated path
///
/// # Errors
/// * `EditError::InvalidPath` - If the path doesn't exist or is malformed
pub(super) fn navigate_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, EditError> {
    let parts = split_path(path)?;
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        current = match current {
            Value::Object(map) => map.get(*part).ok_or_else(|| {
                EditError::InvalidPath(format!(
                    "Key '{}' not found at path '{}'",
                    part,
                    parts[..i].join(".")
                ))
            })?,
            other => {
                return Err(EditError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    crate::settings::kind_of(other),
                    parts[..i].join(".")
                )));
            }
        };
    }

    Ok(current)
}

/// Replaces the value at an existing dot-separated path
///
/// Only fields that already exist can be replaced; new keys are never added.
///
/// # Errors
/// * `EditError::InvalidPath` - If the path is empty or doesn't exist
pub(super) fn set_value_at_path(
    value: &mut Value,
    path: &str,
    new_value: Value,
) -> Result<(), EditError> {
    let parts = split_path(path)?;
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        current = match current {
            Value::Object(map) => map.get_mut(*part).ok_or_else(|| {
                EditError::InvalidPath(format!(
                    "Key '{}' not found at path '{}'",
                    part,
                    parts[..i].join(".")
                ))
            })?,
            other => {
                return Err(EditError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    crate::settings::kind_of(other),
                    parts[..i].join(".")
                )));
            }
        };
    }

    *current = new_value;
    Ok(())
}

fn split_path(path: &str) -> Result<Vec<&str>, EditError> {
    let parts: Vec<&str> = path.split('.').collect();

    if parts.iter().any(|part| part.is_empty()) {
        return Err(EditError::InvalidPath(format!("Malformed path '{path}'")));
    }

    Ok(parts)
}
