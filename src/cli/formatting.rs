//! Formatting utilities for CLI output.

use serde_json::Value;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a JSON value for human-readable CLI output.
///
/// Scalars print inline; objects and arrays print as indented JSON.
/// A `-1` tuning value prints as-is, the sentinel is not interpreted here.
///
/// # Examples
///
/// ```
/// use mediabar::cli::formatting::format_value;
///
/// assert_eq!(format_value(&serde_json::json!("hello")), "\"hello\"");
/// assert_eq!(format_value(&serde_json::json!(-1)), "-1");
/// assert_eq!(format_value(&serde_json::Value::Null), "null");
/// ```
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        scalar => scalar.to_string(),
    }
}

/// Parses a value given on the command line.
///
/// Valid JSON is taken as-is (`20`, `true`, `null`, `"text"`); anything else
/// becomes a plain string.
pub fn parse_value(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}
