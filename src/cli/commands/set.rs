use clap::Args;
use serde_json::Value;

use crate::{
    cli::{CliError, Command, CommandResult, formatting::parse_value},
    settings_store::{EditError, SettingsStore},
};

/// Sets a single settings value and saves the result.
///
/// # Example Usage
///
/// ```bash
/// mediabar set webConfig.maxMovies 20
/// mediabar set webConfig.shuffleInterval -1
/// mediabar set enabled Disabled
/// mediabar set webConfig.imageSvgs.imdbLogo null
/// mediabar set avatarsPlaylist 2024
/// ```
///
/// Unquoted input that parses as JSON but does not fit the field is retried
/// as plain text, so `2024` can still name a playlist.
#[derive(Debug, Args)]
pub struct SetCommand {
    /// Settings path (e.g., webConfig.maxMovies)
    pub path: String,

    /// New value, parsed as JSON when possible and as a string otherwise.
    /// Quote it (e.g. '"null"') to force text.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

impl Command for SetCommand {
    fn execute(&self, store: &SettingsStore) -> CommandResult {
        if self.path.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "Expected a non-empty <path> for 'set'".to_string(),
            ));
        }

        let value = parse_value(&self.value);
        let as_text = !value.is_string();

        match store.set_by_path(&self.path, value) {
            Err(mismatch @ EditError::TypeMismatch { .. }) if as_text => {
                let text = Value::String(self.value.clone());
                store.set_by_path(&self.path, text).map_err(|e| match e {
                    EditError::TypeMismatch { .. } => mismatch,
                    other => other,
                })?;
            }
            result => result?,
        }

        Ok(format!("Set new value '{}' at path '{}'", self.value, self.path))
    }
}
