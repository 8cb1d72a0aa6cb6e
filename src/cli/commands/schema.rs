use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult},
    settings::MediaBarSettings,
    settings_store::SettingsStore,
};

/// Prints the JSON Schema of the settings document.
#[derive(Debug)]
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _store: &SettingsStore) -> CommandResult {
        let schema = schema_for!(MediaBarSettings);

        serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::Output(format!("Failed to render schema: {e}")))
    }
}
