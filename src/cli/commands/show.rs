use clap::Args;

use crate::{
    cli::{CliError, Command, CommandResult},
    settings_store::SettingsStore,
};

/// Prints the complete current settings as JSON.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Print the document on a single line
    #[arg(long)]
    pub compact: bool,
}

impl Command for ShowCommand {
    fn execute(&self, store: &SettingsStore) -> CommandResult {
        let settings = store.current();

        let output = if self.compact {
            serde_json::to_string(&*settings)
        } else {
            serde_json::to_string_pretty(&*settings)
        };

        output.map_err(|e| CliError::Output(format!("Failed to render settings: {e}")))
    }
}
