use crate::{
    cli::{Command, CommandResult},
    settings_store::SettingsStore,
};

/// Restores every setting to its default and saves.
#[derive(Debug)]
pub struct ResetCommand;

impl Command for ResetCommand {
    fn execute(&self, store: &SettingsStore) -> CommandResult {
        store.reset()?;
        Ok("Restored default media bar settings".to_string())
    }
}
