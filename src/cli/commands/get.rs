use clap::Args;

use crate::{
    cli::{Command, CommandResult, formatting::format_value},
    settings_store::SettingsStore,
};

/// Retrieves a single settings value.
///
/// # Example Usage
///
/// ```bash
/// mediabar get enabled
/// mediabar get webConfig.maxMovies
/// mediabar get webConfig.imageSvgs
/// ```
#[derive(Debug, Args)]
pub struct GetCommand {
    /// Settings path (e.g., webConfig.maxMovies)
    pub path: String,
}

impl Command for GetCommand {
    fn execute(&self, store: &SettingsStore) -> CommandResult {
        let value = store.get_by_path(&self.path)?;

        Ok(format!("{}: {}", self.path, format_value(&value)))
    }
}
