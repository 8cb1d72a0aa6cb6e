use thiserror::Error;

use crate::{SettingsError, settings_store::{EditError, SettingsStore}};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A path-addressed edit was rejected or could not be saved.
    #[error("Settings error: {0}")]
    EditError(#[from] EditError),

    /// Settings could not be loaded or saved.
    #[error("Settings error: {0}")]
    SettingsError(#[from] SettingsError),

    /// Command output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),

    /// The settings location could not be determined.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return either the text to print or a `CliError`.
pub type CommandResult = Result<String, CliError>;

/// Trait defining the interface for all CLI commands.
///
/// Commands receive the loaded settings store and return their output.
pub trait Command {
    /// Executes the command against the settings store.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid arguments, rejected edits or failed saves.
    fn execute(&self, store: &SettingsStore) -> CommandResult;
}
