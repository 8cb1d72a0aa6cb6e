//! Command-line interface for administrative edits.
//!
//! Loads the settings file, runs one command against the store and returns
//! the text to print. Edits go through the store, so they are validated,
//! saved and broadcast exactly like edits from any other surface.

mod commands;
pub mod formatting;
mod types;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, instrument};

pub use commands::{GetCommand, ResetCommand, SchemaCommand, SetCommand, ShowCommand};
pub use types::{CliError, Command, CommandResult};

use crate::{
    settings::SettingsPaths,
    settings_store::{FilePersistence, SettingsStore},
};

/// Inspect and edit the media bar settings.
#[derive(Debug, Parser)]
#[command(name = "mediabar", version, about)]
pub struct Cli {
    /// Settings file to operate on (defaults to the XDG config location)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current settings
    Show(ShowCommand),
    /// Print one settings value
    Get(GetCommand),
    /// Change one settings value and save
    Set(SetCommand),
    /// Restore all defaults and save
    Reset,
    /// Print the JSON Schema of the settings document
    Schema,
}

impl Cli {
    /// Resolves the settings file this invocation operates on.
    ///
    /// # Errors
    /// Returns an error if no path was given and the config directory is unknown
    pub fn settings_path(&self) -> Result<PathBuf, CliError> {
        match &self.settings {
            Some(path) => Ok(path.clone()),
            None => Ok(SettingsPaths::settings_file()?),
        }
    }
}

/// Executes the parsed command line.
///
/// A missing or corrupt settings file is not an error here: the store falls
/// back to defaults, and the next edit writes a valid file.
///
/// # Errors
/// Returns error if the settings path cannot be resolved or the command fails.
#[instrument(skip(cli))]
pub fn run(cli: &Cli) -> CommandResult {
    let path = cli.settings_path()?;
    debug!(path = %path.display(), "Using settings file");

    let store = SettingsStore::load_or_default(FilePersistence::new(path));

    match &cli.command {
        Commands::Show(command) => command.execute(&store),
        Commands::Get(command) => command.execute(&store),
        Commands::Set(command) => command.execute(&store),
        Commands::Reset => ResetCommand.execute(&store),
        Commands::Schema => SchemaCommand.execute(&store),
    }
}
