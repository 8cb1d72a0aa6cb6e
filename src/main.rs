//! Media bar settings tool - inspect and edit the persisted settings.

use std::process::ExitCode;

use clap::Parser;
use mediabar::{
    cli::{self, Cli, formatting::format_error},
    tracing_config,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = tracing_config::init("warn") {
        eprintln!("{}", format_error(&format!("Failed to initialize logging: {e}")));
    }

    match cli::run(&cli) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
