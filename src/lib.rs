//! Mediabar - settings schema and persistent store for the media bar front-end.
//!
//! The media bar is a carousel rendered by the media server's web client.
//! This crate owns its settings:
//!
//! - Versioned settings schema with per-field defaults
//! - `-1` sentinel meaning "let the front-end pick its own default"
//! - Forward and backward compatible JSON persistence
//! - Thread-safe store with snapshot reads and change notifications
//! - CLI for administrative edits
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mediabar::settings_store::{FilePersistence, SettingsStore};
//!
//! let store = SettingsStore::load_or_default(FilePersistence::new("settings.json"));
//!
//! store.update(|settings| settings.web_config.max_movies = 20)?;
//!
//! let settings = store.current();
//! println!("Media bar enabled: {}", settings.enabled);
//! # Ok::<(), mediabar::SettingsError>(())
//! ```

/// Settings schema definitions and defaults.
pub mod settings;

/// Core error types and result aliases.
pub mod core;

/// Settings store with persistence and change tracking.
pub mod settings_store;

/// Command-line interface for administrative edits.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{Result, SettingsError};
