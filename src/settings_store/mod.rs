//! Settings store with persistence and change tracking.
//!
//! Owns the single live settings instance of the process, loads it from a
//! persistence collaborator, saves it back on every change and notifies
//! subscribers of field-level updates.

mod changes;
mod diff;
mod editing;
mod path_ops;
mod persistence;
mod provider;
mod store;

#[cfg(test)]
mod tests;

pub use changes::{ChangeSource, EditError, SettingsChange};
pub use persistence::{FilePersistence, MemoryPersistence, SettingsPersistence};
pub use provider::SettingsProvider;
pub use store::SettingsStore;
