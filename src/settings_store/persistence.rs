use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::{Result, SettingsError};

/// Durable storage for the serialized settings blob.
///
/// The store treats the blob as opaque bytes; the storage medium is up to
/// the implementation.
pub trait SettingsPersistence: Send + Sync {
    /// Reads the stored blob, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    /// Returns `SettingsError::PersistenceUnavailable` if the medium cannot be read.
    fn read_blob(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the stored blob.
    ///
    /// # Errors
    /// Returns `SettingsError::PersistenceUnavailable` if the write does not complete.
    fn write_blob(&self, blob: &[u8]) -> Result<()>;

    /// Human-readable description of where the blob lives, used in logs.
    fn location(&self) -> String;
}

/// Stores settings as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    /// Creates a persistence backend for the given settings file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsPersistence for FilePersistence {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_blob(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(blob) => {
                debug!(bytes = blob.len(), "Read settings file");
                Ok(Some(blob))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SettingsError::persistence(self.path.display(), e)),
        }
    }

    /// Writes the blob to a uniquely named temp file beside the target,
    /// syncs it, then renames it over the target.
    ///
    /// Concurrent writers never share a temp file, and readers only ever see
    /// a complete blob.
    #[instrument(skip(self, blob), fields(path = %self.path.display()))]
    fn write_blob(&self, blob: &[u8]) -> Result<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::persistence(parent.display(), e))?;
                parent
            }
            None => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| SettingsError::persistence(parent.display(), e))?;

        let written = temp.write_all(blob).and_then(|()| temp.as_file().sync_all());
        if let Err(e) = written {
            return Err(SettingsError::persistence(temp.path().display(), e));
        }

        temp.persist(&self.path)
            .map_err(|e| SettingsError::persistence(self.path.display(), e.error))?;

        debug!(bytes = blob.len(), "Wrote settings file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the settings blob in memory.
///
/// Clones share the same slot, so several stores can be pointed at one
/// backend the way they would share a file.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    blob: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryPersistence {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds the given blob.
    pub fn with_blob(blob: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    /// Returns a copy of the stored blob.
    pub fn blob(&self) -> Option<Vec<u8>> {
        self.blob
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SettingsPersistence for MemoryPersistence {
    fn read_blob(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.blob())
    }

    fn write_blob(&self, blob: &[u8]) -> Result<()> {
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
