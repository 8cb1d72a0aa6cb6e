use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, instrument, warn};

use super::{
    ChangeSource, MemoryPersistence, SettingsChange, SettingsPersistence, SettingsProvider,
    diff::diff_settings, path_ops::path_matches,
};
use crate::{
    Result, SettingsError,
    settings::{self, MediaBarSettings},
};

const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// A thread-safe store that owns the live media bar settings
///
/// Readers get immutable snapshots and never wait on persistence. Writers are
/// serialized so each `update` is applied, published and saved as one unit.
/// Clones share the same live instance.
#[derive(Clone)]
pub struct SettingsStore {
    current: Arc<RwLock<Arc<MediaBarSettings>>>,

    writer: Arc<Mutex<()>>,

    persistence: Arc<dyn SettingsPersistence>,

    change_sender: broadcast::Sender<SettingsChange>,
}

impl SettingsStore {
    /// Creates a store holding default settings without touching persistence
    ///
    /// Call [`SettingsStore::load`] to replace the defaults with stored state.
    pub fn new(persistence: impl SettingsPersistence + 'static) -> Self {
        let (change_sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            current: Arc::new(RwLock::new(Arc::new(MediaBarSettings::default()))),
            writer: Arc::new(Mutex::new(())),
            persistence: Arc::new(persistence),
            change_sender,
        }
    }

    /// Creates a store with default settings backed by memory only
    pub fn with_defaults() -> Self {
        Self::new(MemoryPersistence::new())
    }

    /// Creates a store and loads it from persistence
    ///
    /// # Errors
    /// * `SettingsError::ConfigCorrupt` - If the stored blob is unreadable
    /// * `SettingsError::PersistenceUnavailable` - If the blob cannot be read
    pub fn open(persistence: impl SettingsPersistence + 'static) -> Result<Self> {
        let store = Self::new(persistence);
        store.load()?;
        Ok(store)
    }

    /// Creates a store and loads it, falling back to defaults on any failure
    ///
    /// A corrupt or unreadable blob is logged and left in place until the
    /// next save overwrites it. This never fails.
    pub fn load_or_default(persistence: impl SettingsPersistence + 'static) -> Self {
        let store = Self::new(persistence);

        if let Err(e) = store.load() {
            warn!(
                error = %e,
                location = %store.persistence.location(),
                "Failed to load media bar settings, continuing with defaults"
            );
        }

        store
    }

    /// Replaces the live settings with the stored state
    ///
    /// Nothing is written when no blob exists yet; the defaults become live
    /// and are first persisted by the next save.
    ///
    /// # Errors
    /// * `SettingsError::ConfigCorrupt` - The blob is not a JSON object. The
    ///   live settings are reset to defaults before this is returned.
    /// * `SettingsError::PersistenceUnavailable` - The blob cannot be read.
    ///   The live settings are left unchanged.
    #[instrument(skip(self), fields(location = %self.persistence.location()))]
    pub fn load(&self) -> Result<()> {
        let _guard = self.lock_writer();

        let loaded = match self.persistence.read_blob()? {
            None => {
                info!("No stored media bar settings, using defaults");
                MediaBarSettings::default()
            }
            Some(blob) => match settings::decode(&blob) {
                Ok(settings) => {
                    info!(
                        enabled = %settings.enabled,
                        version = %settings.version_string,
                        overrides = ?settings.web_config.overridden_fields(),
                        "Loaded media bar settings"
                    );
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Stored media bar settings are corrupt, resetting to defaults");
                    self.publish(MediaBarSettings::default(), ChangeSource::Reload);
                    return Err(e);
                }
            },
        };

        self.publish(loaded, ChangeSource::Reload);
        Ok(())
    }

    /// Returns a snapshot of the current settings, handling poisoned locks gracefully
    pub fn current(&self) -> Arc<MediaBarSettings> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Applies a change to the live settings and saves them
    ///
    /// The mutator runs on a private copy; readers see the new value only once
    /// it is complete. The new value stays live even if saving fails.
    ///
    /// # Errors
    /// * `SettingsError::PersistenceUnavailable` - If the new settings could not be saved
    pub fn update<F>(&self, mutator: F) -> Result<()>
    where
        F: FnOnce(&mut MediaBarSettings),
    {
        self.try_update(|settings| {
            mutator(settings);
            Ok::<(), SettingsError>(())
        })
    }

    /// Applies a fallible change; nothing is published or saved if it fails
    pub(super) fn try_update<F, E>(&self, mutator: F) -> std::result::Result<(), E>
    where
        F: FnOnce(&mut MediaBarSettings) -> std::result::Result<(), E>,
        E: From<SettingsError>,
    {
        let _guard = self.lock_writer();

        let mut next = MediaBarSettings::clone(&self.current());
        mutator(&mut next)?;

        let snapshot = self.publish(next, ChangeSource::Edit);
        self.write_snapshot(&snapshot)?;

        Ok(())
    }

    /// Restores every field to its default and saves
    ///
    /// # Errors
    /// * `SettingsError::PersistenceUnavailable` - If the defaults could not be saved
    pub fn reset(&self) -> Result<()> {
        self.update(|settings| *settings = MediaBarSettings::default())
    }

    /// Writes the current settings to persistence
    ///
    /// # Errors
    /// * `SettingsError::PersistenceUnavailable` - If the write does not complete
    pub fn save(&self) -> Result<()> {
        let _guard = self.lock_writer();
        self.write_snapshot(&self.current())
    }

    /// Subscribes to every settings change
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsChange> {
        self.change_sender.subscribe()
    }

    /// Creates a stream that yields changes matching the specified path pattern
    ///
    /// # Arguments
    /// * `pattern` - A dotted path prefix; `*` matches any single segment
    pub fn subscribe_to_path(&self, pattern: &str) -> impl Stream<Item = SettingsChange> + use<> {
        let pattern = pattern.to_string();
        let receiver = self.change_sender.subscribe();

        futures::stream::unfold(receiver, move |mut receiver| {
            let pattern = pattern.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(change) => {
                            if path_matches(&change.path, &pattern) {
                                return Some((change, receiver));
                            }
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            warn!(skipped, pattern = %pattern, "Settings subscriber lagged behind");
                        }
                        Err(RecvError::Closed) => return None,
                    }
                }
            }
        })
    }

    fn publish(&self, next: MediaBarSettings, source: ChangeSource) -> Arc<MediaBarSettings> {
        let next = Arc::new(next);

        let previous = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, Arc::clone(&next))
        };

        match diff_settings(&previous, &next, source) {
            Ok(changes) => {
                for change in changes {
                    debug!(path = %change.path, new_value = %change.new_value, "Settings field changed");
                    let _ = self.change_sender.send(change);
                }
            }
            Err(e) => warn!(error = %e, "Failed to diff settings, change events dropped"),
        }

        next
    }

    fn write_snapshot(&self, settings: &MediaBarSettings) -> Result<()> {
        let blob = settings::encode(settings)?;

        self.persistence.write_blob(&blob).inspect_err(|e| {
            warn!(error = %e, "Failed to persist media bar settings");
        })?;

        debug!(location = %self.persistence.location(), "Saved media bar settings");
        Ok(())
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsProvider for SettingsStore {
    fn current_settings(&self) -> Arc<MediaBarSettings> {
        self.current()
    }
}
