//! Unit tests for settings_store module
//! In-memory persistence only; no filesystem or timing dependencies.

#![allow(clippy::panic, clippy::unwrap_used)]


use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use serde_json::json;

use crate::{
    Result, SettingsError,
    settings::{FeatureState, MediaBarSettings, UNSET, decode, encode},
    settings_store::{
        EditError, MemoryPersistence, SettingsPersistence, SettingsProvider, SettingsStore,
    },
};

/// Persistence that can be told to fail reads or writes.
#[derive(Default)]
struct FlakyPersistence {
    inner: MemoryPersistence,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl SettingsPersistence for FlakyPersistence {
    fn read_blob(&self) -> Result<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SettingsError::persistence("flaky", "disk on fire"));
        }
        self.inner.read_blob()
    }

    fn write_blob(&self, blob: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SettingsError::persistence("flaky", "read-only filesystem"));
        }
        self.inner.write_blob(blob)
    }

    fn location(&self) -> String {
        "flaky".to_string()
    }
}

fn stored(persistence: &MemoryPersistence) -> MediaBarSettings {
    decode(&persistence.blob().unwrap()).unwrap()
}

#[test]
fn load_on_empty_persistence_uses_defaults_without_writing() {
    let persistence = MemoryPersistence::new();
    let store = SettingsStore::open(persistence.clone()).unwrap();

    let current = store.current();
    assert_eq!(current.enabled, FeatureState::Enabled);
    assert_eq!(current.web_config.max_movies, UNSET);
    assert_eq!(*current, MediaBarSettings::default());
    assert!(persistence.blob().is_none());
}

#[test]
fn update_persists_and_survives_fresh_store() {
    let persistence = MemoryPersistence::new();
    let store = SettingsStore::open(persistence.clone()).unwrap();

    store.update(|s| s.web_config.max_movies = 20).unwrap();
    store.save().unwrap();

    let reopened = SettingsStore::open(persistence).unwrap();
    let current = reopened.current();

    assert_eq!(current.web_config.max_movies, 20);

    let mut expected = MediaBarSettings::default();
    expected.web_config.max_movies = 20;
    assert_eq!(*current, expected);
}

#[test]
fn corrupt_blob_resets_to_defaults_and_is_overwritten_on_save() {
    let persistence = MemoryPersistence::with_blob(&b"<PluginConfiguration><Enabled>"[..]);
    let store = SettingsStore::new(persistence.clone());
    store.update(|s| s.avatars_playlist = "Stale".to_string()).unwrap();
    persistence.write_blob(b"<PluginConfiguration><Enabled>").unwrap();

    let result = store.load();
    assert!(matches!(result, Err(SettingsError::ConfigCorrupt { .. })));
    assert_eq!(*store.current(), MediaBarSettings::default());

    store.save().unwrap();
    assert_eq!(stored(&persistence), MediaBarSettings::default());
}

#[test]
fn load_or_default_recovers_from_corrupt_blob() {
    let persistence = MemoryPersistence::with_blob(&b"not json at all"[..]);

    let store = SettingsStore::load_or_default(persistence.clone());

    assert_eq!(*store.current(), MediaBarSettings::default());
    assert_eq!(persistence.blob().as_deref(), Some(&b"not json at all"[..]));
}

#[test]
fn sentinel_survives_load_update_save_load() {
    let blob = json!({
        "enabled": "Enabled",
        "webConfig": { "shuffleInterval": -1, "maxMovies": 5, "fadeTransitionDuration": -1 }
    });
    let persistence = MemoryPersistence::with_blob(blob.to_string());

    let store = SettingsStore::open(persistence.clone()).unwrap();
    store.update(|s| s.avatars_playlist = "Featured".to_string()).unwrap();

    let reopened = SettingsStore::open(persistence.clone()).unwrap();
    let current = reopened.current();
    let web = &current.web_config;
    assert_eq!(web.shuffle_interval, -1);
    assert_eq!(web.fade_transition_duration, -1);
    assert_eq!(web.max_movies, 5);

    let raw: serde_json::Value = serde_json::from_slice(&persistence.blob().unwrap()).unwrap();
    assert_eq!(raw["webConfig"]["shuffleInterval"], json!(-1));
}

#[test]
fn failed_save_keeps_new_value_in_memory() {
    let persistence = FlakyPersistence::default();
    persistence.fail_writes.store(true, Ordering::SeqCst);
    let store = SettingsStore::new(persistence);

    let result = store.update(|s| s.enabled = FeatureState::Disabled);

    assert!(matches!(result, Err(SettingsError::PersistenceUnavailable { .. })));
    assert_eq!(store.current().enabled, FeatureState::Disabled);
    assert!(store.save().is_err());
}

#[test]
fn failed_read_leaves_live_settings_untouched() {
    let persistence = FlakyPersistence::default();
    persistence.fail_reads.store(true, Ordering::SeqCst);
    let store = SettingsStore::new(persistence);
    store.update(|s| s.web_config.preload_count = 2).unwrap();

    let result = store.load();

    assert!(matches!(result, Err(SettingsError::PersistenceUnavailable { .. })));
    assert_eq!(store.current().web_config.preload_count, 2);
}

#[test]
fn snapshots_are_not_affected_by_later_updates() {
    let store = SettingsStore::with_defaults();
    let before = store.current();

    store.update(|s| s.use_avatars_file = false).unwrap();

    assert!(before.use_avatars_file);
    assert!(!store.current().use_avatars_file);
}

#[test]
fn clones_share_live_settings() {
    let store = SettingsStore::with_defaults();
    let other = store.clone();

    other.update(|s| s.web_config.max_items = 100).unwrap();

    assert_eq!(store.current().web_config.max_items, 100);
    assert_eq!(store.current_settings().web_config.max_items, 100);
}

#[test]
fn readers_never_observe_partial_updates() {
    let store = SettingsStore::with_defaults();
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::SeqCst) {
                    let snapshot = store.current();
                    let web = &snapshot.web_config;
                    assert_eq!(web.max_movies, web.max_tv_shows);
                    assert_eq!(web.max_movies, web.max_items);
                }
            });
        }

        for i in 0..500 {
            store
                .update(|s| {
                    s.web_config.max_movies = i;
                    s.web_config.max_tv_shows = i;
                    s.web_config.max_items = i;
                })
                .unwrap();
        }

        done.store(true, Ordering::SeqCst);
    });

    assert_eq!(store.current().web_config.max_items, 499);
}

#[test]
fn concurrent_updates_do_not_lose_writes() {
    let store = SettingsStore::with_defaults();
    store.update(|s| s.web_config.preload_count = 0).unwrap();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    store.update(|s| s.web_config.preload_count += 1).unwrap();
                }
            });
        }
    });

    assert_eq!(store.current().web_config.preload_count, 400);
}

#[test]
fn get_by_path_reads_serialized_names() {
    let store = SettingsStore::with_defaults();

    assert_eq!(store.get_by_path("enabled").unwrap(), json!("Enabled"));
    assert_eq!(store.get_by_path("webConfig.maxTvShows").unwrap(), json!(-1));
    assert_eq!(store.get_by_path("webConfig.imageSvgs.rottenTomato").unwrap(), json!(null));
    assert!(matches!(store.get_by_path("webConfig.max_tv_shows"), Err(EditError::InvalidPath(_))));
}

#[test]
fn set_by_path_updates_and_persists() {
    let persistence = MemoryPersistence::new();
    let store = SettingsStore::new(persistence.clone());

    store.set_by_path("webConfig.maxMovies", json!(20)).unwrap();
    store.set_by_path("enabled", json!("Disabled")).unwrap();
    store.set_by_path("webConfig.imageSvgs.tomatoLogo", json!("")).unwrap();

    let current = store.current();
    assert_eq!(current.web_config.max_movies, 20);
    assert_eq!(current.enabled, FeatureState::Disabled);
    assert_eq!(current.web_config.image_svgs.tomato_logo, Some(String::new()));
    assert_eq!(stored(&persistence), *current);
}

#[test]
fn set_by_path_rejects_bad_edits_without_side_effects() {
    let persistence = MemoryPersistence::new();
    let store = SettingsStore::new(persistence.clone());

    let result = store.set_by_path("webConfig.maxMovies", json!("twenty"));
    assert!(matches!(result, Err(EditError::TypeMismatch { expected: "number", .. })));

    let result = store.set_by_path("webConfig.maxMovies", json!(2.5));
    assert!(matches!(result, Err(EditError::TypeMismatch { .. })));

    let result = store.set_by_path("enabled", json!("Sometimes"));
    assert!(matches!(result, Err(EditError::TypeMismatch { .. })));

    let result = store.set_by_path("webConfig.newKnob", json!(1));
    assert!(matches!(result, Err(EditError::InvalidPath(_))));

    assert_eq!(*store.current(), MediaBarSettings::default());
    assert!(persistence.blob().is_none());
}

#[test]
fn set_by_path_icon_mismatch_names_string_or_null() {
    let store = SettingsStore::with_defaults();

    let result = store.set_by_path("webConfig.imageSvgs.imdbLogo", json!(5));

    match result {
        Err(EditError::TypeMismatch { path, expected, actual }) => {
            assert_eq!(path, "webConfig.imageSvgs.imdbLogo");
            assert_eq!(expected, "string or null");
            assert_eq!(actual, json!(5));
        }
        other => panic!("Expected type mismatch, got {other:?}"),
    }
    assert_eq!(store.current().web_config.image_svgs.imdb_logo, None);
}

#[test]
fn set_by_path_accepts_out_of_range_numbers() {
    let store = SettingsStore::with_defaults();

    store.set_by_path("webConfig.retryInterval", json!(-42)).unwrap();

    assert_eq!(store.current().web_config.retry_interval, -42);
}

#[test]
fn reset_restores_defaults_and_saves() {
    let persistence = MemoryPersistence::new();
    let store = SettingsStore::new(persistence.clone());
    store.update(|s| s.web_config.slide_animation_enabled = false).unwrap();

    store.reset().unwrap();

    assert_eq!(*store.current(), MediaBarSettings::default());
    assert_eq!(stored(&persistence), MediaBarSettings::default());
}

#[test]
fn save_writes_decodable_blob() {
    let persistence = MemoryPersistence::new();
    let store = SettingsStore::new(persistence.clone());

    store.save().unwrap();

    let blob = persistence.blob().unwrap();
    assert_eq!(blob, encode(&MediaBarSettings::default()).unwrap());
}
