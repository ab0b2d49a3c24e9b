// PlaylistStore Service
// Handles playlists document persistence and legacy fallback

use std::sync::Arc;
use crate::models::PlaylistsConfig;
use crate::services::document::{read_with_defaults, StoreError};
use crate::services::{IdGenerator, LegacyMigrator, StoragePaths};

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Parsed from the current playlists document
    Current(PlaylistsConfig),
    /// Converted from the legacy document (and persisted)
    Migrated(PlaylistsConfig),
    /// Nothing usable on disk
    Defaults(PlaylistsConfig),
}

impl LoadOutcome {
    pub fn config(&self) -> &PlaylistsConfig {
        match self {
            LoadOutcome::Current(config)
            | LoadOutcome::Migrated(config)
            | LoadOutcome::Defaults(config) => config,
        }
    }

    pub fn into_config(self) -> PlaylistsConfig {
        match self {
            LoadOutcome::Current(config)
            | LoadOutcome::Migrated(config)
            | LoadOutcome::Defaults(config) => config,
        }
    }
}

/// Reads and writes the playlists document.
///
/// Holds no configuration in memory: every `load` goes back to disk.
pub struct PlaylistStore {
    paths: StoragePaths,
    migrator: LegacyMigrator,
}

impl PlaylistStore {
    pub fn new(paths: StoragePaths, ids: Arc<dyn IdGenerator>) -> Self {
        let migrator = LegacyMigrator::new(paths.legacy_path().to_path_buf(), ids);
        Self { paths, migrator }
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Load the configuration, falling back to migration and then defaults
    pub fn load(&self) -> PlaylistsConfig {
        self.load_outcome().into_config()
    }

    /// Resolve the configuration in order: current document, legacy
    /// migration, defaults
    pub fn load_outcome(&self) -> LoadOutcome {
        if let Some(config) = self.load_current() {
            return LoadOutcome::Current(config);
        }

        if let Some(config) = self.migrator.migrate() {
            if !self.save(&config) {
                log::warn!("Migrated playlists could not be persisted; migration will run again");
            }
            return LoadOutcome::Migrated(config);
        }

        LoadOutcome::Defaults(PlaylistsConfig::default())
    }

    fn load_current(&self) -> Option<PlaylistsConfig> {
        let path = self.paths.current_path();
        if !path.exists() {
            return None;
        }

        match read_with_defaults::<PlaylistsConfig>(path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load playlists, falling back: {e}");
                None
            }
        }
    }

    /// Persist the configuration. Returns false if it was not written.
    pub fn save(&self, config: &PlaylistsConfig) -> bool {
        match self.try_save(config) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save playlists: {e}");
                false
            }
        }
    }

    pub fn try_save(&self, config: &PlaylistsConfig) -> Result<(), StoreError> {
        let dir = self.paths.storage_dir();
        std::fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let content = serde_yaml::to_string(config)?;

        // Write beside the document, then swap it in
        let staging = self.paths.staging_path();
        std::fs::write(staging, content).map_err(|source| StoreError::Write {
            path: staging.to_path_buf(),
            source,
        })?;

        let path = self.paths.current_path();
        std::fs::rename(staging, path).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Saved {} playlists to {:?}", config.playlists.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Playlist, StreamSettings};
    use crate::services::SequentialIdGenerator;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn store(root: &Path) -> PlaylistStore {
        PlaylistStore::new(
            StoragePaths::new(root),
            Arc::new(SequentialIdGenerator::new("id")),
        )
    }

    fn write_storage_file(root: &Path, name: &str, content: &str) {
        let dir = root.join("storage");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn sample_config() -> PlaylistsConfig {
        PlaylistsConfig {
            active_playlist: "b".to_string(),
            playlists: vec![
                Playlist {
                    id: "a".to_string(),
                    name: "Lobby".to_string(),
                    icon: "tv".to_string(),
                    streams: StreamSettings {
                        top_left: "rtsp://lobby/1".to_string(),
                        ..Default::default()
                    },
                },
                Playlist {
                    id: "b".to_string(),
                    name: "Parking".to_string(),
                    icon: "car".to_string(),
                    streams: StreamSettings {
                        top_left: "rtsp://park/1".to_string(),
                        top_right: "rtsp://park/2".to_string(),
                        bottom_left: "rtsp://park/3".to_string(),
                        bottom_right: "rtsp://park/4".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());
        let config = sample_config();

        assert!(store.save(&config));
        assert_eq!(store.load_outcome(), LoadOutcome::Current(config));
    }

    #[test]
    fn test_save_creates_storage_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested").join("install");
        let store = store(&root);

        assert!(store.save(&PlaylistsConfig::default()));
        assert!(root.join("storage").join("playlists.yaml").exists());
    }

    #[test]
    fn test_save_failure_returns_false() {
        let temp = tempdir().unwrap();
        // A file where the storage directory should be
        fs::write(temp.path().join("storage"), "not a dir").unwrap();
        let store = store(temp.path());

        assert!(!store.save(&sample_config()));
        assert!(matches!(
            store.try_save(&sample_config()),
            Err(StoreError::CreateDir { .. })
        ));
    }

    #[test]
    fn test_empty_storage_loads_defaults() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());

        assert_eq!(
            store.load_outcome(),
            LoadOutcome::Defaults(PlaylistsConfig::default())
        );
        assert!(!store.paths().current_path().exists());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp = tempdir().unwrap();
        write_storage_file(
            temp.path(),
            "playlists.yaml",
            r#"{"playlists":[{"id":"x","name":"X","icon":"tv","streams":{"topRight":"b"}}]}"#,
        );

        let config = store(temp.path()).load();

        assert_eq!(config.active_playlist, "");
        assert_eq!(config.playlists.len(), 1);
        let streams = &config.playlists[0].streams;
        assert_eq!(streams.top_left, "");
        assert_eq!(streams.top_right, "b");
        assert_eq!(streams.bottom_left, "");
        assert_eq!(streams.bottom_right, "");
    }

    #[test]
    fn test_corrupt_current_without_legacy_loads_defaults() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "playlists.yaml", "activePlaylist: [oops\n");

        let outcome = store(temp.path()).load_outcome();

        assert_eq!(outcome, LoadOutcome::Defaults(PlaylistsConfig::default()));
    }

    #[test]
    fn test_corrupt_current_falls_through_to_legacy() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "playlists.yaml", "activePlaylist: [oops\n");
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: a\n");

        let outcome = store(temp.path()).load_outcome();

        assert!(matches!(outcome, LoadOutcome::Migrated(_)));
        assert_eq!(outcome.config().playlists[0].streams.top_left, "a");
    }

    #[test]
    fn test_legacy_migration_scenario() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: a\n");

        let config = store(temp.path()).load();

        assert_eq!(config.playlists.len(), 1);
        let playlist = &config.playlists[0];
        assert_eq!(playlist.name, "Default");
        assert_eq!(config.active_playlist, playlist.id);
        assert_eq!(
            playlist.streams,
            StreamSettings {
                top_left: "a".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_migration_runs_once() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: a\n");
        let store = store(temp.path());

        let first = store.load_outcome();
        assert!(matches!(first, LoadOutcome::Migrated(_)));
        assert!(store.paths().current_path().exists());

        let second = store.load_outcome();
        assert_eq!(second, LoadOutcome::Current(first.into_config()));
    }

    #[test]
    fn test_current_document_wins_over_legacy() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());
        assert!(store.save(&sample_config()));
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: legacy\n");

        assert_eq!(store.load_outcome(), LoadOutcome::Current(sample_config()));
    }

    #[test]
    fn test_null_fields_keep_current_over_legacy() {
        let temp = tempdir().unwrap();
        write_storage_file(
            temp.path(),
            "playlists.yaml",
            r#"{"activePlaylist":null,"playlists":[{"id":"keep","name":"Lobby","icon":"tv","streams":{"topLeft":"x"}}]}"#,
        );
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: old\n");
        let store = store(temp.path());

        let config = match store.load_outcome() {
            LoadOutcome::Current(config) => config,
            other => panic!("expected current document, got {other:?}"),
        };
        assert_eq!(config.active_playlist, "");
        assert_eq!(config.playlists.len(), 1);
        assert_eq!(config.playlists[0].id, "keep");
        let on_disk = fs::read_to_string(store.paths().current_path()).unwrap();
        assert!(on_disk.contains("keep"));
    }

    #[test]
    fn test_null_playlists_read_as_empty() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "playlists.yaml", "activePlaylist: ''\nplaylists: null\n");
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: old\n");

        assert_eq!(
            store(temp.path()).load_outcome(),
            LoadOutcome::Current(PlaylistsConfig::default())
        );
    }

    #[test]
    fn test_empty_current_document_is_current_defaults() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "playlists.yaml", "");
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: old\n");

        assert_eq!(
            store(temp.path()).load_outcome(),
            LoadOutcome::Current(PlaylistsConfig::default())
        );
    }

    #[test]
    fn test_save_writes_yaml_and_clears_staging() {
        let temp = tempdir().unwrap();
        let store = store(temp.path());

        assert!(store.save(&sample_config()));

        let content = fs::read_to_string(store.paths().current_path()).unwrap();
        assert!(content.contains("activePlaylist: b"));
        assert!(!store.paths().staging_path().exists());
    }

    #[test]
    fn test_failed_migration_persist_still_returns_migrated() {
        let temp = tempdir().unwrap();
        write_storage_file(temp.path(), "videourls.yaml", "topLeft: a\n");
        let store = store(temp.path());
        // A directory in the staging file's place makes every save fail
        fs::create_dir_all(store.paths().staging_path()).unwrap();

        let first = store.load_outcome();
        assert!(matches!(first, LoadOutcome::Migrated(_)));
        assert_eq!(first.config().playlists[0].streams.top_left, "a");
        assert!(!store.paths().current_path().exists());

        let second = store.load_outcome();
        assert!(matches!(second, LoadOutcome::Migrated(_)));
        assert_ne!(first.config().active_playlist, second.config().active_playlist);
    }
}
