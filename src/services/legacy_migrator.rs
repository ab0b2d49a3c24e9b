// LegacyMigrator Service
// Converts the single-playlist videourls document into a playlists config

use std::path::PathBuf;
use std::sync::Arc;
use crate::models::{Playlist, PlaylistsConfig, StreamSettings};
use crate::services::document::read_with_defaults;
use crate::services::IdGenerator;

const MIGRATED_PLAYLIST_NAME: &str = "Default";
const MIGRATED_PLAYLIST_ICON: &str = "tv";

pub struct LegacyMigrator {
    legacy_path: PathBuf,
    ids: Arc<dyn IdGenerator>,
}

impl LegacyMigrator {
    pub fn new(legacy_path: PathBuf, ids: Arc<dyn IdGenerator>) -> Self {
        Self { legacy_path, ids }
    }

    /// Build a one-playlist config from the legacy document.
    ///
    /// Returns `None` when there is no legacy document or it cannot be
    /// parsed. Nothing is written here; the store persists the result.
    pub fn migrate(&self) -> Option<PlaylistsConfig> {
        if !self.legacy_path.exists() {
            return None;
        }

        let streams: StreamSettings = match read_with_defaults(&self.legacy_path) {
            Ok(streams) => streams,
            Err(e) => {
                log::warn!("Failed to migrate legacy settings: {e}");
                return None;
            }
        };

        let playlist_id = self.ids.generate();
        log::info!(
            "Migrated legacy settings from {:?} into playlist '{}'",
            self.legacy_path,
            playlist_id
        );

        Some(PlaylistsConfig {
            active_playlist: playlist_id.clone(),
            playlists: vec![Playlist {
                id: playlist_id,
                name: MIGRATED_PLAYLIST_NAME.to_string(),
                icon: MIGRATED_PLAYLIST_ICON.to_string(),
                streams,
            }],
        })
    }
}
