// PlaylistManager Service
// Playlist operations: each one loads, mutates and saves the document

use std::path::Path;
use std::sync::Arc;
use crate::models::{Playlist, PlaylistUpdate, PlaylistsConfig, StreamSettings};
use crate::services::{
    resolve_active, IdGenerator, PlaylistFactory, PlaylistStore, StoragePaths, UuidIdGenerator,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Playlist '{0}' not found")]
    NotFound(String),

    #[error("Failed to save playlists")]
    PersistFailed,
}

pub struct PlaylistManager {
    store: PlaylistStore,
    factory: PlaylistFactory,
}

impl PlaylistManager {
    pub fn new(paths: StoragePaths, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: PlaylistStore::new(paths, ids.clone()),
            factory: PlaylistFactory::new(ids),
        }
    }

    /// Manager for an install root, with random ids
    pub fn for_install_root(install_root: impl AsRef<Path>) -> Self {
        Self::new(StoragePaths::new(install_root), Arc::new(UuidIdGenerator))
    }

    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    pub fn list(&self) -> PlaylistsConfig {
        self.store.load()
    }

    pub fn active(&self) -> Option<Playlist> {
        let config = self.store.load();
        resolve_active(&config).cloned()
    }

    /// Add a playlist. It becomes active if nothing else is.
    pub fn create(
        &self,
        name: &str,
        icon: &str,
        streams: Option<StreamSettings>,
    ) -> Result<Playlist, PlaylistError> {
        if name.is_empty() || icon.is_empty() {
            return Err(PlaylistError::InvalidRequest(
                "Name and icon are required".to_string(),
            ));
        }

        let mut config = self.store.load();
        config.repair_active();

        let playlist = self.factory.create(name, icon, streams);
        config.playlists.push(playlist.clone());
        if config.active_playlist.is_empty() {
            config.active_playlist = playlist.id.clone();
        }

        self.persist(&mut config)?;
        log::info!("Created playlist '{}' ({})", playlist.name, playlist.id);
        Ok(playlist)
    }

    /// Apply the fields present in `update` to a playlist
    pub fn update(&self, id: &str, update: PlaylistUpdate) -> Result<Playlist, PlaylistError> {
        require_id(id)?;

        let mut config = self.store.load();
        let playlist = config
            .find_mut(id)
            .ok_or_else(|| PlaylistError::NotFound(id.to_string()))?;
        update.apply_to(playlist);
        let updated = playlist.clone();

        self.persist(&mut config)?;
        log::info!("Updated playlist '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Remove a playlist. If it was active, the first remaining one takes over.
    pub fn delete(&self, id: &str) -> Result<(), PlaylistError> {
        require_id(id)?;

        let mut config = self.store.load();
        let index = config
            .playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PlaylistError::NotFound(id.to_string()))?;
        config.playlists.remove(index);

        if config.active_playlist == id {
            config.active_playlist = config
                .playlists
                .first()
                .map(|p| p.id.clone())
                .unwrap_or_default();
        }

        self.persist(&mut config)?;
        log::info!("Deleted playlist {id}");
        Ok(())
    }

    pub fn set_active(&self, id: &str) -> Result<(), PlaylistError> {
        if id.is_empty() {
            return Err(PlaylistError::InvalidRequest(
                "activePlaylist is required".to_string(),
            ));
        }

        let mut config = self.store.load();
        if !config.contains(id) {
            return Err(PlaylistError::NotFound(id.to_string()));
        }
        config.active_playlist = id.to_string();

        self.persist(&mut config)?;
        log::info!("Active playlist set to {id}");
        Ok(())
    }

    fn persist(&self, config: &mut PlaylistsConfig) -> Result<(), PlaylistError> {
        config.repair_active();
        if self.store.save(config) {
            Ok(())
        } else {
            Err(PlaylistError::PersistFailed)
        }
    }
}

fn require_id(id: &str) -> Result<(), PlaylistError> {
    if id.is_empty() {
        return Err(PlaylistError::InvalidRequest(
            "Playlist ID is required".to_string(),
        ));
    }
    Ok(())
}
