// Playlist Model
// Named quadrant layouts and the document that holds them

use serde::{Deserialize, Serialize};
use crate::models::StreamSettings;

/// A named set of quadrant streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique identifier, never changed after creation
    pub id: String,

    /// User-friendly name
    #[serde(default)]
    pub name: String,

    /// Icon identifier shown by the UI (e.g., "tv")
    #[serde(default)]
    pub icon: String,

    /// Quadrant stream URLs
    #[serde(default)]
    pub streams: StreamSettings,
}

/// Root of the playlists document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistsConfig {
    /// Id of the playlist currently on the wall, or empty
    #[serde(default)]
    pub active_playlist: String,

    /// Playlists in display order
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl PlaylistsConfig {
    pub fn find(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Point a dangling `active_playlist` at the first playlist, or clear it
    /// when the list is empty. Returns true if the pointer changed.
    pub fn repair_active(&mut self) -> bool {
        if self.active_playlist.is_empty() || self.contains(&self.active_playlist) {
            return false;
        }

        let replacement = self
            .playlists
            .first()
            .map(|p| p.id.clone())
            .unwrap_or_default();
        log::warn!(
            "Active playlist '{}' no longer exists, reassigning to '{}'",
            self.active_playlist,
            replacement
        );
        self.active_playlist = replacement;
        true
    }
}

/// Partial playlist update. Only fields that are present are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Replaces the whole quadrant set when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<StreamSettings>,
}

impl PlaylistUpdate {
    pub fn apply_to(self, playlist: &mut Playlist) {
        if let Some(name) = self.name {
            playlist.name = name;
        }
        if let Some(icon) = self.icon {
            playlist.icon = icon;
        }
        if let Some(streams) = self.streams {
            playlist.streams = streams;
        }
    }
}
