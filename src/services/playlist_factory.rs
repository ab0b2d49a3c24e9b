// PlaylistFactory Service
// Builds new playlist records with fresh ids

use std::sync::Arc;
use crate::models::{Playlist, StreamSettings};
use crate::services::IdGenerator;

pub struct PlaylistFactory {
    ids: Arc<dyn IdGenerator>,
}

impl PlaylistFactory {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Create a playlist with a new id. Streams default to empty quadrants.
    /// The result is not stored and does not change the active playlist.
    pub fn create(&self, name: &str, icon: &str, streams: Option<StreamSettings>) -> Playlist {
        Playlist {
            id: self.ids.generate(),
            name: name.to_string(),
            icon: icon.to_string(),
            streams: streams.unwrap_or_default(),
        }
    }
}
