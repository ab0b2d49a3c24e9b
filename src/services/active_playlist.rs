// Active playlist lookup

use crate::models::{Playlist, PlaylistsConfig};

/// Find the playlist `active_playlist` points at. A dangling or empty
/// pointer yields `None`; nothing is repaired here.
pub fn resolve_active(config: &PlaylistsConfig) -> Option<&Playlist> {
    if config.active_playlist.is_empty() {
        return None;
    }
    config.find(&config.active_playlist)
}
