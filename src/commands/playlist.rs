// Playlist Commands
// Maps command names and JSON payloads onto PlaylistManager calls

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use crate::models::{PlaylistUpdate, StreamSettings};
use crate::services::{PlaylistError, PlaylistManager};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),
}

impl CommandError {
    /// Stable category for callers that map outcomes to responses
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_)
            | CommandError::InvalidArgument(_)
            | CommandError::Playlist(PlaylistError::InvalidRequest(_)) => "invalid_request",
            CommandError::Playlist(PlaylistError::NotFound(_)) => "not_found",
            CommandError::Playlist(PlaylistError::PersistFailed) => "persist_failed",
        }
    }
}

pub fn invoke_command(
    manager: &PlaylistManager,
    command: &str,
    payload: &Value,
) -> Result<Value, CommandError> {
    match command {
        "list_playlists" => Ok(json!(manager.list())),
        "get_active_playlist" => Ok(json!(manager.active())),
        "create_playlist" => {
            let name: String = get_arg(payload, "name")?;
            let icon: String = get_arg(payload, "icon")?;
            let streams: Option<StreamSettings> = get_opt_arg(payload, "streams")?;
            let playlist = manager.create(&name, &icon, streams)?;
            Ok(json!(playlist))
        }
        "update_playlist" => {
            let id: String = get_arg(payload, "id")?;
            let update = PlaylistUpdate {
                name: get_opt_arg(payload, "name")?,
                icon: get_opt_arg(payload, "icon")?,
                streams: get_opt_arg(payload, "streams")?,
            };
            let playlist = manager.update(&id, update)?;
            Ok(json!(playlist))
        }
        "delete_playlist" => {
            let id: String = get_arg(payload, "id")?;
            manager.delete(&id)?;
            Ok(Value::Null)
        }
        "set_active_playlist" => {
            let id: String = get_arg(payload, "activePlaylist")?;
            manager.set_active(&id)?;
            Ok(Value::Null)
        }
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn get_arg<T: DeserializeOwned>(payload: &Value, key: &str) -> Result<T, CommandError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| CommandError::InvalidArgument("Invalid payload".to_string()))?;
    let value = obj
        .get(key)
        .ok_or_else(|| CommandError::InvalidArgument(format!("Missing argument: {key}")))?;
    serde_json::from_value(value.clone())
        .map_err(|e| CommandError::InvalidArgument(format!("Invalid {key}: {e}")))
}

fn get_opt_arg<T: DeserializeOwned>(payload: &Value, key: &str) -> Result<Option<T>, CommandError> {
    let obj = match payload.as_object() {
        Some(obj) => obj,
        None if payload.is_null() => return Ok(None),
        None => return Err(CommandError::InvalidArgument("Invalid payload".to_string())),
    };
    let value = match obj.get(key) {
        Some(value) => value.clone(),
        None => return Ok(None),
    };

    if value.is_null() {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| CommandError::InvalidArgument(format!("Invalid {key}: {e}")))
}
