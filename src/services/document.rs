// Document Helpers
// Reading YAML documents with absent and null fields left to serde defaults

use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Expected a mapping in {}", .path.display())]
    NotAMapping { path: PathBuf },

    #[error("Failed to create storage directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a document and deserialize it.
///
/// An empty or `null` document yields `T::default()`. Keys whose value is
/// `null` are dropped before deserializing, so they take their serde
/// default just like absent keys.
pub(crate) fn read_with_defaults<T>(path: &Path) -> Result<T, StoreError>
where
    T: Default + DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    let mut value: Value = serde_yaml::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Null => return Ok(T::default()),
        Value::Mapping(_) => {}
        _ => {
            return Err(StoreError::NotAMapping {
                path: path.to_path_buf(),
            })
        }
    }

    drop_nulls(&mut value);

    serde_yaml::from_value(value).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Mapping(map) => {
            map.retain(|_, v| !v.is_null());
            for (_, v) in map.iter_mut() {
                drop_nulls(v);
            }
        }
        Value::Sequence(items) => {
            for item in items.iter_mut() {
                drop_nulls(item);
            }
        }
        _ => {}
    }
}
