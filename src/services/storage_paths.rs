// StoragePaths Service
// Fixed on-disk locations of the playlists documents

use std::path::{Path, PathBuf};

const STORAGE_DIR_NAME: &str = "storage";
const PLAYLISTS_FILE_NAME: &str = "playlists.yaml";
const LEGACY_FILE_NAME: &str = "videourls.yaml";
const STAGING_FILE_NAME: &str = ".playlists.yaml.tmp";

/// Locations of the current and legacy documents under an install root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    storage_dir: PathBuf,
    current_path: PathBuf,
    legacy_path: PathBuf,
    staging_path: PathBuf,
}

impl StoragePaths {
    pub fn new(install_root: impl AsRef<Path>) -> Self {
        let storage_dir = install_root.as_ref().join(STORAGE_DIR_NAME);
        Self {
            current_path: storage_dir.join(PLAYLISTS_FILE_NAME),
            legacy_path: storage_dir.join(LEGACY_FILE_NAME),
            staging_path: storage_dir.join(STAGING_FILE_NAME),
            storage_dir,
        }
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Multi-playlist document
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Single-playlist document from before playlists existed
    pub fn legacy_path(&self) -> &Path {
        &self.legacy_path
    }

    /// Scratch file a save writes before renaming over `current_path`
    pub fn staging_path(&self) -> &Path {
        &self.staging_path
    }
}
