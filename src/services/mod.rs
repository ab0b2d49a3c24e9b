// Video Wall Services
// Persistence and playlist operations

mod document;
mod storage_paths;
mod id_generator;
mod legacy_migrator;
mod playlist_store;
mod playlist_factory;
mod active_playlist;
mod playlist_manager;

pub use document::StoreError;
pub use storage_paths::*;
pub use id_generator::*;
pub use legacy_migrator::*;
pub use playlist_store::*;
pub use playlist_factory::*;
pub use active_playlist::*;
pub use playlist_manager::*;
