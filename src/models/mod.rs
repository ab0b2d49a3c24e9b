// Video Wall Models
// Data structures persisted in the playlists document

mod stream_settings;
mod playlist;

pub use stream_settings::*;
pub use playlist::*;
