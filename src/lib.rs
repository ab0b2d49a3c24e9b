// Video Wall Playlists
// Quadrant stream playlist storage and operations

pub mod commands;
pub mod models;
pub mod services;
