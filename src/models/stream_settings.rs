// StreamSettings Model
// The four quadrant stream URLs shown on the wall

use serde::{Deserialize, Serialize};

/// Stream URLs for each quadrant of the display wall.
///
/// Missing keys read as empty strings, so a partially filled document
/// always yields all four quadrants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamSettings {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl StreamSettings {
    /// Quadrant URLs in reading order (top-left first)
    pub fn quadrants(&self) -> [&str; 4] {
        [
            self.top_left.as_str(),
            self.top_right.as_str(),
            self.bottom_left.as_str(),
            self.bottom_right.as_str(),
        ]
    }

    /// True when no quadrant has a stream assigned
    pub fn is_empty(&self) -> bool {
        self.quadrants().iter().all(|url| url.is_empty())
    }
}
