//! Host window configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vista".into(),
            width: 1280,
            height: 800,
            resizable: true,
        }
    }
}
