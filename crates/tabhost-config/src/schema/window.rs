//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Top-level window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-10000).
    pub height: u32,
    /// Whether the native chrome buttons start out visible.
    pub button_visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tabhost".into(),
            width: 1280,
            height: 800,
            button_visible: true,
        }
    }
}
