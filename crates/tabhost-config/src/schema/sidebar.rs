//! Sidebar and toolbar layout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Key that, together with the primary modifier, toggles the sidebar of
    /// the focused window. A single character.
    pub toggle_key: String,
    /// Height of the toolbar surface above the tabs (valid range: 0-200).
    pub toolbar_height: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            toggle_key: "b".into(),
            toolbar_height: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_defaults() {
        let config = SidebarConfig::default();
        assert_eq!(config.toggle_key, "b");
        assert_eq!(config.toolbar_height, 40);
    }

    #[test]
    fn sidebar_partial_toml() {
        let config: SidebarConfig = toml::from_str("toggle_key = \"s\"").unwrap();
        assert_eq!(config.toggle_key, "s");
        assert_eq!(config.toolbar_height, 40);
    }
}
