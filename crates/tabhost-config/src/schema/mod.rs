//! Configuration schema types for Tabhost.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod sidebar;
mod system;
mod window;

pub use sidebar::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tabhost.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabhostConfig {
    pub window: WindowConfig,
    pub sidebar: SidebarConfig,
    pub extension: ExtensionConfig,
    pub logging: LoggingConfig,
}
