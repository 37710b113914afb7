//! Tabhost configuration system.
//!
//! TOML-based configuration with validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabhost_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TabhostConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use tabhost_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented template on first run. The result is
/// validated; a file that parses but fails validation is rejected here.
pub fn load_config(path: Option<&Path>) -> Result<TabhostConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TabhostConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
