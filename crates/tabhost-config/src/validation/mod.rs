//! Full configuration validation.
//!
//! Each check pushes a message; all messages are joined into a single
//! `ConfigError`.

mod helpers;


use std::sync::OnceLock;

use regex::Regex;

use crate::schema::TabhostConfig;
use tabhost_common::ConfigError;

use helpers::validate_range;

/// Browser extension ids: 32 characters drawn from `a`-`p`.
fn extension_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-p]{32}$").expect("static pattern is valid"))
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TabhostConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "window.width", config.window.width, 200, 10_000);
    validate_range(&mut errors, "window.height", config.window.height, 200, 10_000);
    validate_range(
        &mut errors,
        "sidebar.toolbar_height",
        config.sidebar.toolbar_height,
        0,
        200,
    );

    if config.sidebar.toggle_key.chars().count() != 1 {
        errors.push(format!(
            "sidebar.toggle_key = {:?} must be a single character",
            config.sidebar.toggle_key
        ));
    }

    if let Some(id) = &config.extension.webui_id {
        if !extension_id_pattern().is_match(id) {
            errors.push(format!(
                "extension.webui_id = {id:?} is not a valid extension id"
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
