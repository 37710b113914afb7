//! System configuration types: UI extension identity and logging.

use serde::{Deserialize, Serialize};

use tabhost_common::ExtensionContext;

/// UI extension settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Id of the extension that provides the browser UI, if any.
    pub webui_id: Option<String>,
}

impl ExtensionConfig {
    /// Build the context handed to the control plane at startup.
    pub fn context(&self) -> ExtensionContext {
        let mut ctx = ExtensionContext::new();
        if let Some(id) = &self.webui_id {
            ctx.set_extension_id(id.clone());
        }
        ctx
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "tabhost=trace",
            LogLevel::Debug => "tabhost=debug",
            LogLevel::Info => "tabhost=info",
            LogLevel::Warn => "tabhost=warn",
            LogLevel::Error => "tabhost=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
