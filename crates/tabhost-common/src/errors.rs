use std::path::PathBuf;

use crate::types::{SurfaceId, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("{0}")]
    NullValue(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("surface closed: {0}")]
    SurfaceClosed(SurfaceId),

    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    #[error("webview error: {0}")]
    WebView(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TabhostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Common(#[from] CommonError),

    #[error(transparent)]
    Control(#[from] ControlError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("{0}")]
    Other(String),
}
