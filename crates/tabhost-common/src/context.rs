//! Process-wide identity of the active UI extension.
//!
//! Held as a plain value and handed to the components that need it at
//! construction time. It is set once during startup and read afterwards;
//! every reader must handle the unset case.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionContext {
    extension_id: Option<String>,
}

impl ExtensionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension_id(id: impl Into<String>) -> Self {
        Self {
            extension_id: Some(id.into()),
        }
    }

    /// The active UI extension id, if one has been set.
    pub fn extension_id(&self) -> Option<&str> {
        self.extension_id.as_deref()
    }

    /// Record the active UI extension id. Last write wins.
    pub fn set_extension_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(previous) = &self.extension_id {
            if *previous != id {
                tracing::debug!(%previous, next = %id, "UI extension id replaced");
            }
        }
        self.extension_id = Some(id);
    }
}
