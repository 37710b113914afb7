//! Events queued by content surfaces for the control thread.

use tabhost_common::SurfaceId;

#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// A raw IPC body received from a surface. Already checked to be JSON.
    Ipc { surface: SurfaceId, body: String },
    /// The surface was torn down by the host.
    Closed { surface: SurfaceId },
}

impl ControlEvent {
    pub fn surface(&self) -> SurfaceId {
        match self {
            Self::Ipc { surface, .. } | Self::Closed { surface } => *surface,
        }
    }
}
