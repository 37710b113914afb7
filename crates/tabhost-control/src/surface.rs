//! Content surfaces: the tabs and panes hosted inside a window.

use tabhost_common::{ControlError, SurfaceId};

/// The outbound side of a content surface.
///
/// `send` is one-way. An error means the surface could not take the
/// message (typically because it is already being torn down).
pub trait ContentSurface {
    fn id(&self) -> SurfaceId;

    fn send(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ControlError>;
}

/// Shared handles: the host keeps one for layout, the router another for messaging.
impl<T: ContentSurface + ?Sized> ContentSurface for std::rc::Rc<T> {
    fn id(&self) -> SurfaceId {
        (**self).id()
    }

    fn send(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ControlError> {
        (**self).send(kind, payload)
    }
}
