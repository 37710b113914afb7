use wry::WebView;

use tabhost_common::{ControlError, SurfaceId};

use crate::surface::ContentSurface;

/// A content surface rendered by a `wry::WebView`.
pub struct WebViewSurface {
    pub(super) webview: WebView,
    pub(super) id: SurfaceId,
}

impl WebViewSurface {
    /// Set the surface bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}

impl ContentSurface for WebViewSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn send(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ControlError> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview
            .evaluate_script(&script)
            .map_err(|e| ControlError::WebView(e.to_string()))
    }
}
