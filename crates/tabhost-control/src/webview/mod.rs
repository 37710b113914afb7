//! `wry`-backed content surfaces.
//!
//! `SurfaceFactory` builds one `wry::WebView` per surface as a child of a
//! native window, installs the IPC bridge, and queues inbound messages for
//! the control thread to drain.

use std::sync::{Arc, Mutex};

use crate::events::ControlEvent;

mod factory;
mod surface;
mod types;

pub use surface::WebViewSurface;
pub use types::SurfaceConfig;

/// Creates webview surfaces and collects their inbound events.
pub struct SurfaceFactory {
    /// Event sink. IPC callbacks push here and the control thread drains it.
    pub(crate) events: Arc<Mutex<Vec<ControlEvent>>>,
}

impl SurfaceFactory {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events in arrival order.
    pub fn drain_events(&self) -> Vec<ControlEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Queue a teardown notice for a surface the host has destroyed.
    pub fn notify_closed(&self, surface: tabhost_common::SurfaceId) {
        if let Ok(mut events) = self.events.lock() {
            events.push(ControlEvent::Closed { surface });
        }
    }
}

impl Default for SurfaceFactory {
    fn default() -> Self {
        Self::new()
    }
}
