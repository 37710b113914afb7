use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use tabhost_common::SurfaceId;

use crate::events::ControlEvent;
use crate::ipc::IPC_INIT_SCRIPT;

use super::surface::WebViewSurface;
use super::types::SurfaceConfig;
use super::SurfaceFactory;

const BLANK_PAGE: &str = "<html><body></body></html>";

impl SurfaceFactory {
    /// Create a webview surface as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        id: SurfaceId,
        window: &W,
        bounds: wry::Rect,
        config: SurfaceConfig,
    ) -> Result<WebViewSurface, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        let events = Arc::clone(&self.events);
        builder = builder.with_ipc_handler(move |request| {
            queue_ipc(&events, id, request.body());
        });

        builder = if let Some(url) = &config.url {
            builder.with_url(url)
        } else if let Some(html) = &config.html {
            builder.with_html(html)
        } else {
            builder.with_html(BLANK_PAGE)
        };

        let webview = builder.build_as_child(window)?;
        debug!(surface = %id, "webview surface created");

        Ok(WebViewSurface { webview, id })
    }
}

/// Queue an IPC body from `surface`. Bodies that are not JSON never reach the
/// control thread.
pub(super) fn queue_ipc(events: &Mutex<Vec<ControlEvent>>, surface: SurfaceId, body: &str) {
    if serde_json::from_str::<serde_json::Value>(body).is_err() {
        warn!(
            surface = %surface,
            body_len = body.len(),
            "IPC message rejected: invalid JSON"
        );
        return;
    }

    if let Ok(mut evts) = events.lock() {
        evts.push(ControlEvent::Ipc {
            surface,
            body: body.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_is_queued() {
        let factory = SurfaceFactory::new();
        queue_ipc(&factory.events, SurfaceId(1), r#"{"kind":"x","payload":null}"#);
        let events = factory.drain_events();
        assert_eq!(
            events,
            vec![ControlEvent::Ipc {
                surface: SurfaceId(1),
                body: r#"{"kind":"x","payload":null}"#.to_string(),
            }]
        );
    }

    #[test]
    fn invalid_json_is_rejected() {
        let factory = SurfaceFactory::new();
        queue_ipc(&factory.events, SurfaceId(1), "window.close()");
        assert!(factory.drain_events().is_empty());
    }

    #[test]
    fn drain_preserves_arrival_order_and_empties_queue() {
        let factory = SurfaceFactory::new();
        queue_ipc(&factory.events, SurfaceId(1), "1");
        queue_ipc(&factory.events, SurfaceId(2), "2");
        factory.notify_closed(SurfaceId(1));
        queue_ipc(&factory.events, SurfaceId(1), "3");

        let surfaces: Vec<SurfaceId> = factory.drain_events().iter().map(|e| e.surface()).collect();
        assert_eq!(
            surfaces,
            vec![SurfaceId(1), SurfaceId(2), SurfaceId(1), SurfaceId(1)]
        );
        assert!(factory.drain_events().is_empty());
    }
}
