//! Control-plane message router.
//!
//! Inbound: named messages from content surfaces are looked up in a handler
//! table and applied to the sender's window. Every miss (bad envelope,
//! unknown kind, wrong payload shape, no owning window, missing capability)
//! is dropped without a reply; surfaces may be mid-teardown when they send.
//!
//! Outbound: one-way notifications to every surface of a window.

use std::collections::HashMap;

use tracing::debug;

use tabhost_common::{ControlError, Event, EventBus, ExtensionContext, SurfaceId, WindowId};

use crate::events::ControlEvent;
use crate::ipc::{channels, IpcMessage, IpcPayload};
use crate::registry::WindowRegistry;
use crate::surface::ContentSurface;
use crate::window::HostWindow;

mod handlers;


/// An inbound message handler. Fire-and-forget: nothing is returned to the sender.
pub type Handler = fn(&mut ControlRouter, SurfaceId, &IpcPayload);

/// Owns the window registry and the live surface handles, and routes
/// control messages between them. Runs on the control thread only.
pub struct ControlRouter {
    registry: WindowRegistry,
    surfaces: HashMap<SurfaceId, Box<dyn ContentSurface>>,
    extension: ExtensionContext,
    events: EventBus,
    handlers: HashMap<String, Handler>,
}

impl ControlRouter {
    /// Create a router with the built-in window-button handlers installed.
    pub fn new(extension: ExtensionContext) -> Self {
        let mut router = Self {
            registry: WindowRegistry::new(),
            surfaces: HashMap::new(),
            extension,
            events: EventBus::default(),
            handlers: HashMap::new(),
        };
        router.register_handler(channels::SET_BUTTON_POSITION, handlers::set_button_position);
        router.register_handler(
            channels::SET_BUTTON_VISIBILITY,
            handlers::set_button_visibility,
        );
        router
    }

    /// Install (or replace) the handler for `kind`. Returns the previous one.
    pub fn register_handler(&mut self, kind: impl Into<String>, handler: Handler) -> Option<Handler> {
        self.handlers.insert(kind.into(), handler)
    }

    pub fn handles(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn extension(&self) -> &ExtensionContext {
        &self.extension
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Lifecycle events for observers.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // -- Window and surface lifecycle --

    pub fn create_window(&mut self, host: Box<dyn HostWindow>) -> WindowId {
        let id = self.registry.create_window(host);
        self.events.publish(Event::WindowCreated(id));
        id
    }

    /// Destroy a window together with every surface inside it.
    pub fn destroy_window(&mut self, window: WindowId) -> bool {
        let Some(surfaces) = self.registry.destroy_window(window) else {
            return false;
        };
        for surface in surfaces {
            self.surfaces.remove(&surface);
            self.events.publish(Event::SurfaceUnregistered(surface));
        }
        self.events.publish(Event::WindowDestroyed(window));
        true
    }

    /// Open a tab: register the surface under `window` and keep its handle.
    pub fn open_tab(
        &mut self,
        window: WindowId,
        surface: Box<dyn ContentSurface>,
    ) -> Result<SurfaceId, ControlError> {
        let id = surface.id();
        if !self.registry.register_surface(window, id) {
            return Err(ControlError::UnknownWindow(window));
        }
        self.surfaces.insert(id, surface);
        self.events.publish(Event::SurfaceRegistered {
            window,
            surface: id,
        });
        debug!(window = %window, surface = %id, "tab opened");
        Ok(id)
    }

    /// Place a non-tab surface (toolbar, overlay) inside `window`.
    ///
    /// It can reach its host window but is not part of the surface set, so
    /// it does not receive window broadcasts.
    pub fn open_chrome_surface(
        &mut self,
        window: WindowId,
        surface: Box<dyn ContentSurface>,
    ) -> Result<SurfaceId, ControlError> {
        let id = surface.id();
        if !self.registry.attach_surface(window, id) {
            return Err(ControlError::UnknownWindow(window));
        }
        self.surfaces.insert(id, surface);
        debug!(window = %window, surface = %id, "chrome surface attached");
        Ok(id)
    }

    /// Tear down a surface. No-op if it is already gone.
    pub fn close_surface(&mut self, surface: SurfaceId) -> bool {
        let had_handle = self.surfaces.remove(&surface).is_some();
        let was_placed = self.registry.detach_surface(surface).is_some();
        if had_handle || was_placed {
            self.events.publish(Event::SurfaceUnregistered(surface));
            debug!(surface = %surface, "surface closed");
        }
        had_handle || was_placed
    }

    /// Destroy every window. Used during graceful shutdown.
    pub fn shutdown(&mut self) {
        for window in self.registry.window_ids() {
            self.destroy_window(window);
        }
        self.surfaces.clear();
        self.events.publish(Event::Shutdown);
    }

    // -- Inbound --

    /// Handle one raw IPC body from `sender`.
    pub fn dispatch(&mut self, sender: SurfaceId, body: &str) {
        match IpcMessage::from_json(body) {
            Some(msg) => self.handle(sender, &msg),
            None => {
                debug!(
                    surface = %sender,
                    body_len = body.len(),
                    "control message dropped: bad envelope"
                );
            }
        }
    }

    /// Run the handler registered for `msg.kind`, if any.
    pub fn handle(&mut self, sender: SurfaceId, msg: &IpcMessage) {
        let Some(handler) = self.handlers.get(msg.kind.as_str()).copied() else {
            debug!(surface = %sender, kind = %msg.kind, "control message dropped: unknown kind");
            return;
        };
        tracing::trace!(surface = %sender, kind = %msg.kind, "control message");
        handler(self, sender, &msg.payload);
    }

    /// Apply one queued surface event.
    pub fn process(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Ipc { surface, body } => self.dispatch(surface, &body),
            ControlEvent::Closed { surface } => {
                self.close_surface(surface);
            }
        }
    }

    /// Apply queued events in arrival order.
    pub fn process_all(&mut self, events: impl IntoIterator<Item = ControlEvent>) {
        for event in events {
            self.process(event);
        }
    }

    // -- Outbound --

    /// Send `kind` to every surface registered under `window` at call time.
    ///
    /// Surfaces that are gone or refuse the message are skipped. Returns the
    /// number of surfaces that took it.
    pub fn broadcast(&self, window: WindowId, kind: &str, payload: &serde_json::Value) -> usize {
        let targets = self.registry.all_surfaces_of(window);
        let mut delivered = 0;
        for id in targets {
            let Some(surface) = self.surfaces.get(&id) else {
                continue;
            };
            match surface.send(kind, payload) {
                Ok(()) => delivered += 1,
                Err(e) => debug!(surface = %id, kind, error = %e, "broadcast skipped surface"),
            }
        }
        delivered
    }

    /// Tell every surface of `window` to toggle its sidebar.
    pub fn broadcast_toggle_sidebar(&self, window: WindowId) -> usize {
        let delivered = self.broadcast(
            window,
            channels::SIDEBAR_ON_TOGGLE,
            &serde_json::Value::Null,
        );
        self.events.publish(Event::SidebarToggled { window, delivered });
        delivered
    }
}
