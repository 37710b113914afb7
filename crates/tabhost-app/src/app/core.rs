use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use winit::keyboard::ModifiersState;
use winit::window::Window;

use tabhost_common::{ExtensionContext, SurfaceId, WindowId};
use tabhost_config::TabhostConfig;
use tabhost_control::{ControlRouter, SurfaceFactory, WebViewSurface};

/// How often queued surface events are drained while idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct TabhostApp {
    pub(super) config: TabhostConfig,
    pub(super) router: ControlRouter,
    pub(super) factory: SurfaceFactory,
    pub(super) window: Option<Arc<Window>>,
    /// Registry handle of the native window.
    pub(super) window_id: Option<WindowId>,
    pub(super) toolbar: Option<Rc<WebViewSurface>>,
    pub(super) tabs: Vec<Rc<WebViewSurface>>,
    pub(super) next_surface: u32,
    pub(super) modifiers: ModifiersState,
    pub(super) should_exit: bool,
}

impl TabhostApp {
    pub fn new(config: TabhostConfig, extension: ExtensionContext) -> Self {
        Self {
            config,
            router: ControlRouter::new(extension),
            factory: SurfaceFactory::new(),
            window: None,
            window_id: None,
            toolbar: None,
            tabs: Vec::new(),
            next_surface: 0,
            modifiers: ModifiersState::empty(),
            should_exit: false,
        }
    }

    pub(super) fn next_surface_id(&mut self) -> SurfaceId {
        self.next_surface += 1;
        SurfaceId(self.next_surface)
    }

    /// Apply every queued surface event in arrival order.
    pub(super) fn poll_surface_events(&mut self) {
        let events = self.factory.drain_events();
        if !events.is_empty() {
            self.router.process_all(events);
        }
    }

    /// Close the window: cascade in the registry, then drop the webviews.
    pub(super) fn shutdown(&mut self) {
        if let Some(id) = self.window_id.take() {
            self.router.destroy_window(id);
        }
        self.router.shutdown();
        self.tabs.clear();
        self.toolbar = None;
        self.window = None;
        self.should_exit = true;
    }
}
