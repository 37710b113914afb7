//! Window creation and initial surface setup.

use std::rc::Rc;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use tabhost_common::{assert_not_null, SurfaceId, TabhostError};
use tabhost_control::{ContentSurface, SurfaceConfig};

use super::core::TabhostApp;
use super::host_window::WinitWindow;
use super::layout::{tab_bounds, toolbar_bounds};
use super::pages::{TAB_HTML, TOOLBAR_HTML};

impl TabhostApp {
    /// Create the native window and register it with the control plane.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let host = WinitWindow::new(Arc::clone(&window), self.config.window.button_visible);
        let id = self.router.create_window(Box::new(host));
        self.window = Some(window);
        self.window_id = Some(id);
        tracing::info!(window = %id, "Window created");

        if let Err(e) = self.open_initial_surfaces() {
            tracing::error!("Failed to open initial surfaces: {e}");
            return false;
        }
        true
    }

    /// Host the toolbar (chrome surface) and one tab in the current window.
    fn open_initial_surfaces(&mut self) -> Result<(), TabhostError> {
        let window = assert_not_null(self.window.clone(), "native window not created")?;
        let window_id = assert_not_null(self.window_id, "window not registered")?;
        let (width, height) = assert_not_null(self.logical_size(), "window has no size")?;
        let toolbar_height = f64::from(self.config.sidebar.toolbar_height);

        let toolbar_id = self.next_surface_id();
        let toolbar = self
            .factory
            .create(
                toolbar_id,
                &*window,
                toolbar_bounds(width, height, toolbar_height).to_wry(),
                SurfaceConfig::with_html(TOOLBAR_HTML),
            )
            .map(Rc::new)
            .map_err(|e| TabhostError::Window(e.to_string()))?;
        self.router
            .open_chrome_surface(window_id, Box::new(Rc::clone(&toolbar)))?;
        self.toolbar = Some(toolbar);

        let tab_id = self.open_tab()?;

        tracing::info!(window = %window_id, toolbar = %toolbar_id, tab = %tab_id, "Surfaces opened");
        Ok(())
    }

    /// Open a new tab page below the toolbar. The newest tab is the active one.
    pub(super) fn open_tab(&mut self) -> Result<SurfaceId, TabhostError> {
        let window = assert_not_null(self.window.clone(), "native window not created")?;
        let window_id = assert_not_null(self.window_id, "window not registered")?;
        let (width, height) = assert_not_null(self.logical_size(), "window has no size")?;
        let toolbar_height = f64::from(self.config.sidebar.toolbar_height);

        let tab_id = self.next_surface_id();
        let tab = self
            .factory
            .create(
                tab_id,
                &*window,
                tab_bounds(width, height, toolbar_height).to_wry(),
                SurfaceConfig::with_html(TAB_HTML),
            )
            .map(Rc::new)
            .map_err(|e| TabhostError::Window(e.to_string()))?;
        self.router.open_tab(window_id, Box::new(Rc::clone(&tab)))?;
        self.tabs.push(tab);
        Ok(tab_id)
    }

    /// Close the active tab. The router drops its handle when the queued
    /// close event is drained.
    pub(super) fn close_active_tab(&mut self) {
        let Some(tab) = self.tabs.pop() else {
            return;
        };
        let id = tab.id();
        self.factory.notify_closed(id);
        tracing::info!(surface = %id, "Tab closed");
    }
}
