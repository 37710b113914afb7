//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, ModifiersState};
use winit::window::WindowId;

use super::core::{TabhostApp, POLL_INTERVAL};

impl ApplicationHandler for TabhostApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_bounds();
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_surface_events();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}

const NEW_TAB_KEY: &str = "t";
const CLOSE_TAB_KEY: &str = "w";

impl TabhostApp {
    /// Primary-modifier shortcuts: sidebar toggle (configurable), new tab, close tab.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed || !primary_modifier(self.modifiers) {
            return;
        }
        let Key::Character(c) = &logical_key else {
            return;
        };

        if c.eq_ignore_ascii_case(&self.config.sidebar.toggle_key) {
            if let Some(window) = self.window_id {
                let delivered = self.router.broadcast_toggle_sidebar(window);
                tracing::debug!(window = %window, delivered, "Sidebar toggle broadcast");
            }
        } else if c.eq_ignore_ascii_case(NEW_TAB_KEY) {
            if let Err(e) = self.open_tab() {
                tracing::warn!("Failed to open tab: {e}");
            }
        } else if c.eq_ignore_ascii_case(CLOSE_TAB_KEY) {
            self.close_active_tab();
        }
    }
}

fn primary_modifier(modifiers: ModifiersState) -> bool {
    if cfg!(target_os = "macos") {
        modifiers.super_key()
    } else {
        modifiers.control_key()
    }
}
