//! `winit` windows as control-plane host windows.

use std::sync::Arc;

use winit::window::{Window, WindowButtons};

use tabhost_control::HostWindow;

/// A native window driven by winit.
///
/// winit has no API for moving the chrome buttons, so this host does not
/// advertise `Capability::ButtonPlacement`; position requests for it are
/// dropped by the router. Visibility maps to the enabled title-bar buttons.
pub struct WinitWindow {
    window: Arc<Window>,
    visible: bool,
}

impl WinitWindow {
    pub fn new(window: Arc<Window>, visible: bool) -> Self {
        window.set_enabled_buttons(buttons_for(visible));
        Self { window, visible }
    }
}

impl HostWindow for WinitWindow {
    fn button_visible(&self) -> bool {
        self.visible
    }

    fn set_button_visibility(&mut self, visible: bool) {
        self.visible = visible;
        self.window.set_enabled_buttons(buttons_for(visible));
    }
}

fn buttons_for(visible: bool) -> WindowButtons {
    if visible {
        WindowButtons::all()
    } else {
        WindowButtons::empty()
    }
}
