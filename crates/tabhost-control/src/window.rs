//! Top-level windows and the capabilities the control plane drives on them.

use std::fmt;

use tabhost_common::{ButtonPosition, SurfaceId, WindowId};

/// Optional behaviors a host window implementation may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Moving the native chrome buttons (e.g. macOS traffic lights).
    ButtonPlacement,
}

/// Native chrome-button placement.
pub trait ButtonPlacement {
    fn set_button_position(&mut self, position: ButtonPosition);
}

/// The native side of a top-level window.
///
/// Implementations vary by platform. Optional behaviors are advertised
/// through [`HostWindow::supports`] and reached through their accessor;
/// the defaults advertise nothing.
pub trait HostWindow {
    /// Chrome-button visibility as decided by the host when the window opened.
    fn button_visible(&self) -> bool;

    fn set_button_visibility(&mut self, visible: bool);

    fn supports(&self, capability: Capability) -> bool {
        let _ = capability;
        false
    }

    fn button_placement(&mut self) -> Option<&mut dyn ButtonPlacement> {
        None
    }
}

/// A registered top-level window: the host window plus the chrome state and
/// content surfaces the control plane tracks for it.
pub struct TabbedWindow {
    id: WindowId,
    host: Box<dyn HostWindow>,
    button_visible: bool,
    button_position: Option<ButtonPosition>,
    /// Registered ("core") surfaces in registration order.
    pub(crate) surfaces: Vec<SurfaceId>,
}

impl TabbedWindow {
    pub(crate) fn new(id: WindowId, host: Box<dyn HostWindow>) -> Self {
        let button_visible = host.button_visible();
        Self {
            id,
            host,
            button_visible,
            button_position: None,
            surfaces: Vec::new(),
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn button_visible(&self) -> bool {
        self.button_visible
    }

    /// Last applied chrome-button position; `None` until first configured.
    pub fn button_position(&self) -> Option<ButtonPosition> {
        self.button_position
    }

    /// Registered surfaces in registration order.
    pub fn surfaces(&self) -> &[SurfaceId] {
        &self.surfaces
    }

    pub fn hosts(&self, surface: SurfaceId) -> bool {
        self.surfaces.contains(&surface)
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.host.supports(capability)
    }

    pub(crate) fn set_button_visibility(&mut self, visible: bool) {
        self.button_visible = visible;
        self.host.set_button_visibility(visible);
    }

    /// Apply `position` if the host supports placement. Returns whether it did.
    pub(crate) fn set_button_position(&mut self, position: ButtonPosition) -> bool {
        if !self.host.supports(Capability::ButtonPlacement) {
            return false;
        }
        match self.host.button_placement() {
            Some(placement) => {
                placement.set_button_position(position);
                self.button_position = Some(position);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TabbedWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabbedWindow")
            .field("id", &self.id)
            .field("button_visible", &self.button_visible)
            .field("button_position", &self.button_position)
            .field("surfaces", &self.surfaces)
            .finish()
    }
}
