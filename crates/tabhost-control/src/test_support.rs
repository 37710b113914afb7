//! In-memory windows and surfaces for exercising the control plane.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tabhost_common::{ButtonPosition, ControlError, SurfaceId};

use crate::surface::ContentSurface;
use crate::window::{ButtonPlacement, Capability, HostWindow};

#[derive(Default)]
struct WindowLog {
    visibility: Vec<bool>,
    positions: Vec<ButtonPosition>,
}

/// Read side of a test window, kept by the test after the window is boxed.
#[derive(Clone, Default)]
pub struct WindowProbe(Rc<RefCell<WindowLog>>);

impl WindowProbe {
    pub fn visibility_calls(&self) -> Vec<bool> {
        self.0.borrow().visibility.clone()
    }

    pub fn positions(&self) -> Vec<ButtonPosition> {
        self.0.borrow().positions.clone()
    }
}

/// A host window without button placement.
pub struct FixedWindow {
    visible: bool,
    log: WindowProbe,
}

impl FixedWindow {
    pub fn new(visible: bool) -> (Self, WindowProbe) {
        let log = WindowProbe::default();
        (
            Self {
                visible,
                log: log.clone(),
            },
            log,
        )
    }
}

impl HostWindow for FixedWindow {
    fn button_visible(&self) -> bool {
        self.visible
    }

    fn set_button_visibility(&mut self, visible: bool) {
        self.visible = visible;
        self.log.0.borrow_mut().visibility.push(visible);
    }
}

/// A host window that supports button placement.
pub struct PlacementWindow {
    visible: bool,
    log: WindowProbe,
}

impl PlacementWindow {
    pub fn new() -> (Self, WindowProbe) {
        let log = WindowProbe::default();
        (
            Self {
                visible: true,
                log: log.clone(),
            },
            log,
        )
    }
}

impl ButtonPlacement for PlacementWindow {
    fn set_button_position(&mut self, position: ButtonPosition) {
        self.log.0.borrow_mut().positions.push(position);
    }
}

impl HostWindow for PlacementWindow {
    fn button_visible(&self) -> bool {
        self.visible
    }

    fn set_button_visibility(&mut self, visible: bool) {
        self.visible = visible;
        self.log.0.borrow_mut().visibility.push(visible);
    }

    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::ButtonPlacement)
    }

    fn button_placement(&mut self) -> Option<&mut dyn ButtonPlacement> {
        Some(self)
    }
}

/// Read side of a test surface.
#[derive(Clone, Default)]
pub struct SurfaceProbe {
    received: Rc<RefCell<Vec<(String, serde_json::Value)>>>,
    closed: Rc<Cell<bool>>,
}

impl SurfaceProbe {
    pub fn received(&self) -> Vec<(String, serde_json::Value)> {
        self.received.borrow().clone()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.received.borrow().iter().filter(|(k, _)| k == kind).count()
    }

    /// Simulate the renderer going away while its handle is still held.
    pub fn close(&self) {
        self.closed.set(true);
    }
}

/// A surface that records everything sent to it.
pub struct RecordingSurface {
    id: SurfaceId,
    probe: SurfaceProbe,
}

impl RecordingSurface {
    pub fn new(id: u32) -> (Box<dyn ContentSurface>, SurfaceProbe) {
        let probe = SurfaceProbe::default();
        let surface = Self {
            id: SurfaceId(id),
            probe: probe.clone(),
        };
        (Box::new(surface), probe)
    }
}

impl ContentSurface for RecordingSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn send(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ControlError> {
        if self.probe.closed.get() {
            return Err(ControlError::SurfaceClosed(self.id));
        }
        self.probe
            .received
            .borrow_mut()
            .push((kind.to_string(), payload.clone()));
        Ok(())
    }
}
