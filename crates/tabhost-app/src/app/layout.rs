//! Surface placement inside the native window.

use tabhost_control::ContentSurface;

use super::core::TabhostApp;

/// A logical-pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn to_wry(self) -> wry::Rect {
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(self.x, self.y)),
            size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(self.width, self.height)),
        }
    }
}

/// Toolbar strip across the top of the window.
pub(super) fn toolbar_bounds(width: f64, height: f64, toolbar_height: f64) -> Bounds {
    Bounds {
        x: 0.0,
        y: 0.0,
        width,
        height: toolbar_height.min(height),
    }
}

/// Tab area below the toolbar.
pub(super) fn tab_bounds(width: f64, height: f64, toolbar_height: f64) -> Bounds {
    let top = toolbar_height.min(height);
    Bounds {
        x: 0.0,
        y: top,
        width,
        height: height - top,
    }
}

impl TabhostApp {
    /// Logical inner size of the native window.
    pub(super) fn logical_size(&self) -> Option<(f64, f64)> {
        let window = self.window.as_ref()?;
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Some((size.width, size.height))
    }

    /// Re-place the toolbar and tabs after a resize.
    pub(super) fn sync_bounds(&self) {
        let Some((width, height)) = self.logical_size() else {
            return;
        };
        let toolbar_height = f64::from(self.config.sidebar.toolbar_height);

        if let Some(toolbar) = &self.toolbar {
            let bounds = toolbar_bounds(width, height, toolbar_height).to_wry();
            if let Err(e) = toolbar.set_bounds(bounds) {
                tracing::warn!(surface = %toolbar.id(), error = %e, "Failed to resize toolbar");
            }
        }

        let bounds = tab_bounds(width, height, toolbar_height).to_wry();
        for tab in &self.tabs {
            if let Err(e) = tab.set_bounds(bounds) {
                tracing::warn!(surface = %tab.id(), error = %e, "Failed to resize tab");
            }
        }
    }
}
