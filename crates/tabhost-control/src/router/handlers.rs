//! Built-in inbound handlers.
//!
//! Both handlers drop the message on any miss. They differ in how they find
//! the window: position goes to whichever native window contains the sender,
//! visibility only to the window that has the sender as a registered tab.

use tabhost_common::{ButtonPosition, SurfaceId};

use crate::ipc::IpcPayload;

use super::ControlRouter;

/// `window-button:set-position` `{x, y}`
pub(super) fn set_button_position(router: &mut ControlRouter, sender: SurfaceId, payload: &IpcPayload) {
    let Some(position) = payload.parse::<ButtonPosition>() else {
        return;
    };
    if let Some(window) = router.registry.resolve_host_window_mut(sender) {
        // Hosts without placement ignore it.
        window.set_button_position(position);
    }
}

/// `window-button:set-visibility` `bool`
pub(super) fn set_button_visibility(router: &mut ControlRouter, sender: SurfaceId, payload: &IpcPayload) {
    let Some(visible) = payload.parse::<bool>() else {
        return;
    };
    if let Some(window) = router.registry.resolve_window_for_surface_mut(sender) {
        window.set_button_visibility(visible);
    }
}
