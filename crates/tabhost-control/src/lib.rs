//! Main-process window/tab control plane.
//!
//! Owns the top-level windows, tracks which content surfaces (tabs) belong
//! to which window, and relays named control messages between surfaces and
//! their windows:
//! - `WindowRegistry`: window lifetime and surface ownership
//! - `ControlRouter`: inbound message table and outbound broadcasts
//! - `HostWindow` / `ButtonPlacement`: the window capabilities the router drives
//! - `webview`: `wry`-backed content surfaces and their IPC bridge

pub mod events;
pub mod ipc;
pub mod registry;
pub mod router;
pub mod surface;
pub mod webview;
pub mod window;

#[cfg(test)]
pub(crate) mod test_support;

pub use events::ControlEvent;
pub use ipc::{channels, IpcMessage, IpcPayload};
pub use registry::WindowRegistry;
pub use router::{ControlRouter, Handler};
pub use surface::ContentSurface;
pub use webview::{SurfaceConfig, SurfaceFactory, WebViewSurface};
pub use window::{ButtonPlacement, Capability, HostWindow, TabbedWindow};
