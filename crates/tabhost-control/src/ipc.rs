//! IPC protocol between the control plane and content surfaces.
//!
//! Messages are one-way in both directions:
//! - **Surface -> control plane**: page script calls
//!   `window.tabhost.ipc.send(kind, payload)`, which posts
//!   `{"kind": ..., "payload": ...}` through the webview IPC handler.
//! - **Control plane -> surface**: the control plane evaluates
//!   `window.tabhost.ipc._dispatch(kind, payload)` inside the surface.
//!
//! There is no acknowledgment channel. A request/response pair would need
//! its own channel names rather than reusing these.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Channel names understood by the control plane.
pub mod channels {
    /// Inbound: `{x, y}`, applied to the sender's host window if it supports placement.
    pub const SET_BUTTON_POSITION: &str = "window-button:set-position";
    /// Inbound: `bool`, applied to the window that owns the sender.
    pub const SET_BUTTON_VISIBILITY: &str = "window-button:set-visibility";
    /// Outbound: no payload, sent to every surface of a window.
    pub const SIDEBAR_ON_TOGGLE: &str = "sidebar:on-toggle";
}

/// A named control message from a surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The channel name.
    pub kind: String,
    /// The message payload. Absent payloads deserialize as `IpcPayload::None`.
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    /// Decode the payload into a typed value, or `None` if it has the wrong shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Option<T> {
        let value = match self {
            Self::Text(text) => serde_json::Value::String(text.clone()),
            Self::Json(value) => value.clone(),
            Self::None => serde_json::Value::Null,
        };
        serde_json::from_value(value).ok()
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from page `postMessage`).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    /// Serialize for posting from a test page or fixture.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// JavaScript snippet that sets up the IPC bridge inside every surface.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.tabhost = window.tabhost || {};
    window.tabhost.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        // Listeners registered by page code for messages from the control plane
        _handlers: {},
        on: function(kind, callback) {
            (this._handlers[kind] = this._handlers[kind] || []).push(callback);
        },
        _dispatch: function(kind, payload) {
            var handlers = this._handlers[kind] || [];
            for (var i = 0; i < handlers.length; i++) {
                handlers[i](payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the page-side listeners.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.tabhost.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
