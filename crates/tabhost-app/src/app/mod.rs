//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Opens the native window, hosts the toolbar and tab surfaces,
//! and feeds their IPC into the control router.

mod core;
mod event_handler;
mod host_window;
mod init;
mod layout;
mod pages;

pub use core::TabhostApp;
