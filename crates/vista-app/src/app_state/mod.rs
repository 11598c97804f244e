//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the chrome and content webviews, and the
//! navigation widget that ties them together.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::VistaApp;
