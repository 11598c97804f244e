//! WebView bridge for the preview window.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances for the chrome panel and the content sandbox
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A `NavigationSandbox` implementation over a content WebView
//! - The generated chrome panel (toolbar, URL selector, loading overlay)

pub mod chrome;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod sandbox;

pub use chrome::ChromePanel;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use sandbox::{ContentLoads, HistoryReport, LoadTracker, WrySandbox};
