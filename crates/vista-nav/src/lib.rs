//! Navigation state for the embedded browser preview.
//!
//! [`EmbeddedBrowserWidget`] owns the session state (current URL, loading
//! flag, back/forward availability) and reacts synchronously to user
//! actions and sandbox load notifications. The browsing context itself is
//! reached only through the [`NavigationSandbox`] trait, and the "open in a
//! new window" command through [`HostEnvironment`], so the whole state
//! machine runs without a real webview.
//!
//! [`ChromeView`] turns a widget into the serialisable model the chrome
//! panel renders.

pub mod config;
pub mod sandbox;
pub mod view;
pub mod widget;

pub use config::WidgetConfig;
pub use sandbox::{HostEnvironment, LoadCompletion, LoadToken, NavigationSandbox};
pub use view::{display_label, ChromeView, UrlTab};
pub use widget::{EmbeddedBrowserWidget, LoadOutcome, SessionState};
