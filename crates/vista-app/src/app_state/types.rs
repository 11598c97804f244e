//! Internal types and constants for the app state module.

use std::time::Duration;

use vista_nav::EmbeddedBrowserWidget;
use vista_platform::SystemOpener;
use vista_webview::WrySandbox;

/// The navigation widget as wired in the window.
pub(super) type PreviewWidget = EmbeddedBrowserWidget<WrySandbox, SystemOpener>;

/// View id of the chrome panel webview.
pub(super) const CHROME_VIEW: u32 = 1;
/// View id of the content sandbox webview.
pub(super) const CONTENT_VIEW: u32 = 2;

/// How often to drain webview events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
