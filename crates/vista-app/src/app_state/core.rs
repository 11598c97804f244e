//! VistaApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use vista_common::VistaError;
use vista_config::VistaConfig;
use vista_nav::WidgetConfig;
use vista_webview::{ChromePanel, WebViewHandle, WebViewManager};

use super::types::PreviewWidget;

/// Top-level application state.
pub struct VistaApp {
    pub(super) config: VistaConfig,
    /// Consumed when the widget mounts.
    pub(super) widget_config: Option<WidgetConfig>,
    pub(super) panel: ChromePanel,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // WebViews
    pub(super) webviews: WebViewManager,
    pub(super) chrome: Option<WebViewHandle>,
    pub(super) widget: Option<PreviewWidget>,

    /// The chrome script has registered its `chrome_state` handler.
    pub(super) chrome_ready: bool,
    /// Session state changed since the chrome was last updated.
    pub(super) chrome_dirty: bool,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,

    /// Set when window or webview creation failed inside the event loop.
    pub(super) startup_error: Option<VistaError>,
}

impl VistaApp {
    pub fn new(config: VistaConfig, widget_config: WidgetConfig) -> Self {
        let panel = ChromePanel::from_config(&config.chrome);
        Self {
            config,
            widget_config: Some(widget_config),
            panel,
            window: None,
            webviews: WebViewManager::new(),
            chrome: None,
            widget: None,
            chrome_ready: false,
            chrome_dirty: false,
            should_exit: false,
            last_poll: Instant::now(),
            startup_error: None,
        }
    }

    /// Consume the app after the event loop returns, surfacing any
    /// startup failure recorded while it ran.
    pub fn finish(self) -> Result<(), VistaError> {
        match self.startup_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
