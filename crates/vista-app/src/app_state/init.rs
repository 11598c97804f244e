//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use vista_common::VistaError;
use vista_nav::EmbeddedBrowserWidget;
use vista_platform::SystemOpener;
use vista_webview::ipc::{HISTORY_REPORT_SCRIPT, IPC_INIT_SCRIPT};
use vista_webview::{WebViewConfig, WrySandbox};

use super::core::VistaApp;
use super::types::{CHROME_VIEW, CONTENT_VIEW};
use super::webview_bridge::{rect_to_wry, PreviewLayout};

/// The content sandbox starts here; the widget issues the first real load.
const SANDBOX_START_URL: &str = "about:blank";

impl VistaApp {
    /// Create the window, both webviews and mount the widget.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), VistaError> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_resizable(window_config.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| VistaError::Window(format!("failed to create window: {e}")))?;

        self.initialize_webviews(&window)?;

        self.window = Some(window);
        tracing::info!("Window created and preview mounted");
        Ok(())
    }

    fn initialize_webviews(&mut self, window: &Arc<Window>) -> Result<(), VistaError> {
        let Some(widget_config) = self.widget_config.take() else {
            return Err(VistaError::WebView("preview already mounted".into()));
        };

        let layout = PreviewLayout::for_window(window, &self.panel, &widget_config);

        // Content first so the chrome panel stacks above it.
        let content_config = WebViewConfig::with_url(SANDBOX_START_URL)
            .sandboxed(&self.config.sandbox)
            .with_init_script(HISTORY_REPORT_SCRIPT);
        let content = self
            .webviews
            .create(
                CONTENT_VIEW,
                window.as_ref(),
                rect_to_wry(&layout.content),
                content_config,
            )
            .map_err(|e| VistaError::WebView(format!("failed to create content webview: {e}")))?;

        // The panel is generated inline HTML and never navigates.
        let mut chrome_config = WebViewConfig::with_html(self.panel.html())
            .transparent(true)
            .with_init_script(IPC_INIT_SCRIPT);
        chrome_config.restrict_navigation = false;
        let chrome = self
            .webviews
            .create(
                CHROME_VIEW,
                window.as_ref(),
                rect_to_wry(&layout.chrome_bounds(true)),
                chrome_config,
            )
            .map_err(|e| VistaError::WebView(format!("failed to create chrome webview: {e}")))?;

        let widget =
            EmbeddedBrowserWidget::mount(widget_config, WrySandbox::new(content), SystemOpener::new());
        tracing::info!(
            session = %widget.session_id(),
            url = %widget.state().current_url,
            "Preview widget mounted"
        );

        self.chrome = Some(chrome);
        self.widget = Some(widget);
        self.chrome_dirty = true;
        Ok(())
    }
}
