use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

const BLANK_PAGE: &str = "about:blank";

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The WebView is positioned at `bounds` within the parent window and
    /// reports its events under `view_id`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            view_id,
            config.restrict_navigation,
        );

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = BLANK_PAGE.to_string();
        } else {
            builder = builder.with_url(BLANK_PAGE);
            initial_url = BLANK_PAGE.to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle { webview })
    }
}
