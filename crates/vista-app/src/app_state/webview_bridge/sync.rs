//! Pushing session state and geometry to the webviews.

use vista_nav::ChromeView;

use crate::app_state::core::VistaApp;

use super::bounds::{rect_to_wry, PreviewLayout};

impl VistaApp {
    /// Send the current `ChromeView` to the panel and refit the webviews.
    pub(in crate::app_state) fn sync_chrome(&mut self) {
        self.chrome_dirty = false;
        let (Some(widget), Some(chrome)) = (&self.widget, &self.chrome) else {
            return;
        };

        if self.chrome_ready {
            match serde_json::to_value(ChromeView::of(widget)) {
                Ok(view) => {
                    if let Err(e) = chrome.send_ipc("chrome_state", &view) {
                        tracing::warn!(error = %e, "Failed to send chrome state");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Failed to serialize chrome state"),
            }
        }

        self.sync_webview_bounds();
    }

    /// Reposition both webviews for the current window size and loading state.
    pub(in crate::app_state) fn sync_webview_bounds(&self) {
        let (Some(window), Some(widget), Some(chrome)) = (&self.window, &self.widget, &self.chrome)
        else {
            return;
        };

        let layout = PreviewLayout::for_window(window, &self.panel, widget.config());
        let loading = widget.state().is_loading;

        if let Err(e) = chrome.set_bounds(rect_to_wry(&layout.chrome_bounds(loading))) {
            tracing::warn!(error = %e, "Failed to set chrome bounds");
        }
        if let Err(e) = widget
            .sandbox()
            .handle()
            .set_bounds(rect_to_wry(&layout.content))
        {
            tracing::warn!(error = %e, "Failed to set content bounds");
        }
    }
}
