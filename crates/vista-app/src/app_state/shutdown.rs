//! Teardown: unmount the widget and release the webviews.

use super::core::VistaApp;

impl VistaApp {
    /// Release the widget and both webviews. Idempotent.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");

        if let Some(widget) = self.widget.take() {
            let session = widget.session_id().to_string();
            let (sandbox, _host) = widget.unmount();
            drop(sandbox);
            tracing::info!(session = %session, "Preview widget unmounted");
        }
        self.chrome = None;
        self.chrome_ready = false;
        self.should_exit = true;

        tracing::info!("WebViews released");
    }
}
