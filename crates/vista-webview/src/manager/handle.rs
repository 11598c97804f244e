use wry::WebView;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
