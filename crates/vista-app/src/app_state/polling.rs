//! Event polling: webview events in, chrome updates out.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use vista_webview::{PageLoadState, WebViewEvent};

use super::core::VistaApp;
use super::types::{CONTENT_VIEW, POLL_INTERVAL};

impl VistaApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            if self.chrome_dirty {
                self.sync_chrome();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { view_id, body } => {
                    self.handle_ipc_message(view_id, &body);
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } if view_id == CONTENT_VIEW => {
                    self.handle_content_page_load(state, &url);
                }
                WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                } => {
                    tracing::debug!(view_id, ?state, url = %url, "Chrome page load event");
                }
                WebViewEvent::TitleChanged { view_id, title } if view_id == CONTENT_VIEW => {
                    self.update_window_title(&title);
                }
                WebViewEvent::TitleChanged { view_id, title } => {
                    tracing::debug!(view_id, title = %title, "Chrome title changed");
                }
                WebViewEvent::NavigationRequested { view_id, url } => {
                    tracing::debug!(view_id, url = %url, "WebView navigation");
                }
                WebViewEvent::NavigationBlocked { view_id, url } => {
                    tracing::debug!(view_id, url = %url, "WebView navigation blocked");
                }
            }
        }
    }

    /// Turn a content page-load event into widget notifications.
    fn handle_content_page_load(&mut self, state: PageLoadState, url: &str) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };

        let Some(completion) = widget.sandbox_mut().on_page_load(state, url) else {
            return;
        };

        let outcome = widget.on_sandbox_page_finished(completion, url);
        tracing::debug!(?completion, ?outcome, url, "Content load finished");
        self.chrome_dirty = true;
    }

    fn update_window_title(&self, page_title: &str) {
        let Some(window) = &self.window else {
            return;
        };
        let base = &self.config.window.title;
        let title = page_title.trim();
        if title.is_empty() {
            window.set_title(base);
        } else {
            window.set_title(&format!("{title} - {base}"));
        }
    }
}
