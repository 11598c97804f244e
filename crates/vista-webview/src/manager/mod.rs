//! WebView lifecycle management.
//!
//! `WebViewManager` creates and tracks the `wry::WebView` instances of the
//! preview window: the chrome panel and the content sandbox.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Owns the shared event sink every WebView callback writes into.
pub struct WebViewManager {
    /// Events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Number of events waiting to be drained.
    pub fn pending_events(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_order_and_empties_queue() {
        let manager = WebViewManager::new();
        {
            let mut events = manager.events.lock().unwrap();
            events.push(WebViewEvent::TitleChanged {
                view_id: 2,
                title: "a".into(),
            });
            events.push(WebViewEvent::NavigationRequested {
                view_id: 2,
                url: "https://a.test/".into(),
            });
        }
        assert_eq!(manager.pending_events(), 2);

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], WebViewEvent::TitleChanged { .. }));
        assert_eq!(manager.pending_events(), 0);
        assert!(manager.drain_events().is_empty());
    }
}
