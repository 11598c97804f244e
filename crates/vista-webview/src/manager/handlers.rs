use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes a restricted WebView may navigate to.
///
/// - `https://` / `http://`: previewed sites (local dev servers included)
/// - `about:blank`: the empty page a sandbox starts on
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["https://", "http://", "about:blank"];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

fn push_event(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(view_id, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(view_id, body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { view_id, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view_id, ?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { view_id, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(view_id, title = %title, "title changed");
            push_event(&events, WebViewEvent::TitleChanged { view_id, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: u32,
        restrict: bool,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if restrict && !is_navigation_allowed(&url) {
                warn!(view_id, url = %url, "navigation blocked: URL not in allowlist");
                push_event(&events, WebViewEvent::NavigationBlocked { view_id, url });
                return false;
            }

            debug!(view_id, url = %url, "navigation allowed");
            push_event(&events, WebViewEvent::NavigationRequested { view_id, url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
