//! IPC message validation and dispatch from webview to Rust handlers.

use vista_webview::IpcMessage;

use crate::app_state::core::VistaApp;
use crate::app_state::types::{CHROME_VIEW, CONTENT_VIEW};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Message kinds the chrome panel may send.
const CHROME_IPC_KINDS: &[&str] = &[
    "chrome_ready",
    "nav_back",
    "nav_forward",
    "nav_refresh",
    "nav_open_external",
    "nav_select",
];

/// Message kinds previewed pages may send. Page content is untrusted, so
/// it can report its history length and nothing else.
const CONTENT_IPC_KINDS: &[&str] = &["history_length"];

/// Check whether a view may send an IPC message of this kind.
pub fn is_ipc_kind_allowed(view_id: u32, kind: &str) -> bool {
    match view_id {
        CHROME_VIEW => CHROME_IPC_KINDS.contains(&kind),
        CONTENT_VIEW => CONTENT_IPC_KINDS.contains(&kind),
        _ => false,
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl VistaApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, view_id: u32, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    view_id,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        if !is_ipc_kind_allowed(view_id, &msg.kind) {
            tracing::warn!(view_id, kind = %msg.kind, "IPC message rejected: kind not allowed");
            return;
        }

        let Some(widget) = self.widget.as_mut() else {
            tracing::debug!(view_id, kind = %msg.kind, "IPC message before mount, dropped");
            return;
        };

        tracing::debug!(view_id, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "history_length" => match msg.payload.u64_field("length") {
                Some(length) => {
                    widget
                        .sandbox_mut()
                        .record_history(usize::try_from(length).unwrap_or(usize::MAX));
                    // Reports can land after the finish event, or on popstate.
                    widget.on_sandbox_history_changed();
                }
                None => {
                    tracing::warn!(view_id, "history_length without a length");
                    return;
                }
            },
            "chrome_ready" => {
                self.chrome_ready = true;
            }
            "nav_back" => {
                widget.go_back();
            }
            "nav_forward" => {
                widget.go_forward();
            }
            "nav_refresh" => {
                widget.refresh();
            }
            "nav_open_external" => {
                widget.open_externally();
                return;
            }
            "nav_select" => match msg.payload.str_field("url") {
                Some(url) => {
                    widget.select_url(url);
                }
                None => {
                    tracing::warn!(view_id, "nav_select without a url");
                    return;
                }
            },
            _ => {
                tracing::warn!(view_id, kind = %msg.kind, "Unhandled IPC kind");
                return;
            }
        }

        self.chrome_dirty = true;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_may_send_navigation_kinds() {
        for kind in CHROME_IPC_KINDS {
            assert!(is_ipc_kind_allowed(CHROME_VIEW, kind), "{kind} should be allowed");
        }
        assert!(!is_ipc_kind_allowed(CHROME_VIEW, "history_length"));
    }

    #[test]
    fn content_may_only_report_history() {
        assert!(is_ipc_kind_allowed(CONTENT_VIEW, "history_length"));
        for kind in CHROME_IPC_KINDS {
            assert!(!is_ipc_kind_allowed(CONTENT_VIEW, kind), "{kind} must be refused");
        }
    }

    #[test]
    fn unknown_views_and_kinds_are_refused() {
        assert!(!is_ipc_kind_allowed(99, "nav_back"));
        assert!(!is_ipc_kind_allowed(CHROME_VIEW, ""));
        assert!(!is_ipc_kind_allowed(CHROME_VIEW, "NAV_BACK"));
        assert!(!is_ipc_kind_allowed(CHROME_VIEW, "eval"));
    }
}
