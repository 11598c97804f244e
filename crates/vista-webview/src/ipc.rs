//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   `window.vista.ipc._dispatch(kind, payload)` in the WebView context.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    /// Read a string field from a JSON object payload.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        match self {
            Self::Json(value) => value.get(key).and_then(|v| v.as_str()),
            _ => None,
        }
    }

    /// Read a non-negative integer field from a JSON object payload.
    pub fn u64_field(&self, key: &str) -> Option<u64> {
        match self {
            Self::Json(value) => value.get(key).and_then(|v| v.as_u64()),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// IPC bridge injected into the chrome panel.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.vista = window.vista || {};
    window.vista.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Injected into every page the content sandbox loads: reports the
/// session history length once the document is parsed.
pub const HISTORY_REPORT_SCRIPT: &str = r#"
(function() {
    if (window.top !== window.self || !window.ipc) {
        return;
    }
    function report() {
        try {
            window.ipc.postMessage(JSON.stringify({
                kind: "history_length",
                payload: { length: window.history.length, url: window.location.href }
            }));
        } catch (e) {}
    }
    if (document.readyState === "loading") {
        document.addEventListener("DOMContentLoaded", report, { once: true });
    } else {
        report();
    }
    window.addEventListener("popstate", report);
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.vista && window.vista.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_with_object_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"nav_select","payload":{"url":"https://b.test/"}}"#)
            .unwrap();
        assert_eq!(msg.kind, "nav_select");
        assert_eq!(msg.payload.str_field("url"), Some("https://b.test/"));
    }

    #[test]
    fn parses_message_without_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"nav_back"}"#).unwrap();
        assert_eq!(msg.kind, "nav_back");
        assert!(msg.payload.str_field("url").is_none());
    }

    #[test]
    fn null_payload_is_accepted() {
        let msg = IpcMessage::from_json(r#"{"kind":"chrome_ready","payload":null}"#).unwrap();
        assert_eq!(msg.kind, "chrome_ready");
    }

    #[test]
    fn history_length_field() {
        let msg = IpcMessage::from_json(
            r#"{"kind":"history_length","payload":{"length":3,"url":"https://a.test/"}}"#,
        )
        .unwrap();
        assert_eq!(msg.payload.u64_field("length"), Some(3));

        let bad = IpcMessage::from_json(r#"{"kind":"history_length","payload":{"length":-1}}"#)
            .unwrap();
        assert_eq!(bad.payload.u64_field("length"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn dispatch_script_escapes_kind_and_payload() {
        let script = js_dispatch_message("chrome_state", &serde_json::json!({"url": "a\"b"}));
        assert!(script.contains("_dispatch(\"chrome_state\""));
        assert!(script.contains(r#""url":"a\"b""#));
    }
}
