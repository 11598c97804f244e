//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance, tagged with the view they came from.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view_id: u32, title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { view_id: u32, body: String },
    /// A navigation was allowed to proceed.
    NavigationRequested { view_id: u32, url: String },
    /// A navigation was refused by the allowlist.
    NavigationBlocked { view_id: u32, url: String },
}

impl WebViewEvent {
    pub fn view_id(&self) -> u32 {
        match self {
            Self::PageLoad { view_id, .. }
            | Self::TitleChanged { view_id, .. }
            | Self::IpcMessage { view_id, .. }
            | Self::NavigationRequested { view_id, .. }
            | Self::NavigationBlocked { view_id, .. } => *view_id,
        }
    }
}
