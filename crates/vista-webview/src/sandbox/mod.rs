//! `NavigationSandbox` over a content WebView.
//!
//! Commands go to the WebView directly (`load_url`) or as script
//! (`history.back()`, `location.reload()`). Load completions and history
//! length arrive later through the event queue and are fed back in with
//! [`WrySandbox::on_page_load`] and [`WrySandbox::record_history`].

mod history;
mod loads;
mod tracker;

pub use history::HistoryReport;
pub use loads::ContentLoads;
pub use tracker::LoadTracker;

use vista_common::AccessDenied;
use vista_nav::{LoadCompletion, LoadToken, NavigationSandbox};

use crate::events::PageLoadState;
use crate::manager::WebViewHandle;

const BACK_SCRIPT: &str = "window.history.back();";
const FORWARD_SCRIPT: &str = "window.history.forward();";
const RELOAD_SCRIPT: &str = "window.location.reload();";

/// The content WebView plus the bookkeeping that turns its raw events
/// into widget notifications.
pub struct WrySandbox {
    handle: WebViewHandle,
    loads: ContentLoads,
}

impl WrySandbox {
    pub fn new(handle: WebViewHandle) -> Self {
        Self {
            handle,
            loads: ContentLoads::new(),
        }
    }

    pub fn handle(&self) -> &WebViewHandle {
        &self.handle
    }

    /// Feed a page-load event of the content WebView.
    ///
    /// Returns the completion to deliver to the widget on `Finished`.
    pub fn on_page_load(&mut self, state: PageLoadState, url: &str) -> Option<LoadCompletion> {
        self.loads.on_page_load(state, url)
    }

    /// Record a `history.length` report from the content page.
    pub fn record_history(&mut self, length: usize) {
        self.loads.record_history(length);
    }

    fn run(&self, script: &str, what: &str) -> Result<(), AccessDenied> {
        self.handle
            .evaluate_script(script)
            .map_err(|e| AccessDenied::new(format!("{what} failed: {e}")))
    }
}

impl NavigationSandbox for WrySandbox {
    fn load(&mut self, url: &str, token: LoadToken) -> Result<(), AccessDenied> {
        self.handle
            .load_url(url)
            .map_err(|e| AccessDenied::new(format!("load failed: {e}")))?;
        self.loads.requested(token, Some(url));
        Ok(())
    }

    fn step_back(&mut self) -> Result<(), AccessDenied> {
        self.run(BACK_SCRIPT, "history back")
    }

    fn step_forward(&mut self) -> Result<(), AccessDenied> {
        self.run(FORWARD_SCRIPT, "history forward")
    }

    fn reload_current(&mut self, token: LoadToken) -> Result<(), AccessDenied> {
        self.run(RELOAD_SCRIPT, "reload")?;
        self.loads.requested(token, None);
        Ok(())
    }

    fn query_history_length(&self) -> Result<usize, AccessDenied> {
        self.loads.history_length()
    }
}
