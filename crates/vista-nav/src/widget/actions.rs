//! Action handlers: the only operations that mutate session state.

use tracing::{debug, info, warn};
use vista_config::HistoryPolicy;

use crate::sandbox::{HostEnvironment, LoadCompletion, NavigationSandbox};

use super::{EmbeddedBrowserWidget, LoadOutcome};

impl<S: NavigationSandbox, H: HostEnvironment> EmbeddedBrowserWidget<S, H> {
    /// Switch to a configured candidate URL and start loading it.
    ///
    /// Selecting the active URL re-triggers a load. Returns `false` (and
    /// leaves everything untouched) when `url` is not a candidate or the
    /// widget has a single fixed URL.
    pub fn select_url(&mut self, url: &str) -> bool {
        if self.config.is_single_url() {
            debug!(session = self.id.short(), "single-URL widget, selection ignored");
            return false;
        }
        let Some(index) = self.config.urls().iter().position(|u| u == url) else {
            warn!(session = self.id.short(), url, "selection rejected: not a configured URL");
            return false;
        };

        info!(session = self.id.short(), url, "url selected");
        self.selected = index;
        self.state.current_url = url.to_string();
        let target = self.state.current_url.clone();
        self.begin_load(|sandbox, token| sandbox.load(&target, token));
        true
    }

    /// Ask the sandbox to step back. Ignored unless `can_go_back`.
    ///
    /// Does not re-arm the loading flag. Returns whether a request was issued.
    pub fn go_back(&mut self) -> bool {
        if !self.state.can_go_back {
            debug!(session = self.id.short(), "back unavailable, ignored");
            return false;
        }

        let accepted = match self.sandbox.step_back() {
            Ok(()) => true,
            Err(e) => {
                debug!(session = self.id.short(), error = %e, "sandbox refused back step");
                false
            }
        };

        match self.config.history_policy {
            HistoryPolicy::Compat => self.state.can_go_forward = true,
            HistoryPolicy::Symmetric if accepted => self.state.can_go_forward = true,
            HistoryPolicy::Symmetric => {}
        }
        true
    }

    /// Ask the sandbox to step forward. Ignored unless `can_go_forward`.
    ///
    /// Does not re-arm the loading flag. Returns whether a request was issued.
    pub fn go_forward(&mut self) -> bool {
        if !self.state.can_go_forward {
            debug!(session = self.id.short(), "forward unavailable, ignored");
            return false;
        }

        let accepted = match self.sandbox.step_forward() {
            Ok(()) => true,
            Err(e) => {
                debug!(session = self.id.short(), error = %e, "sandbox refused forward step");
                false
            }
        };

        if accepted && self.config.history_policy == HistoryPolicy::Symmetric {
            self.state.can_go_back = true;
        }
        true
    }

    /// Reload the resource the sandbox currently displays.
    ///
    /// `current_url` is left alone even if in-sandbox navigation has moved
    /// away from it.
    pub fn refresh(&mut self) {
        info!(session = self.id.short(), "refresh");
        self.begin_load(|sandbox, token| sandbox.reload_current(token));
    }

    /// Deliver a "content finished loading" notification.
    pub fn on_sandbox_load_complete(&mut self, completion: LoadCompletion) -> LoadOutcome {
        let outcome = if !self.config.stale_completion_guard {
            LoadOutcome::Completed
        } else {
            match completion {
                LoadCompletion::Requested(token) if token == self.latest_token => {
                    LoadOutcome::Completed
                }
                LoadCompletion::Requested(token) => {
                    debug!(
                        session = self.id.short(),
                        %token,
                        latest = %self.latest_token,
                        "stale load completion ignored"
                    );
                    return LoadOutcome::Stale;
                }
                LoadCompletion::Untracked if self.pending.is_some() => LoadOutcome::Deferred,
                LoadCompletion::Untracked => LoadOutcome::Completed,
            }
        };

        if outcome == LoadOutcome::Completed {
            self.state.is_loading = false;
            self.pending = None;
        }
        self.refresh_back_availability();

        debug!(
            session = self.id.short(),
            ?completion,
            ?outcome,
            can_go_back = self.state.can_go_back,
            "load completion handled"
        );
        outcome
    }

    /// Record a navigation that happened inside the sandbox.
    ///
    /// Only http(s) URLs are adopted; internal pages such as `about:blank`
    /// are ignored. Returns whether `current_url` changed.
    pub fn on_sandbox_navigated(&mut self, url: &str) -> bool {
        if url == self.state.current_url || !vista_config::validation::is_web_url(url) {
            return false;
        }
        debug!(session = self.id.short(), url, "sandbox navigated");
        self.state.current_url = url.to_string();
        if let Some(index) = self.config.urls().iter().position(|u| u == url) {
            self.selected = index;
        }
        true
    }

    /// Deliver a finished page load together with the URL the sandbox
    /// ended up on.
    ///
    /// The URL is adopted only when the completion is `Completed`: a stale
    /// or deferred finish belongs to a load the user has already moved
    /// away from.
    pub fn on_sandbox_page_finished(&mut self, completion: LoadCompletion, url: &str) -> LoadOutcome {
        let outcome = self.on_sandbox_load_complete(completion);
        if outcome == LoadOutcome::Completed {
            self.on_sandbox_navigated(url);
        }
        outcome
    }

    /// The sandbox reported new history information outside a load
    /// completion (a late report, or same-document navigation).
    pub fn on_sandbox_history_changed(&mut self) {
        self.refresh_back_availability();
    }

    /// Open the current URL in a new top-level context. No state change.
    pub fn open_externally(&self) {
        info!(session = self.id.short(), url = %self.state.current_url, "open externally");
        self.host.open_in_new_context(&self.state.current_url);
    }
}
