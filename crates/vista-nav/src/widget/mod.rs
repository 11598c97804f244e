//! The navigation state holder.
//!
//! `EmbeddedBrowserWidget` is created at mount, mutated only by its action
//! handlers (see `actions.rs`) and dropped or [`unmount`]ed with the view.
//!
//! [`unmount`]: EmbeddedBrowserWidget::unmount

mod actions;


use serde::Serialize;
use tracing::{debug, info, warn};
use vista_common::SessionId;

use crate::config::WidgetConfig;
use crate::sandbox::{HostEnvironment, LoadToken, NavigationSandbox};

/// Mutable navigation/loading state of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub current_url: String,
    pub is_loading: bool,
    /// Advisory: best known availability of a sandbox back step.
    pub can_go_back: bool,
    /// Advisory: best known availability of a sandbox forward step.
    pub can_go_forward: bool,
}

/// Result of delivering a load completion to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The loading flag was cleared.
    Completed,
    /// The completion belongs to a superseded request and was ignored.
    Stale,
    /// An untracked completion arrived while a requested load is still
    /// outstanding; history was refreshed but loading stays armed.
    Deferred,
}

/// Browser-like chrome around an embedded sandbox.
pub struct EmbeddedBrowserWidget<S, H> {
    id: SessionId,
    config: WidgetConfig,
    state: SessionState,
    /// Candidate the user last selected (or the initial one).
    selected: usize,
    latest_token: LoadToken,
    /// Token of the requested load not yet completed, if any.
    pending: Option<LoadToken>,
    sandbox: S,
    host: H,
}

impl<S: NavigationSandbox, H: HostEnvironment> EmbeddedBrowserWidget<S, H> {
    /// Mount the widget: start loading the initial URL.
    pub fn mount(config: WidgetConfig, sandbox: S, host: H) -> Self {
        let initial = config.initial_url().to_string();
        let selected = config
            .urls()
            .iter()
            .position(|u| *u == initial)
            .unwrap_or(0);

        let mut widget = Self {
            id: SessionId::new(),
            config,
            state: SessionState {
                current_url: initial.clone(),
                is_loading: true,
                can_go_back: false,
                can_go_forward: false,
            },
            selected,
            latest_token: LoadToken(0),
            pending: None,
            sandbox,
            host,
        };

        info!(
            session = widget.id.short(),
            url = %initial,
            candidates = widget.config.urls().len(),
            "widget mounted"
        );
        widget.begin_load(|sandbox, token| sandbox.load(&initial, token));
        widget
    }

    /// Tear the widget down, handing the collaborators back to the host.
    pub fn unmount(self) -> (S, H) {
        info!(
            session = self.id.short(),
            url = %self.state.current_url,
            "widget unmounted"
        );
        (self.sandbox, self.host)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    /// Index into `config().urls()` of the active candidate.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Token of the most recently issued load.
    pub fn latest_token(&self) -> LoadToken {
        self.latest_token
    }

    /// Whether a requested load has not completed yet.
    pub fn has_pending_load(&self) -> bool {
        self.pending.is_some()
    }

    pub fn sandbox(&self) -> &S {
        &self.sandbox
    }

    pub fn sandbox_mut(&mut self) -> &mut S {
        &mut self.sandbox
    }

    /// Arm the loading flag, issue a fresh token and hand it to `request`.
    fn begin_load<F>(&mut self, request: F) -> LoadToken
    where
        F: FnOnce(&mut S, LoadToken) -> Result<(), vista_common::AccessDenied>,
    {
        let token = self.latest_token.next();
        self.latest_token = token;
        self.pending = Some(token);
        self.state.is_loading = true;

        if let Err(e) = request(&mut self.sandbox, token) {
            // The flag stays armed: a load that never completes is accepted.
            warn!(session = self.id.short(), %token, error = %e, "sandbox refused load request");
        } else {
            debug!(session = self.id.short(), %token, "load requested");
        }
        token
    }

    /// Re-read the sandbox history length into `can_go_back`.
    fn refresh_back_availability(&mut self) {
        match self.sandbox.query_history_length() {
            Ok(len) => {
                self.state.can_go_back = len > 1;
                debug!(
                    session = self.id.short(),
                    history_len = len,
                    can_go_back = self.state.can_go_back,
                    "sandbox history read"
                );
            }
            Err(e) => {
                debug!(
                    session = self.id.short(),
                    error = %e,
                    "cannot read sandbox history, keeping last known back state"
                );
            }
        }
    }
}
