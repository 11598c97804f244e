use tracing::debug;
use vista_common::AccessDenied;
use vista_nav::{LoadCompletion, LoadToken};

use super::history::HistoryReport;
use super::tracker::LoadTracker;
use crate::events::PageLoadState;

/// Sequencing of the content sandbox's load and history events.
///
/// Owns no WebView: commands issued to the page are recorded with
/// [`ContentLoads::requested`], and the events the page produces are fed
/// back through [`ContentLoads::on_page_load`] and
/// [`ContentLoads::record_history`].
#[derive(Debug, Default)]
pub struct ContentLoads {
    tracker: LoadTracker,
    history: HistoryReport,
}

impl ContentLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// A load was issued with `token`; `None` targets whatever is shown.
    pub fn requested(&mut self, token: LoadToken, url: Option<&str>) {
        self.tracker.requested(token, url);
    }

    /// Feed a page-load event. Returns the completion to deliver on `Finished`.
    pub fn on_page_load(&mut self, state: PageLoadState, url: &str) -> Option<LoadCompletion> {
        match state {
            PageLoadState::Started => {
                self.history.reset();
                let adopted = self.tracker.started(url);
                debug!(url, ?adopted, "content load started");
                None
            }
            PageLoadState::Finished => Some(self.tracker.finished()),
        }
    }

    /// Record a `history.length` report from the page.
    pub fn record_history(&mut self, length: usize) {
        self.history.record(length);
    }

    pub fn history_length(&self) -> Result<usize, AccessDenied> {
        self.history.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_nav::{EmbeddedBrowserWidget, HostEnvironment, LoadOutcome, NavigationSandbox, WidgetConfig};

    const A: &str = "https://a.test/";
    const B: &str = "https://b.test/";

    /// A content sandbox whose page is driven by the test instead of a WebView.
    #[derive(Default)]
    struct ScriptedPage {
        loads: ContentLoads,
    }

    impl NavigationSandbox for ScriptedPage {
        fn load(&mut self, url: &str, token: LoadToken) -> Result<(), AccessDenied> {
            self.loads.requested(token, Some(url));
            Ok(())
        }

        fn step_back(&mut self) -> Result<(), AccessDenied> {
            Ok(())
        }

        fn step_forward(&mut self) -> Result<(), AccessDenied> {
            Ok(())
        }

        fn reload_current(&mut self, token: LoadToken) -> Result<(), AccessDenied> {
            self.loads.requested(token, None);
            Ok(())
        }

        fn query_history_length(&self) -> Result<usize, AccessDenied> {
            self.loads.history_length()
        }
    }

    struct NoHost;

    impl HostEnvironment for NoHost {
        fn open_in_new_context(&self, _url: &str) {}
    }

    type Widget = EmbeddedBrowserWidget<ScriptedPage, NoHost>;

    fn mount() -> Widget {
        let config = WidgetConfig::new(vec![A.into(), B.into()], None).unwrap();
        EmbeddedBrowserWidget::mount(config, ScriptedPage::default(), NoHost)
    }

    /// Deliver one page-load event the way the app's event loop does.
    fn page_event(widget: &mut Widget, state: PageLoadState, url: &str) -> Option<LoadOutcome> {
        let completion = widget.sandbox_mut().loads.on_page_load(state, url)?;
        Some(widget.on_sandbox_page_finished(completion, url))
    }

    #[test]
    fn blank_start_page_does_not_finish_first_load() {
        let mut widget = mount();

        assert_eq!(page_event(&mut widget, PageLoadState::Started, "about:blank"), None);
        let outcome = page_event(&mut widget, PageLoadState::Finished, "about:blank");
        assert_eq!(outcome, Some(LoadOutcome::Deferred));
        assert!(widget.state().is_loading);
        assert_eq!(widget.state().current_url, A);

        page_event(&mut widget, PageLoadState::Started, A);
        let outcome = page_event(&mut widget, PageLoadState::Finished, A);
        assert_eq!(outcome, Some(LoadOutcome::Completed));
        assert!(!widget.state().is_loading);
    }

    #[test]
    fn superseded_load_finishing_late_keeps_new_selection() {
        let mut widget = mount();
        page_event(&mut widget, PageLoadState::Started, A);
        widget.select_url(B);

        let outcome = page_event(&mut widget, PageLoadState::Finished, A);
        assert_eq!(outcome, Some(LoadOutcome::Stale));
        assert_eq!(widget.state().current_url, B);
        assert_eq!(widget.selected_index(), 1);
        assert!(widget.state().is_loading);

        page_event(&mut widget, PageLoadState::Started, B);
        let outcome = page_event(&mut widget, PageLoadState::Finished, B);
        assert_eq!(outcome, Some(LoadOutcome::Completed));
        assert_eq!(widget.state().current_url, B);
        assert!(!widget.state().is_loading);
    }

    #[test]
    fn history_report_after_finish_enables_back() {
        let mut widget = mount();
        page_event(&mut widget, PageLoadState::Started, A);
        page_event(&mut widget, PageLoadState::Finished, A);
        widget.select_url(B);
        page_event(&mut widget, PageLoadState::Started, B);
        page_event(&mut widget, PageLoadState::Finished, B);

        // The page's report arrives after the finished event was handled.
        assert!(!widget.state().can_go_back);
        widget.sandbox_mut().loads.record_history(2);
        widget.on_sandbox_history_changed();
        assert!(widget.state().can_go_back);
    }

    #[test]
    fn new_page_forgets_previous_history_report() {
        let mut loads = ContentLoads::new();
        loads.record_history(3);
        assert_eq!(loads.history_length().unwrap(), 3);

        loads.on_page_load(PageLoadState::Started, A);
        assert!(loads.history_length().is_err());
    }

    #[test]
    fn reload_is_attributed_to_its_token() {
        let mut loads = ContentLoads::new();
        loads.requested(LoadToken(7), None);

        assert_eq!(loads.on_page_load(PageLoadState::Started, "https://a.test/deep"), None);
        assert_eq!(
            loads.on_page_load(PageLoadState::Finished, "https://a.test/deep"),
            Some(LoadCompletion::Requested(LoadToken(7)))
        );
    }
}
