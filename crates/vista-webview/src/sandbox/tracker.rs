use std::collections::VecDeque;

use vista_nav::{LoadCompletion, LoadToken};

/// Matches WebView page-load events to the tokens of requested loads.
///
/// `wry` reports `Started(url)` / `Finished(url)` pairs with no link to
/// the call that caused them. Requests are queued with their target URL
/// (`None` for a reload, which matches anything). A `Started` adopts the
/// newest queued request for that URL and drops everything older: those
/// loads were superseded and will never finish. A `Started` that matches
/// nothing while requests are queued (a redirect) adopts the newest one,
/// unless it is an internal `about:` page such as the sandbox's blank
/// start page, which never consumes a request.
#[derive(Debug, Default)]
pub struct LoadTracker {
    queue: VecDeque<(LoadToken, Option<String>)>,
    current: Option<LoadToken>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a load issued with `token`.
    pub fn requested(&mut self, token: LoadToken, url: Option<&str>) {
        self.queue.push_back((token, url.map(str::to_string)));
    }

    /// A navigation started; returns the token it was attributed to.
    pub fn started(&mut self, url: &str) -> Option<LoadToken> {
        let matched = self
            .queue
            .iter()
            .rposition(|(_, target)| target.as_deref().map_or(true, |t| same_url(t, url)));

        self.current = match matched {
            Some(index) => {
                let token = self.queue[index].0;
                self.queue.drain(..=index);
                Some(token)
            }
            None if url.starts_with("about:") => None,
            None => {
                let newest = self.queue.back().map(|(token, _)| *token);
                self.queue.clear();
                newest
            }
        };
        self.current
    }

    /// The navigation in progress finished.
    pub fn finished(&mut self) -> LoadCompletion {
        match self.current.take() {
            Some(token) => LoadCompletion::Requested(token),
            None => LoadCompletion::Untracked,
        }
    }

    /// Requests not yet seen starting.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

fn same_url(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "https://a.test/";
    const B: &str = "https://b.test/";

    #[test]
    fn requested_load_completes_with_its_token() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some(A));

        assert_eq!(tracker.started(A), Some(LoadToken(1)));
        assert_eq!(tracker.finished(), LoadCompletion::Requested(LoadToken(1)));
        assert_eq!(tracker.queued(), 0);
    }

    #[test]
    fn navigation_without_request_is_untracked() {
        let mut tracker = LoadTracker::new();
        assert_eq!(tracker.started("https://a.test/about"), None);
        assert_eq!(tracker.finished(), LoadCompletion::Untracked);
    }

    #[test]
    fn finished_without_started_is_untracked() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some(A));
        assert_eq!(tracker.finished(), LoadCompletion::Untracked);
        assert_eq!(tracker.queued(), 1);
    }

    #[test]
    fn superseded_request_is_dropped() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some(A));
        tracker.requested(LoadToken(2), Some(B));

        // The first load was cancelled before it started.
        assert_eq!(tracker.started(B), Some(LoadToken(2)));
        assert_eq!(tracker.finished(), LoadCompletion::Requested(LoadToken(2)));
        assert_eq!(tracker.queued(), 0);
    }

    #[test]
    fn older_load_finishing_first_keeps_its_own_token() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some(A));
        assert_eq!(tracker.started(A), Some(LoadToken(1)));
        tracker.requested(LoadToken(2), Some(B));

        assert_eq!(tracker.finished(), LoadCompletion::Requested(LoadToken(1)));
        assert_eq!(tracker.started(B), Some(LoadToken(2)));
        assert_eq!(tracker.finished(), LoadCompletion::Requested(LoadToken(2)));
    }

    #[test]
    fn reload_matches_any_url() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(4), None);
        assert_eq!(tracker.started("https://a.test/deep/page"), Some(LoadToken(4)));
        assert_eq!(tracker.finished(), LoadCompletion::Requested(LoadToken(4)));
    }

    #[test]
    fn redirect_adopts_newest_request() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some(A));
        tracker.requested(LoadToken(2), Some(B));

        assert_eq!(tracker.started("https://www.b.test/home"), Some(LoadToken(2)));
        assert_eq!(tracker.queued(), 0);
    }

    #[test]
    fn blank_start_page_does_not_consume_requests() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some(A));

        assert_eq!(tracker.started("about:blank"), None);
        assert_eq!(tracker.finished(), LoadCompletion::Untracked);
        assert_eq!(tracker.queued(), 1);

        assert_eq!(tracker.started(A), Some(LoadToken(1)));
        assert_eq!(tracker.finished(), LoadCompletion::Requested(LoadToken(1)));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let mut tracker = LoadTracker::new();
        tracker.requested(LoadToken(1), Some("https://a.test"));
        tracker.requested(LoadToken(2), Some(B));

        assert_eq!(tracker.started(A), Some(LoadToken(1)));
        assert_eq!(tracker.queued(), 1);
    }
}
