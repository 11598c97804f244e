use vista_common::AccessDenied;

/// Last `history.length` reported by the page currently in the sandbox.
///
/// Pages that never report (the injected script could not run, or the
/// report has not arrived yet) leave the length unknown, which reads as
/// [`AccessDenied`].
#[derive(Debug, Default, Clone)]
pub struct HistoryReport {
    length: Option<usize>,
}

impl HistoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous page's report.
    pub fn reset(&mut self) {
        self.length = None;
    }

    pub fn record(&mut self, length: usize) {
        self.length = Some(length);
    }

    pub fn length(&self) -> Result<usize, AccessDenied> {
        self.length
            .ok_or_else(|| AccessDenied::new("history length not reported by the current page"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_until_reported() {
        let report = HistoryReport::new();
        assert!(report.length().is_err());
    }

    #[test]
    fn report_then_reset() {
        let mut report = HistoryReport::new();
        report.record(3);
        assert_eq!(report.length().unwrap(), 3);

        report.reset();
        let err = report.length().unwrap_err();
        assert!(err.to_string().contains("not reported"));
    }

    #[test]
    fn latest_report_wins() {
        let mut report = HistoryReport::new();
        report.record(1);
        report.record(2);
        assert_eq!(report.length().unwrap(), 2);
    }
}
