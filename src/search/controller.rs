use std::time::Duration;

use crate::error::SearchError;
use crate::search::SearchResult;

/// A query that should be sent to the search API now
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    /// Monotonic request number; only the latest one is applied
    pub request: u64,
    pub text: String,
}

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Results replaced the previous sequence
    Applied,
    /// The request failed; previous results are kept
    Failed,
    /// A newer request was issued after this one; the response was dropped
    Stale,
}

/// Owns the query text, the debounce timer identity and the result sequence.
///
/// The controller never sleeps or performs I/O itself. It hands out a
/// debounce generation on every edit and a [`PendingQuery`] when a quiet
/// period elapses; the caller runs those and reports back.
#[derive(Debug)]
pub struct InputController {
    text: String,
    quiet_period: Duration,
    /// Identity of the armed debounce timer. Bumped on every edit.
    debounce_generation: u64,
    latest_request: u64,
    in_flight: bool,
    results: Vec<SearchResult>,
    last_error: Option<SearchError>,
}

impl InputController {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            text: String::new(),
            quiet_period,
            debounce_generation: 0,
            latest_request: 0,
            in_flight: false,
            results: Vec::new(),
            last_error: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Record an edit and re-arm the debounce timer.
    ///
    /// Returns the generation of the new timer. Any timer armed earlier is
    /// superseded and will be ignored by [`Self::quiet_period_elapsed`].
    pub fn text_changed(&mut self, text: String) -> u64 {
        self.text = text;
        self.debounce_generation += 1;
        self.debounce_generation
    }

    /// A debounce timer fired. Issues a query only if no edit happened since
    /// that timer was armed.
    pub fn quiet_period_elapsed(&mut self, generation: u64) -> Option<PendingQuery> {
        if generation != self.debounce_generation {
            tracing::debug!(
                "Debounce gen={} superseded by gen={}",
                generation,
                self.debounce_generation
            );
            return None;
        }
        Some(self.issue())
    }

    /// Search for the current text right away, cancelling any armed timer.
    pub fn submit(&mut self) -> PendingQuery {
        self.debounce_generation += 1;
        self.issue()
    }

    /// Apply the outcome of a request if it is still the latest one.
    pub fn search_completed(
        &mut self,
        request: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> Settled {
        if request != self.latest_request {
            tracing::debug!(
                "Dropping response for request={} (latest={})",
                request,
                self.latest_request
            );
            return Settled::Stale;
        }

        self.in_flight = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                self.last_error = None;
                Settled::Applied
            }
            Err(e) => {
                tracing::warn!("Search request={} failed: {}", request, e);
                self.last_error = Some(e);
                Settled::Failed
            }
        }
    }

    fn issue(&mut self) -> PendingQuery {
        self.latest_request += 1;
        self.in_flight = true;
        PendingQuery {
            request: self.latest_request,
            text: self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> InputController {
        InputController::new(Duration::from_millis(1000))
    }

    fn result(label: &str, score: f64) -> SearchResult {
        SearchResult {
            label: label.to_string(),
            match_score: score,
            detail_link: format!("/d/{label}"),
        }
    }

    #[test]
    fn test_text_is_recorded_immediately() {
        let mut c = controller();
        c.text_changed("fev".to_string());
        assert_eq!(c.text(), "fev");
        assert!(!c.is_loading());
    }

    #[test]
    fn test_single_edit_issues_one_query() {
        let mut c = controller();
        let gen = c.text_changed("fever".to_string());
        let query = c.quiet_period_elapsed(gen).unwrap();
        assert_eq!(query.text, "fever");
        assert_eq!(query.request, 1);
        assert!(c.is_loading());
    }

    #[test]
    fn test_burst_coalesces_to_last_text() {
        let mut c = controller();
        let gens: Vec<u64> = ["f", "fe", "fever"]
            .iter()
            .map(|t| c.text_changed(t.to_string()))
            .collect();

        let issued: Vec<PendingQuery> = gens
            .into_iter()
            .filter_map(|g| c.quiet_period_elapsed(g))
            .collect();

        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].text, "fever");
    }

    #[test]
    fn test_whitespace_query_is_sent_as_is() {
        let mut c = controller();
        let gen = c.text_changed("   ".to_string());
        assert_eq!(c.quiet_period_elapsed(gen).unwrap().text, "   ");

        let gen = c.text_changed(String::new());
        assert_eq!(c.quiet_period_elapsed(gen).unwrap().text, "");
    }

    #[test]
    fn test_success_replaces_results_and_clears_loading() {
        let mut c = controller();
        let gen = c.text_changed("fever".to_string());
        let q = c.quiet_period_elapsed(gen).unwrap();

        let settled = c.search_completed(q.request, Ok(vec![result("lyme", 0.93)]));
        assert_eq!(settled, Settled::Applied);
        assert!(!c.is_loading());
        assert_eq!(c.results(), &[result("lyme", 0.93)]);

        let gen = c.text_changed("rash".to_string());
        let q = c.quiet_period_elapsed(gen).unwrap();
        c.search_completed(q.request, Ok(vec![result("measles", 0.4)]));
        assert_eq!(c.results(), &[result("measles", 0.4)]);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut c = controller();
        let q = c.submit();
        c.search_completed(q.request, Ok(vec![result("lyme", 0.93)]));

        let gen = c.text_changed("fever".to_string());
        let q = c.quiet_period_elapsed(gen).unwrap();
        let settled = c.search_completed(q.request, Err(SearchError::Status(500)));

        assert_eq!(settled, Settled::Failed);
        assert!(!c.is_loading());
        assert_eq!(c.results(), &[result("lyme", 0.93)]);
        assert_eq!(c.last_error(), Some(&SearchError::Status(500)));
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let mut c = controller();
        let q = c.submit();
        c.search_completed(q.request, Err(SearchError::Network("refused".into())));
        assert!(c.last_error().is_some());

        let q = c.submit();
        assert_eq!(c.search_completed(q.request, Ok(Vec::new())), Settled::Applied);
        assert!(c.last_error().is_none());
        assert!(c.results().is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut c = controller();
        let gen = c.text_changed("fe".to_string());
        let slow = c.quiet_period_elapsed(gen).unwrap();
        let gen = c.text_changed("fever".to_string());
        let fast = c.quiet_period_elapsed(gen).unwrap();

        assert_eq!(
            c.search_completed(fast.request, Ok(vec![result("lyme", 0.93)])),
            Settled::Applied
        );
        assert_eq!(
            c.search_completed(slow.request, Ok(vec![result("flu", 0.1)])),
            Settled::Stale
        );
        assert_eq!(c.results(), &[result("lyme", 0.93)]);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut c = controller();
        let first = c.submit();
        let _second = c.submit();

        c.search_completed(first.request, Err(SearchError::Status(502)));
        assert!(c.is_loading());
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_submit_cancels_armed_timer() {
        let mut c = controller();
        let gen = c.text_changed("fever".to_string());
        let q = c.submit();
        assert_eq!(q.text, "fever");
        assert_eq!(c.quiet_period_elapsed(gen), None);
    }
}
