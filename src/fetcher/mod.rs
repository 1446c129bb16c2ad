//! # Fragment Fetcher
//!
//! Issues fragment requests for a [`QueryState`] and guards against stale
//! responses. The page allows rapid re-filtering, so several requests can be
//! in flight at once; only the most recently issued one is allowed to affect
//! the DOM. Each fetch takes the next value of a monotonically increasing
//! token, and a response (or failure) whose token is no longer the latest is
//! reported as [`FetchOutcome::Superseded`] instead of its payload.
//!
//! The token check is the page's only cancellation mechanism: there is no
//! timeout, so a hung request stalls only its own logical action.

mod error;
pub mod mock;
mod transport;

pub use error::FetchError;
pub use transport::{FragmentTransport, HttpFragmentTransport};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::codec;
use crate::model::{FragmentResponse, QueryState};

/// What a resolved fetch means for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// This fetch is still the latest; render its regions.
    Fresh(FragmentResponse),
    /// A newer fetch was issued while this one was in flight; discard.
    Superseded,
}

/// Token-guarded fetcher over a [`FragmentTransport`].
pub struct FragmentFetcher<T: FragmentTransport> {
    transport: Arc<T>,
    latest: AtomicU64,
}

impl<T: FragmentTransport> FragmentFetcher<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            latest: AtomicU64::new(0),
        }
    }

    /// Fetches fragments for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] only when this fetch is still the latest; a
    /// superseded failure is folded into [`FetchOutcome::Superseded`] since
    /// nothing should be announced for a request the user has moved past.
    pub async fn fetch(&self, state: &QueryState) -> Result<FetchOutcome, FetchError> {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = codec::encode(state);
        debug!(token, %query, "fragment fetch issued");

        let result = self.transport.fetch(&query).await;

        if self.latest.load(Ordering::SeqCst) != token {
            if let Err(err) = &result {
                debug!(token, error = %err, "superseded fetch had failed");
            }
            debug!(token, "fragment response superseded");
            return Ok(FetchOutcome::Superseded);
        }

        let response = result?;
        debug!(token, "fragment response fresh");
        Ok(FetchOutcome::Fresh(response))
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{sample_response, MockTransport};
    use super::*;

    #[tokio::test]
    async fn fresh_fetch_returns_the_response() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_ok(sample_response("a"));
        let fetcher = FragmentFetcher::new(transport.clone());

        let mut state = QueryState::new();
        state.select_facet("brand", "acme");

        let outcome = fetcher.fetch(&state).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Fresh(sample_response("a")));
        assert_eq!(transport.queries(), vec!["brand=acme".to_string()]);
    }

    #[tokio::test]
    async fn older_fetch_resolving_last_is_superseded() {
        let transport = Arc::new(MockTransport::new());
        let gate_a = transport.enqueue_gated();
        let gate_b = transport.enqueue_gated();
        let fetcher = Arc::new(FragmentFetcher::new(transport));

        let fetch_a = tokio::spawn({
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(&QueryState::new()).await }
        });
        // Let A take its token and park on the gate before B is issued.
        tokio::task::yield_now().await;

        let fetch_b = tokio::spawn({
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(&QueryState::new()).await }
        });
        tokio::task::yield_now().await;

        // B resolves first, then A: A must come back superseded.
        gate_b.send(Ok(sample_response("b"))).unwrap();
        gate_a.send(Ok(sample_response("a"))).unwrap();

        assert_eq!(
            fetch_b.await.unwrap().unwrap(),
            FetchOutcome::Fresh(sample_response("b"))
        );
        assert_eq!(fetch_a.await.unwrap().unwrap(), FetchOutcome::Superseded);
    }

    #[tokio::test]
    async fn superseded_failures_are_not_surfaced() {
        let transport = Arc::new(MockTransport::new());
        let gate_a = transport.enqueue_gated();
        transport.enqueue_ok(sample_response("b"));
        let fetcher = Arc::new(FragmentFetcher::new(transport));

        let fetch_a = tokio::spawn({
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(&QueryState::new()).await }
        });
        tokio::task::yield_now().await;

        // A newer fetch completes while A is still pending.
        fetcher.fetch(&QueryState::new()).await.unwrap();

        gate_a.send(Err(FetchError::Status(500))).unwrap();
        assert_eq!(fetch_a.await.unwrap().unwrap(), FetchOutcome::Superseded);
    }

    #[tokio::test]
    async fn current_fetch_failure_is_surfaced() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue_err(FetchError::Status(502));
        let fetcher = FragmentFetcher::new(transport);

        let err = fetcher.fetch(&QueryState::new()).await.unwrap_err();
        assert_eq!(err, FetchError::Status(502));
    }
}
