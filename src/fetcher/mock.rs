//! Scripted [`FragmentTransport`] for tests.
//!
//! Responses are queued ahead of time. A queued response is either ready
//! (returned as soon as the fetch reaches it) or gated behind a oneshot
//! sender, which lets a test hold a fetch in flight and resolve several
//! fetches in whatever order the scenario needs. That is the tool for
//! exercising the stale-response guard.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{FetchError, FragmentTransport};
use crate::model::FragmentResponse;

enum Scripted {
    Ready(Result<FragmentResponse, FetchError>),
    Gated(oneshot::Receiver<Result<FragmentResponse, FetchError>>),
}

/// In-memory transport double. Panics on an unscripted fetch.
#[derive(Default)]
pub struct MockTransport {
    scripted: Mutex<VecDeque<Scripted>>,
    queries: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an immediate successful response.
    pub fn enqueue_ok(&self, response: FragmentResponse) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(Ok(response)));
    }

    /// Queues an immediate failure.
    pub fn enqueue_err(&self, error: FetchError) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(Err(error)));
    }

    /// Queues a response that stays pending until the returned sender fires.
    pub fn enqueue_gated(&self) -> oneshot::Sender<Result<FragmentResponse, FetchError>> {
        let (sender, receiver) = oneshot::channel();
        self.scripted
            .lock()
            .unwrap()
            .push_back(Scripted::Gated(receiver));
        sender
    }

    /// Every encoded query received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FragmentTransport for MockTransport {
    async fn fetch(&self, query: &str) -> Result<FragmentResponse, FetchError> {
        self.queries.lock().unwrap().push(query.to_string());
        let scripted = self
            .scripted
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted fragment fetch");
        match scripted {
            Scripted::Ready(result) => result,
            Scripted::Gated(receiver) => receiver.await.expect("fetch gate dropped"),
        }
    }
}

/// Convenience fragments for tests.
pub fn sample_response(tag: &str) -> FragmentResponse {
    FragmentResponse {
        product_listing: format!("<ul data-listing=\"{tag}\"></ul>"),
        sidebar: format!("<nav data-sidebar=\"{tag}\"></nav>"),
    }
}
