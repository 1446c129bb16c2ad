//! Errors from the fragment request path.

use thiserror::Error;

/// A failed fragment request. The DOM is never touched on failure and there
/// is no automatic retry; the user re-triggers by interacting again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a usable response (DNS, connect, body).
    #[error("fragment request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("fragment endpoint returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(err.to_string()),
        }
    }
}
