//! Errors from the cart action flows.

use thiserror::Error;

/// A failed cart operation. Surfaced to the user through the alert modal
/// and logged; never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The remove-all control carries no `data-cart-id` attribute.
    #[error("remove-all control has no cart id attribute")]
    MissingCartId,

    /// The request never produced a usable response.
    #[error("cart request failed: {0}")]
    Network(String),

    /// The storefront API answered with a non-success status.
    #[error("storefront API returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for CartError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CartError::Status(status.as_u16()),
            None => CartError::Network(err.to_string()),
        }
    }
}
