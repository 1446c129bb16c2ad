//! The storefront cart API seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::CartError;
use crate::model::{Cart, CartLineItems};

/// The two cart operations the category page performs. The cart lives
/// entirely server-side; the client holds no state beyond the DOM-embedded
/// cart id.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `POST /api/storefront/carts`: creates a cart with the given items.
    async fn create_cart(&self, items: &CartLineItems) -> Result<Cart, CartError>;

    /// `DELETE /api/storefront/carts/{cart_id}`: deletes a cart outright.
    async fn delete_cart(&self, cart_id: &str) -> Result<(), CartError>;
}

/// Cookie-bearing HTTP client against the storefront API. The cookie jar is
/// the `credentials: same-origin` equivalent: the storefront session rides
/// along on every request.
pub struct HttpStorefrontApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStorefrontApi {
    /// # Errors
    ///
    /// [`CartError::Network`] when the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CartError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|err| CartError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn carts_url(&self) -> String {
        format!("{}/api/storefront/carts", self.base_url)
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn create_cart(&self, items: &CartLineItems) -> Result<Cart, CartError> {
        debug!(items = items.line_items.len(), "creating cart");
        let cart = self
            .http
            .post(self.carts_url())
            .json(items)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(cart)
    }

    async fn delete_cart(&self, cart_id: &str) -> Result<(), CartError> {
        debug!(cart_id, "deleting cart");
        self.http
            .delete(format!("{}/{}", self.carts_url(), cart_id))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
