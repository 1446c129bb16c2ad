//! The template-renderer collaborator seam.

use async_trait::async_trait;
use tracing::debug;

use super::FetchError;
use crate::model::FragmentResponse;

/// Issues an encoded query to whatever renders the page fragments and hands
/// back the named regions. The controller never sees the transport's wire
/// format, only [`FragmentResponse`].
#[async_trait]
pub trait FragmentTransport: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<FragmentResponse, FetchError>;
}

/// HTTP transport against the storefront's fragment endpoint.
///
/// The endpoint returns JSON with `productListing` and `sidebar` keys. The
/// per-page product limit is transport configuration, not query state, so it
/// is appended here rather than carried in [`crate::model::QueryState`].
pub struct HttpFragmentTransport {
    http: reqwest::Client,
    endpoint: String,
    products_per_page: u32,
}

impl HttpFragmentTransport {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, products_per_page: u32) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            products_per_page,
        }
    }

    fn url_for(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}?limit={}", self.endpoint, self.products_per_page)
        } else {
            format!("{}?{}&limit={}", self.endpoint, query, self.products_per_page)
        }
    }
}

#[async_trait]
impl FragmentTransport for HttpFragmentTransport {
    async fn fetch(&self, query: &str) -> Result<FragmentResponse, FetchError> {
        let url = self.url_for(query);
        debug!(%url, "requesting page fragments");
        let response = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_the_product_limit_to_the_query() {
        let transport =
            HttpFragmentTransport::new(reqwest::Client::new(), "https://shop.test/category", 12);
        assert_eq!(
            transport.url_for("brand=acme"),
            "https://shop.test/category?brand=acme&limit=12"
        );
        assert_eq!(
            transport.url_for(""),
            "https://shop.test/category?limit=12"
        );
    }
}
