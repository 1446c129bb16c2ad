//! Server-rendered page fragments.

use serde::Deserialize;

/// The named page regions the server re-renders per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ProductListing,
    Sidebar,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::ProductListing => "productListing",
            Region::Sidebar => "sidebar",
        }
    }
}

/// HTML fragments for the regions affected by a faceted-search request.
///
/// Consumed by the renderer on receipt; nothing holds onto a response after
/// its regions have been swapped in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentResponse {
    pub product_listing: String,
    pub sidebar: String,
}

impl FragmentResponse {
    pub fn region(&self, region: Region) -> &str {
        match region {
            Region::ProductListing => &self.product_listing,
            Region::Sidebar => &self.sidebar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_regions() {
        let response: FragmentResponse = serde_json::from_str(
            r#"{"productListing": "<ul></ul>", "sidebar": "<nav></nav>"}"#,
        )
        .unwrap();
        assert_eq!(response.product_listing, "<ul></ul>");
        assert_eq!(response.sidebar, "<nav></nav>");
    }
}
