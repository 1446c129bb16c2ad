//! Wire types for the storefront cart API.

use serde::{Deserialize, Serialize};

/// A single line item in a cart creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub quantity: u32,
    pub product_id: u64,
}

impl CartItem {
    /// A one-of line item, the only quantity the add-all flow ever sends.
    pub fn single(product_id: u64) -> Self {
        Self {
            quantity: 1,
            product_id,
        }
    }
}

/// Body of `POST /api/storefront/carts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItems {
    pub line_items: Vec<CartItem>,
}

impl CartLineItems {
    pub fn single(product_id: u64) -> Self {
        Self {
            line_items: vec![CartItem::single(product_id)],
        }
    }
}

/// The slice of the server's cart representation the page cares about.
/// The server issues the id; the client never persists it beyond the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cart {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_payload_uses_storefront_field_names() {
        let payload = CartLineItems::single(112);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lineItems": [{ "quantity": 1, "productId": 112 }] })
        );
    }
}
