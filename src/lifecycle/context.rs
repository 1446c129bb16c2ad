//! Construction-time page configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::notifier::TranslationDictionary;

fn default_products_per_page() -> u32 {
    12
}

fn default_add_all_product_id() -> u64 {
    112
}

/// Everything the page needs that is decided by the deployment rather than
/// the user: endpoints, the per-page product limit, the product the add-all
/// control offers, and the raw translation entries. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    /// Origin of the storefront API, no trailing slash.
    pub base_url: String,

    #[serde(default = "default_products_per_page")]
    pub products_per_page: u32,

    /// Product offered by the add-all-to-cart control.
    #[serde(default = "default_add_all_product_id")]
    pub add_all_product_id: u64,

    /// Raw translation entries; the notifier resolves its five keys from
    /// here once, at construction.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl PageContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            products_per_page: default_products_per_page(),
            add_all_product_id: default_add_all_product_id(),
            translations: BTreeMap::new(),
        }
    }
}

impl TranslationDictionary for PageContext {
    fn translate(&self, key: &str) -> Option<String> {
        self.translations.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let context: PageContext =
            serde_json::from_str(r#"{"baseUrl": "https://shop.test"}"#).unwrap();
        assert_eq!(context.base_url, "https://shop.test");
        assert_eq!(context.products_per_page, 12);
        assert_eq!(context.add_all_product_id, 112);
        assert!(context.translations.is_empty());
    }
}
