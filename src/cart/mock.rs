//! Test doubles for the cart collaborators.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{AlertModal, CartError, StorefrontApi};
use crate::model::{Cart, CartLineItems};

/// Scripted [`StorefrontApi`] double; panics on an unscripted call.
#[derive(Default)]
pub struct MockStorefrontApi {
    create_results: Mutex<VecDeque<Result<Cart, CartError>>>,
    delete_results: Mutex<VecDeque<Result<(), CartError>>>,
    created: Mutex<Vec<CartLineItems>>,
    deleted: Mutex<Vec<String>>,
}

impl MockStorefrontApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_create(&self, result: Result<Cart, CartError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn expect_delete(&self, result: Result<(), CartError>) {
        self.delete_results.lock().unwrap().push_back(result);
    }

    /// Payloads of every cart creation, in order.
    pub fn created(&self) -> Vec<CartLineItems> {
        self.created.lock().unwrap().clone()
    }

    /// Cart ids of every deletion, in order.
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorefrontApi for MockStorefrontApi {
    async fn create_cart(&self, items: &CartLineItems) -> Result<Cart, CartError> {
        self.created.lock().unwrap().push(items.clone());
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted create_cart call")
    }

    async fn delete_cart(&self, cart_id: &str) -> Result<(), CartError> {
        self.deleted.lock().unwrap().push(cart_id.to_string());
        self.delete_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted delete_cart call")
    }
}

/// Recording [`AlertModal`] double; optionally confirms every notice as soon
/// as it is shown, which is how tests exercise the reload-on-confirm path.
pub struct MockAlertModal {
    auto_confirm: bool,
    shown: Mutex<Vec<String>>,
}

impl MockAlertModal {
    /// Records notices without confirming them.
    pub fn new() -> Self {
        Self {
            auto_confirm: false,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Records notices and immediately runs each confirm action.
    pub fn auto_confirming() -> Self {
        Self {
            auto_confirm: true,
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl Default for MockAlertModal {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertModal for MockAlertModal {
    fn show(&self, message: &str, _icon: Option<&str>, on_confirm: Box<dyn FnOnce() + Send>) {
        self.shown.lock().unwrap().push(message.to_string());
        if self.auto_confirm {
            on_confirm();
        }
    }
}
