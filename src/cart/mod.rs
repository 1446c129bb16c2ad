//! # Cart Action Coordinator
//!
//! Two independent flows, each `Idle -> Requesting -> Idle`: add-all creates
//! a cart with a single line item (quantity fixed at 1), remove-all deletes
//! the cart whose id rides on the triggering control's data attribute. Both
//! go through the same generic entry. There is deliberately no lock between
//! them: the buttons are mutually exclusive in practice, and a concurrent
//! trigger is simply two independent requests.
//!
//! On success the user gets a confirmation notice whose confirm action
//! reloads the page; cart totals appear in regions this controller cannot
//! reach, so a full reload is the honest refresh. On failure the same modal
//! surface carries an error notice; a failed cart action is never silent.

mod api;
mod error;
pub mod mock;

pub use api::{HttpStorefrontApi, StorefrontApi};
pub use error::CartError;

use std::future::Future;
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::dom::{selectors, DomSurface};
use crate::model::CartLineItems;

/// The alert-modal collaborator: shows a notice, optionally with an icon,
/// and runs the confirm action when the user accepts it.
pub trait AlertModal: Send + Sync {
    fn show(&self, message: &str, icon: Option<&str>, on_confirm: Box<dyn FnOnce() + Send>);
}

const ADDED_NOTICE: &str = "Product was added to the cart";
const REMOVED_NOTICE: &str = "Product was removed from the cart";
const ADD_FAILED_NOTICE: &str = "The product could not be added to the cart";
const REMOVE_FAILED_NOTICE: &str = "The cart could not be removed";

pub struct CartActionCoordinator<A, D, M>
where
    A: StorefrontApi,
    D: DomSurface,
    M: AlertModal,
{
    api: Arc<A>,
    dom: Arc<D>,
    modal: Arc<M>,
}

impl<A, D, M> CartActionCoordinator<A, D, M>
where
    A: StorefrontApi,
    D: DomSurface + 'static,
    M: AlertModal,
{
    pub fn new(api: Arc<A>, dom: Arc<D>, modal: Arc<M>) -> Self {
        Self { api, dom, modal }
    }

    /// Creates a cart holding one unit of `product_id`.
    #[instrument(skip(self))]
    pub async fn add_all(&self, product_id: u64) -> Result<(), CartError> {
        let payload = CartLineItems::single(product_id);
        self.perform(
            "add-all",
            self.api.create_cart(&payload),
            ADDED_NOTICE,
            ADD_FAILED_NOTICE,
        )
        .await
        .map(|_| ())
    }

    /// Deletes the cart named by the remove-all control's data attribute.
    /// The id is read fresh on every trigger, never cached.
    #[instrument(skip(self))]
    pub async fn remove_all(&self) -> Result<(), CartError> {
        let cart_id = match self
            .dom
            .attribute(selectors::REMOVE_ALL_FROM_CART, selectors::DATA_CART_ID)
        {
            Some(id) => id,
            None => {
                let err = CartError::MissingCartId;
                error!(error = %err, "remove-all misconfigured");
                self.modal.show(REMOVE_FAILED_NOTICE, None, Box::new(|| {}));
                return Err(err);
            }
        };
        self.perform(
            "remove-all",
            self.api.delete_cart(&cart_id),
            REMOVED_NOTICE,
            REMOVE_FAILED_NOTICE,
        )
        .await
    }

    /// The shared Idle -> Requesting -> Idle entry for both flows.
    async fn perform<T>(
        &self,
        action: &'static str,
        request: impl Future<Output = Result<T, CartError>>,
        confirmation: &str,
        failure: &str,
    ) -> Result<T, CartError> {
        match request.await {
            Ok(value) => {
                info!(action, "cart action succeeded");
                let dom = self.dom.clone();
                self.modal
                    .show(confirmation, None, Box::new(move || dom.reload()));
                Ok(value)
            }
            Err(err) => {
                error!(action, error = %err, "cart action failed");
                // Surfaced, not swallowed: the modal takes focus, so no
                // additional live-region churn is needed.
                self.modal.show(failure, None, Box::new(|| {}));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockAlertModal, MockStorefrontApi};
    use super::*;
    use crate::dom::mock::MockDom;
    use crate::model::Cart;

    fn coordinator(
        api: Arc<MockStorefrontApi>,
        dom: Arc<MockDom>,
        modal: Arc<MockAlertModal>,
    ) -> CartActionCoordinator<MockStorefrontApi, MockDom, MockAlertModal> {
        CartActionCoordinator::new(api, dom, modal)
    }

    #[tokio::test]
    async fn add_all_sends_a_single_line_item() {
        let api = Arc::new(MockStorefrontApi::new());
        api.expect_create(Ok(Cart { id: "abc123".into() }));
        let dom = Arc::new(MockDom::new());
        let modal = Arc::new(MockAlertModal::new());

        coordinator(api.clone(), dom, modal.clone())
            .add_all(112)
            .await
            .unwrap();

        assert_eq!(api.created(), vec![CartLineItems::single(112)]);
        assert_eq!(modal.shown(), vec![ADDED_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn confirming_the_add_notice_reloads_the_page() {
        let api = Arc::new(MockStorefrontApi::new());
        api.expect_create(Ok(Cart { id: "abc123".into() }));
        let dom = Arc::new(MockDom::new());
        let modal = Arc::new(MockAlertModal::auto_confirming());

        coordinator(api, dom.clone(), modal).add_all(112).await.unwrap();
        assert_eq!(dom.reload_count(), 1);
    }

    #[tokio::test]
    async fn remove_all_targets_the_dom_embedded_cart_id() {
        let api = Arc::new(MockStorefrontApi::new());
        api.expect_delete(Ok(()));
        let dom = Arc::new(MockDom::new().with_attribute(
            selectors::REMOVE_ALL_FROM_CART,
            selectors::DATA_CART_ID,
            "abc123",
        ));
        let modal = Arc::new(MockAlertModal::new());

        coordinator(api.clone(), dom, modal.clone())
            .remove_all()
            .await
            .unwrap();

        assert_eq!(api.deleted(), vec!["abc123".to_string()]);
        assert_eq!(modal.shown(), vec![REMOVED_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn missing_cart_id_is_surfaced_without_a_request() {
        let api = Arc::new(MockStorefrontApi::new());
        let dom = Arc::new(MockDom::new());
        let modal = Arc::new(MockAlertModal::new());

        let err = coordinator(api.clone(), dom, modal.clone())
            .remove_all()
            .await
            .unwrap_err();

        assert_eq!(err, CartError::MissingCartId);
        assert!(api.deleted().is_empty());
        assert_eq!(modal.shown(), vec![REMOVE_FAILED_NOTICE.to_string()]);
    }

    #[tokio::test]
    async fn failures_surface_a_notice_and_never_reload() {
        let api = Arc::new(MockStorefrontApi::new());
        api.expect_create(Err(CartError::Status(502)));
        let dom = Arc::new(MockDom::new());
        let modal = Arc::new(MockAlertModal::auto_confirming());

        let err = coordinator(api, dom.clone(), modal.clone())
            .add_all(112)
            .await
            .unwrap_err();

        assert_eq!(err, CartError::Status(502));
        assert_eq!(modal.shown(), vec![ADD_FAILED_NOTICE.to_string()]);
        assert_eq!(dom.reload_count(), 0);
    }
}
