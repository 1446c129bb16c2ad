//! Page assembly and teardown.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::info;

use super::{PageContext, PageError};
use crate::cart::{AlertModal, CartActionCoordinator, StorefrontApi};
use crate::controller::CategoryController;
use crate::dom::DomSurface;
use crate::events::{self, PageEvent};
use crate::fetcher::{FragmentFetcher, FragmentTransport};
use crate::notifier::{AccessibilityNotifier, ValidationMessages};
use crate::renderer::{ContentReset, RegionRenderer};

/// A running category page: the controller task plus the handles the host
/// needs: the event sender for the binding layer and the content-reset
/// subscription for the compare-products widget.
///
/// Dropping [`CategoryPage::events`] (or calling [`shutdown`]) closes the
/// channel and ends the controller loop.
///
/// [`shutdown`]: CategoryPage::shutdown
pub struct CategoryPage<D: DomSurface> {
    pub events: mpsc::Sender<PageEvent>,
    renderer: Arc<RegionRenderer<D>>,
    handle: tokio::task::JoinHandle<()>,
}

impl<D: DomSurface + 'static> CategoryPage<D> {
    /// Wires every component from the context and collaborator handles, then
    /// spawns the controller loop.
    ///
    /// # Errors
    ///
    /// [`PageError::MissingRegion`] when the document lacks a fragment
    /// region container.
    pub fn open<T, A, M>(
        context: PageContext,
        dom: Arc<D>,
        transport: Arc<T>,
        api: Arc<A>,
        modal: Arc<M>,
    ) -> Result<Self, PageError>
    where
        T: FragmentTransport + 'static,
        A: StorefrontApi + 'static,
        M: AlertModal + 'static,
    {
        let messages = ValidationMessages::from_dictionary(&context);
        let renderer = Arc::new(RegionRenderer::new(dom.clone())?);
        let fetcher = Arc::new(FragmentFetcher::new(transport));
        let notifier = Arc::new(AccessibilityNotifier::new(dom.clone(), messages));
        let cart = Arc::new(CartActionCoordinator::new(api, dom.clone(), modal));

        let (sender, receiver) = events::channel();
        let controller = CategoryController::new(
            dom,
            fetcher,
            renderer.clone(),
            notifier,
            cart,
            context,
            receiver,
        );
        let handle = tokio::spawn(controller.run());
        info!("category page opened");

        Ok(Self {
            events: sender,
            renderer,
            handle,
        })
    }

    /// Subscription for dependent widgets that must react to region swaps.
    pub fn subscribe_content_reset(&self) -> broadcast::Receiver<ContentReset> {
        self.renderer.subscribe_content_reset()
    }

    /// Ends the controller loop and waits for it to finish.
    ///
    /// # Errors
    ///
    /// [`PageError::ControllerTask`] if the controller task panicked.
    pub async fn shutdown(self) -> Result<(), PageError> {
        drop(self.events);
        self.handle
            .await
            .map_err(|err| PageError::ControllerTask(err.to_string()))?;
        info!("category page closed");
        Ok(())
    }
}
