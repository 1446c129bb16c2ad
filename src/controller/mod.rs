//! # Category Controller
//!
//! The page's event loop. Receives [`PageEvent`]s sequentially and owns the
//! only mutable [`QueryState`]; everything long-running (fragment fetches,
//! cart requests) is spawned so the loop never blocks on I/O. Each spawned
//! fetch carries the fetcher's token guard, so a burst of filter clicks ends
//! with exactly the latest result on screen regardless of response order.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cart::{AlertModal, CartActionCoordinator, StorefrontApi};
use crate::codec;
use crate::dom::{selectors, DomSurface};
use crate::events::PageEvent;
use crate::fetcher::{FetchOutcome, FragmentFetcher, FragmentTransport};
use crate::lifecycle::PageContext;
use crate::model::QueryState;
use crate::notifier::{AccessibilityNotifier, AriaRole, Liveness};
use crate::renderer::RegionRenderer;

pub struct CategoryController<D, T, A, M>
where
    D: DomSurface + 'static,
    T: FragmentTransport + 'static,
    A: StorefrontApi + 'static,
    M: AlertModal + 'static,
{
    dom: Arc<D>,
    fetcher: Arc<FragmentFetcher<T>>,
    renderer: Arc<RegionRenderer<D>>,
    notifier: Arc<AccessibilityNotifier<D>>,
    cart: Arc<CartActionCoordinator<A, D, M>>,
    context: PageContext,
    state: QueryState,
    events: mpsc::Receiver<PageEvent>,
}

impl<D, T, A, M> CategoryController<D, T, A, M>
where
    D: DomSurface + 'static,
    T: FragmentTransport + 'static,
    A: StorefrontApi + 'static,
    M: AlertModal + 'static,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dom: Arc<D>,
        fetcher: Arc<FragmentFetcher<T>>,
        renderer: Arc<RegionRenderer<D>>,
        notifier: Arc<AccessibilityNotifier<D>>,
        cart: Arc<CartActionCoordinator<A, D, M>>,
        context: PageContext,
        events: mpsc::Receiver<PageEvent>,
    ) -> Self {
        Self {
            dom,
            fetcher,
            renderer,
            notifier,
            cart,
            context,
            state: QueryState::new(),
            events,
        }
    }

    /// Runs the loop until the event sender is dropped.
    pub async fn run(mut self) {
        self.on_ready();
        info!("category controller ready");
        while let Some(event) = self.events.recv().await {
            debug!(?event, "page event");
            self.handle(event);
        }
        info!("category controller stopped");
    }

    /// One-time duties when the page becomes interactive: restore focus to
    /// the sort-by control after a sort reload, focus the active price
    /// filter, and focus the empty-result notification if this load has one.
    fn on_ready(&self) {
        self.notifier.focus_if_present(selectors::SORT_BY_SELECT);
        if self.dom.contains(selectors::SHOP_BY_PRICE) {
            self.notifier.focus_if_present(selectors::PRICE_NAV_ACTIVE);
        }
        self.notifier.notify_no_products();
    }

    fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::FacetToggled { facet, value } => {
                self.state.toggle_facet(&facet, &value);
                self.refresh();
            }
            PageEvent::PriceFilterSubmitted { min, max } => {
                match codec::decode_price_range(min, max) {
                    Ok(range) => {
                        self.state.set_price_range(range);
                        self.refresh();
                    }
                    Err(err) => {
                        // No fetch on a rejected submission; the prior
                        // listing stays as-is while the message announces.
                        self.notifier.announce_validation(&err);
                    }
                }
            }
            PageEvent::SortSubmitted(sort) => {
                self.state.set_sort(sort);
                self.refresh();
            }
            PageEvent::PageRequested(page) => {
                self.state.set_page(page);
                self.refresh();
            }
            PageEvent::ResetClicked => {
                self.notifier.announce(
                    selectors::RESET_MESSAGE,
                    AriaRole::Status,
                    Liveness::Polite,
                );
                self.state = QueryState::new();
                self.refresh();
            }
            PageEvent::PriceNavClicked => {
                // Applying a price link is a routine content change, so the
                // message region queues politely rather than interrupting.
                self.notifier.announce(
                    selectors::PRICE_FILTER_MESSAGE,
                    AriaRole::Status,
                    Liveness::Polite,
                );
            }
            PageEvent::AddToCartClicked => {
                self.notifier.announce(
                    selectors::ADD_CART_MESSAGE,
                    AriaRole::Status,
                    Liveness::Polite,
                );
            }
            PageEvent::AddAllToCart => {
                let cart = self.cart.clone();
                let product_id = self.context.add_all_product_id;
                tokio::spawn(async move {
                    // Failure already surfaced inside the coordinator.
                    let _ = cart.add_all(product_id).await;
                });
            }
            PageEvent::RemoveAllFromCart => {
                let cart = self.cart.clone();
                tokio::spawn(async move {
                    let _ = cart.remove_all().await;
                });
            }
            PageEvent::CardHoverToggled => {
                self.dom
                    .toggle_child_class(selectors::CARD_IMAGE_CONTAINER, selectors::HIDE_CLASS);
            }
        }
    }

    /// Spawns a fetch for the current state. The token guard inside the
    /// fetcher decides whether the response still matters when it lands.
    fn refresh(&self) {
        let fetcher = self.fetcher.clone();
        let renderer = self.renderer.clone();
        let notifier = self.notifier.clone();
        let state = self.state.clone();
        tokio::spawn(async move {
            match fetcher.fetch(&state).await {
                Ok(FetchOutcome::Fresh(response)) => {
                    renderer.render(response);
                    notifier.notify_no_products();
                }
                Ok(FetchOutcome::Superseded) => {}
                Err(err) => {
                    // Prior DOM state is preserved; the user retries by
                    // interacting again.
                    warn!(error = %err, "fragment fetch failed");
                }
            }
        });
    }
}
