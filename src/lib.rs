//! # Category Page Controller
//!
//! > **Faceted-search coordination for an e-commerce category page.**
//!
//! This crate models a storefront category-listing page as a small actor:
//! a single event loop consumes page events (filter clicks, sort submissions,
//! cart buttons) and coordinates a request/render cycle against a server that
//! returns pre-rendered HTML fragments.
//!
//! ## Core Flow
//!
//! 1. A user interaction updates the [`QueryState`](model::QueryState).
//! 2. The [`FragmentFetcher`](fetcher::FragmentFetcher) issues a token-guarded
//!    asynchronous request for new page fragments.
//! 3. On success, the [`RegionRenderer`](renderer::RegionRenderer) swaps the
//!    product-listing and sidebar regions (in that order) and broadcasts a
//!    content-reset signal for dependent widgets.
//! 4. The [`AccessibilityNotifier`](notifier::AccessibilityNotifier) keeps
//!    ARIA live regions and keyboard focus in sync with the new content.
//!
//! Cart actions (add-all, remove-all) bypass the query state and go straight
//! through the storefront HTTP API, then confirm via the alert modal.
//!
//! ## Concurrency Model
//!
//! Everything runs on one cooperative event loop. Fetches are spawned so the
//! loop stays responsive; a monotonically increasing request token ensures a
//! stale response never overwrites the DOM after a fresher request was issued.
//! That token check is the only cancellation mechanism.
//!
//! ## Module Tour
//!
//! - [`model`]: pure data: query state, fragments, cart wire types.
//! - [`codec`]: query-string encode/decode with price-range validation.
//! - [`dom`]: the DOM surface seam, selector contract, and a recording mock.
//! - [`events`]: the page-event channel that replaces ambient framework hooks.
//! - [`fetcher`]: token-guarded fragment fetching over a transport seam.
//! - [`renderer`]: ordered region replacement and the content-reset signal.
//! - [`notifier`]: ARIA live regions, focus movement, validation messages.
//! - [`cart`]: add-all / remove-all flows against the storefront API.
//! - [`controller`]: the event loop tying the components together.
//! - [`lifecycle`]: page assembly, shutdown, and tracing setup.
//!
//! ## Testing
//!
//! Collaborators (DOM, fragment transport, storefront API, alert modal) are
//! traits with public mocks, so the whole page can be driven end-to-end in
//! `#[tokio::test]` without a browser or a server.

pub mod cart;
pub mod codec;
pub mod controller;
pub mod dom;
pub mod events;
pub mod fetcher;
pub mod lifecycle;
pub mod model;
pub mod notifier;
pub mod renderer;
