//! # Region Renderer
//!
//! Swaps the fetched fragments into the page. Ordering is part of the
//! contract: the product listing is replaced before the sidebar, because the
//! sidebar's facet counts describe the listing that was just applied. After
//! both replacements a single content-reset signal is broadcast so dependent
//! widgets (the compare-products selection) can drop references to product
//! cards that no longer exist, and a short scroll-to-top animation is fired.
//!
//! Rendering never fails. Missing region containers are a page configuration
//! error and are caught once, at construction.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::debug;

use crate::dom::{selectors, DomSurface};
use crate::lifecycle::PageError;
use crate::model::{FragmentResponse, Region};

/// Duration of the cosmetic scroll-to-top animation.
pub const SCROLL_DURATION: Duration = Duration::from_millis(100);

/// Render order is part of the contract: listing first, sidebar second.
const RENDER_ORDER: [(Region, &str); 2] = [
    (Region::ProductListing, selectors::PRODUCT_LISTING_CONTAINER),
    (Region::Sidebar, selectors::SIDEBAR_CONTAINER),
];

/// Marker broadcast after every render; compare-products listens for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentReset;

#[derive(Debug)]
pub struct RegionRenderer<D: DomSurface> {
    dom: Arc<D>,
    reset: broadcast::Sender<ContentReset>,
}

impl<D: DomSurface> RegionRenderer<D> {
    /// Builds a renderer, verifying both region containers exist.
    ///
    /// # Errors
    ///
    /// [`PageError::MissingRegion`] when the document lacks a container, a
    /// caller configuration error surfaced at startup rather than on the
    /// first render.
    pub fn new(dom: Arc<D>) -> Result<Self, PageError> {
        for (_, selector) in RENDER_ORDER {
            if !dom.contains(selector) {
                return Err(PageError::MissingRegion(selector));
            }
        }
        let (reset, _) = broadcast::channel(8);
        Ok(Self { dom, reset })
    }

    /// Subscribes to the content-reset signal.
    pub fn subscribe_content_reset(&self) -> broadcast::Receiver<ContentReset> {
        self.reset.subscribe()
    }

    /// Replaces the listing, then the sidebar, signals the reset, scrolls up.
    pub fn render(&self, response: FragmentResponse) {
        for (region, selector) in RENDER_ORDER {
            self.dom.replace_html(selector, response.region(region));
            debug!(region = region.as_str(), "region replaced");
        }
        // Send errors just mean nobody is subscribed right now.
        let _ = self.reset.send(ContentReset);
        self.dom.scroll_to_top(SCROLL_DURATION);
        debug!("page regions rendered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::mock::{DomCall, MockDom};
    use crate::fetcher::mock::sample_response;

    fn dom_with_regions() -> Arc<MockDom> {
        Arc::new(
            MockDom::new()
                .with_element(selectors::PRODUCT_LISTING_CONTAINER)
                .with_element(selectors::SIDEBAR_CONTAINER),
        )
    }

    #[test]
    fn construction_fails_when_a_region_is_missing() {
        let dom = Arc::new(MockDom::new().with_element(selectors::PRODUCT_LISTING_CONTAINER));
        let err = RegionRenderer::new(dom).unwrap_err();
        assert_eq!(err, PageError::MissingRegion(selectors::SIDEBAR_CONTAINER));
    }

    #[tokio::test]
    async fn renders_listing_before_sidebar_and_resets_once() {
        let dom = dom_with_regions();
        let renderer = RegionRenderer::new(dom.clone()).unwrap();
        let mut reset = renderer.subscribe_content_reset();

        renderer.render(sample_response("x"));

        let calls = dom.calls();
        assert_eq!(
            calls,
            vec![
                DomCall::ReplaceHtml {
                    selector: selectors::PRODUCT_LISTING_CONTAINER.into()
                },
                DomCall::ReplaceHtml {
                    selector: selectors::SIDEBAR_CONTAINER.into()
                },
                DomCall::ScrollToTop,
            ]
        );

        // Exactly one reset signal.
        assert_eq!(reset.try_recv().unwrap(), ContentReset);
        assert!(reset.try_recv().is_err());
    }

    #[tokio::test]
    async fn rendering_without_subscribers_is_fine() {
        let dom = dom_with_regions();
        let renderer = RegionRenderer::new(dom.clone()).unwrap();
        renderer.render(sample_response("x"));
        assert!(dom.html(selectors::SIDEBAR_CONTAINER).is_some());
    }
}
