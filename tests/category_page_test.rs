use std::sync::Arc;

use category_controller::cart::mock::{MockAlertModal, MockStorefrontApi};
use category_controller::dom::mock::{DomCall, MockDom};
use category_controller::dom::selectors;
use category_controller::dom::DomSurface;
use category_controller::events::PageEvent;
use category_controller::fetcher::mock::{sample_response, MockTransport};
use category_controller::lifecycle::{CategoryPage, PageContext, PageError};
use category_controller::model::{Cart, CartLineItems};
use category_controller::renderer::ContentReset;

/// Lets the controller loop and any spawned fetch/cart tasks run to their
/// next await point. The tests run on the current-thread runtime, so a
/// handful of yields deterministically drains everything that is not parked
/// on a gate.
async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}

fn dom_with_regions() -> MockDom {
    MockDom::new()
        .with_element(selectors::PRODUCT_LISTING_CONTAINER)
        .with_element(selectors::SIDEBAR_CONTAINER)
}

fn context() -> PageContext {
    let mut context = PageContext::new("https://shop.test");
    context.translations.insert(
        "price_max_evaluation".to_string(),
        "The maximum price must be greater than the minimum price.".to_string(),
    );
    context
}

struct Page {
    page: CategoryPage<MockDom>,
    dom: Arc<MockDom>,
    transport: Arc<MockTransport>,
    api: Arc<MockStorefrontApi>,
    modal: Arc<MockAlertModal>,
}

fn open_page(dom: MockDom, modal: MockAlertModal) -> Page {
    let dom = Arc::new(dom);
    let transport = Arc::new(MockTransport::new());
    let api = Arc::new(MockStorefrontApi::new());
    let modal = Arc::new(modal);
    let page = CategoryPage::open(
        context(),
        dom.clone(),
        transport.clone(),
        api.clone(),
        modal.clone(),
    )
    .expect("page should open");
    Page {
        page,
        dom,
        transport,
        api,
        modal,
    }
}

#[tokio::test]
async fn price_range_renders_both_regions_and_resets_compare_once() {
    let fixture = open_page(dom_with_regions(), MockAlertModal::new());
    fixture.transport.enqueue_ok(sample_response("filtered"));
    let mut reset = fixture.page.subscribe_content_reset();

    fixture
        .page
        .events
        .send(PageEvent::PriceFilterSubmitted {
            min: Some("10".to_string()),
            max: Some("50".to_string()),
        })
        .await
        .unwrap();
    settle().await;

    // The encoded query carried both bounds.
    assert_eq!(
        fixture.transport.queries(),
        vec!["min_price=10&max_price=50".to_string()]
    );

    // Listing replaced before sidebar.
    let replacements: Vec<_> = fixture
        .dom
        .calls()
        .into_iter()
        .filter(|call| matches!(call, DomCall::ReplaceHtml { .. }))
        .collect();
    assert_eq!(
        replacements,
        vec![
            DomCall::ReplaceHtml {
                selector: selectors::PRODUCT_LISTING_CONTAINER.into()
            },
            DomCall::ReplaceHtml {
                selector: selectors::SIDEBAR_CONTAINER.into()
            },
        ]
    );

    // Compare-selection reset fired exactly once.
    assert_eq!(reset.try_recv().unwrap(), ContentReset);
    assert!(reset.try_recv().is_err());

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn stale_response_never_overwrites_a_fresher_one() {
    let fixture = open_page(dom_with_regions(), MockAlertModal::new());
    let gate_first = fixture.transport.enqueue_gated();
    let gate_second = fixture.transport.enqueue_gated();

    fixture
        .page
        .events
        .send(PageEvent::FacetToggled {
            facet: "brand".to_string(),
            value: "acme".to_string(),
        })
        .await
        .unwrap();
    settle().await;

    fixture
        .page
        .events
        .send(PageEvent::FacetToggled {
            facet: "color".to_string(),
            value: "red".to_string(),
        })
        .await
        .unwrap();
    settle().await;

    // The second request resolves first; the first lands late and stale.
    gate_second.send(Ok(sample_response("second"))).unwrap();
    gate_first.send(Ok(sample_response("first"))).unwrap();
    settle().await;

    assert_eq!(
        fixture.dom.html(selectors::PRODUCT_LISTING_CONTAINER),
        Some(sample_response("second").product_listing)
    );
    // One render, not two.
    let replacements = fixture
        .dom
        .calls()
        .into_iter()
        .filter(|call| matches!(call, DomCall::ReplaceHtml { .. }))
        .count();
    assert_eq!(replacements, 2);

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_price_range_announces_assertively_without_fetching() {
    let fixture = open_page(dom_with_regions(), MockAlertModal::new());

    fixture
        .page
        .events
        .send(PageEvent::PriceFilterSubmitted {
            min: Some("100".to_string()),
            max: Some("10".to_string()),
        })
        .await
        .unwrap();
    settle().await;

    assert!(fixture.transport.queries().is_empty(), "no fetch on rejection");
    assert_eq!(
        fixture.dom.text(selectors::PRICE_FILTER_MESSAGE).as_deref(),
        Some("The maximum price must be greater than the minimum price.")
    );
    assert_eq!(
        fixture
            .dom
            .attribute(selectors::PRICE_FILTER_MESSAGE, "aria-live")
            .as_deref(),
        Some("assertive")
    );

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn add_all_creates_a_cart_and_confirm_reloads() {
    let fixture = open_page(dom_with_regions(), MockAlertModal::auto_confirming());
    fixture
        .api
        .expect_create(Ok(Cart { id: "abc123".to_string() }));

    fixture.page.events.send(PageEvent::AddAllToCart).await.unwrap();
    settle().await;

    assert_eq!(fixture.api.created(), vec![CartLineItems::single(112)]);
    assert_eq!(
        fixture.modal.shown(),
        vec!["Product was added to the cart".to_string()]
    );
    assert_eq!(fixture.dom.reload_count(), 1);

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn remove_all_deletes_the_cart_from_the_data_attribute() {
    let dom = dom_with_regions().with_attribute(
        selectors::REMOVE_ALL_FROM_CART,
        selectors::DATA_CART_ID,
        "abc123",
    );
    let fixture = open_page(dom, MockAlertModal::new());
    fixture.api.expect_delete(Ok(()));

    fixture
        .page
        .events
        .send(PageEvent::RemoveAllFromCart)
        .await
        .unwrap();
    settle().await;

    assert_eq!(fixture.api.deleted(), vec!["abc123".to_string()]);
    assert_eq!(
        fixture.modal.shown(),
        vec!["Product was removed from the cart".to_string()]
    );

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn fetch_failure_leaves_the_regions_untouched() {
    let fixture = open_page(dom_with_regions(), MockAlertModal::new());
    fixture
        .transport
        .enqueue_err(category_controller::fetcher::FetchError::Status(500));

    fixture
        .page
        .events
        .send(PageEvent::FacetToggled {
            facet: "brand".to_string(),
            value: "acme".to_string(),
        })
        .await
        .unwrap();
    settle().await;

    assert!(fixture.dom.html(selectors::PRODUCT_LISTING_CONTAINER).is_none());

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn add_to_cart_click_marks_a_polite_live_region() {
    let fixture = open_page(dom_with_regions(), MockAlertModal::new());

    fixture
        .page
        .events
        .send(PageEvent::AddToCartClicked)
        .await
        .unwrap();
    settle().await;

    assert_eq!(
        fixture
            .dom
            .attribute(selectors::ADD_CART_MESSAGE, "aria-live")
            .as_deref(),
        Some("polite")
    );

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn no_products_notification_gets_focus_on_ready() {
    let dom = dom_with_regions().with_element(selectors::NO_PRODUCTS_NOTIFICATION);
    let fixture = open_page(dom, MockAlertModal::new());
    settle().await;

    assert_eq!(
        fixture.dom.focused(),
        vec![selectors::NO_PRODUCTS_NOTIFICATION.to_string()]
    );

    fixture.page.shutdown().await.unwrap();
}

#[tokio::test]
async fn opening_without_region_containers_fails_fast() {
    let dom = Arc::new(MockDom::new());
    let result = CategoryPage::open(
        context(),
        dom,
        Arc::new(MockTransport::new()),
        Arc::new(MockStorefrontApi::new()),
        Arc::new(MockAlertModal::new()),
    );
    assert_eq!(
        result.err(),
        Some(PageError::MissingRegion(selectors::PRODUCT_LISTING_CONTAINER))
    );
}
