//! The selector contract between the controller and the category templates.
//!
//! These are treated as a stable interface: renaming an element in the
//! templates without updating its selector here breaks the page at startup
//! (for the fragment regions) or silently disables a behavior (for the rest).

/// Root container whose presence enables the faceted-search cycle.
pub const FACETED_SEARCH_ROOT: &str = "#facetedSearch";

/// Region replaced first on every successful fragment fetch.
pub const PRODUCT_LISTING_CONTAINER: &str = "#product-listing-container";

/// Sidebar region, replaced after the listing so facet counts match it.
pub const SIDEBAR_CONTAINER: &str = "#faceted-search-container";

/// Wrapper around the shop-by-price filter controls.
pub const SHOP_BY_PRICE: &str = "[data-shop-by-price]";

/// Price-filter navigation links.
pub const PRICE_NAV_ACTION: &str = "a.navList-action";

/// The currently applied price-filter link, if any.
pub const PRICE_NAV_ACTIVE: &str = "a.navList-action.is-active";

/// Inline message span for the price filter; doubles as its live region.
pub const PRICE_FILTER_MESSAGE: &str = "span.price-filter-message";

/// Per-product add-to-cart buttons.
pub const ADD_CART_BUTTON: &str = "[data-button-type=\"add-cart\"]";

/// Live-region span immediately following an add-to-cart button.
pub const ADD_CART_MESSAGE: &str = "[data-button-type=\"add-cart\"] + span";

/// The add-all-to-cart control.
pub const ADD_ALL_TO_CART: &str = "#add_all_to_cart";

/// The remove-all control; carries the cart id in [`DATA_CART_ID`].
pub const REMOVE_ALL_FROM_CART: &str = "#remove_all_from_cart";

/// Data attribute on [`REMOVE_ALL_FROM_CART`] holding the server cart id.
pub const DATA_CART_ID: &str = "data-cart-id";

/// Focused when a filter produces an empty result set.
pub const NO_PRODUCTS_NOTIFICATION: &str = "[data-no-products-notification]";

/// Product-card image container whose children swap on hover.
pub const CARD_IMAGE_CONTAINER: &str = ".card-img-container";

/// Clear-filters link and its live-region message span.
pub const RESET_BUTTON: &str = "a.reset-btn";
pub const RESET_MESSAGE: &str = "span.reset-message";

/// Sort-by select; focus lands here after a sort submission.
pub const SORT_BY_SELECT: &str = "[data-sort-by] select";

/// Class toggled on card images for the hover swap.
pub const HIDE_CLASS: &str = "hide";
