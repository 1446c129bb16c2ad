//! # Page Events
//!
//! Rather than binding handlers through ambient framework hooks, the binding
//! layer is an explicit subscription: whatever owns the real DOM event
//! listeners translates them into [`PageEvent`]s and sends them down an mpsc
//! channel. The controller consumes the channel sequentially, so page
//! logic stays single-threaded even though I/O is asynchronous.
//!
//! Teardown is dropping the sender: the controller loop ends when the channel
//! closes, the same way an actor shuts down when its mailbox does.

use tokio::sync::mpsc;

use crate::model::SortKey;

/// A user interaction forwarded from the page's event bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// A facet link was clicked; toggles the value in the query state.
    FacetToggled { facet: String, value: String },
    /// The price-filter form was submitted with its raw field contents.
    PriceFilterSubmitted {
        min: Option<String>,
        max: Option<String>,
    },
    /// The sort-by form was submitted.
    SortSubmitted(SortKey),
    /// A pagination link was clicked.
    PageRequested(u32),
    /// The clear-filters link was clicked.
    ResetClicked,
    /// A shop-by-price navigation link was clicked.
    PriceNavClicked,
    /// A per-product add-to-cart button was clicked.
    AddToCartClicked,
    /// The add-all-to-cart control was clicked.
    AddAllToCart,
    /// The remove-all control was clicked.
    RemoveAllFromCart,
    /// The pointer entered or left a product card.
    CardHoverToggled,
}

/// Channel buffer; generous for human-paced interaction.
pub const EVENT_BUFFER: usize = 32;

/// Creates the page-event channel the controller consumes.
pub fn channel() -> (mpsc::Sender<PageEvent>, mpsc::Receiver<PageEvent>) {
    mpsc::channel(EVENT_BUFFER)
}
