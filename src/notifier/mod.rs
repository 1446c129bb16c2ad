//! # Accessibility Notifier
//!
//! Keeps assistive technology in sync with content that changes without a
//! navigation. Two liveness levels, and the split is a hard contract:
//! `assertive` (interrupts the screen reader) is reserved for validation and
//! error conditions; `polite` (queues after current output) is for routine
//! informational updates like "item added".

mod messages;

pub use messages::{TranslationDictionary, ValidationMessages};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec::ValidationError;
use crate::dom::{selectors, DomSurface};

/// ARIA live-region interruption policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Polite,
    Assertive,
}

impl Liveness {
    pub fn as_str(self) -> &'static str {
        match self {
            Liveness::Polite => "polite",
            Liveness::Assertive => "assertive",
        }
    }
}

/// ARIA role applied to a live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    Status,
    Alert,
}

impl AriaRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AriaRole::Status => "status",
            AriaRole::Alert => "alert",
        }
    }
}

pub struct AccessibilityNotifier<D: DomSurface> {
    dom: Arc<D>,
    messages: ValidationMessages,
}

impl<D: DomSurface> AccessibilityNotifier<D> {
    pub fn new(dom: Arc<D>, messages: ValidationMessages) -> Self {
        Self { dom, messages }
    }

    /// Marks an element as a live region. Idempotent: attributes already at
    /// the requested values are not rewritten.
    pub fn announce(&self, selector: &str, role: AriaRole, liveness: Liveness) {
        if self.dom.attribute(selector, "role").as_deref() != Some(role.as_str()) {
            self.dom.set_attribute(selector, "role", role.as_str());
        }
        if self.dom.attribute(selector, "aria-live").as_deref() != Some(liveness.as_str()) {
            self.dom
                .set_attribute(selector, "aria-live", liveness.as_str());
        }
        debug!(selector, role = role.as_str(), liveness = liveness.as_str(), "live region set");
    }

    /// Moves keyboard focus to the first match; no-op when absent.
    /// Covers both the "no products found" notification and the active
    /// price-filter link.
    pub fn focus_if_present(&self, selector: &str) -> bool {
        let focused = self.dom.focus(selector);
        debug!(selector, focused, "focus requested");
        focused
    }

    /// Displays and assertively announces a price-filter validation failure.
    pub fn announce_validation(&self, error: &ValidationError) {
        let message = self.messages.message(error.case());
        self.dom.set_text(selectors::PRICE_FILTER_MESSAGE, message);
        self.announce(
            selectors::PRICE_FILTER_MESSAGE,
            AriaRole::Status,
            Liveness::Assertive,
        );
        warn!(case = ?error.case(), "price filter rejected");
    }

    /// Focuses the empty-result notification when the listing has none.
    pub fn notify_no_products(&self) {
        self.focus_if_present(selectors::NO_PRODUCTS_NOTIFICATION);
    }
}
