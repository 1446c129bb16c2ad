//! # DOM Surface Seam
//!
//! The page framework owns the real document; this crate only ever talks to
//! it through [`DomSurface`]. The trait is deliberately narrow: presence
//! checks, innerHTML replacement, attributes, focus, a class toggle, and the
//! two whole-page effects (scroll-to-top, reload).
//!
//! Selectors are part of the stable contract between the controller and the
//! storefront templates; see [`selectors`].

pub mod mock;
pub mod selectors;

use std::time::Duration;

/// Host-page surface the controller mutates.
///
/// Implementations are expected to treat a missing selector as a no-op for
/// mutations and `false`/`None` for queries; region presence is verified once
/// at startup, not on every call.
pub trait DomSurface: Send + Sync {
    /// True when at least one element matches the selector.
    fn contains(&self, selector: &str) -> bool;

    /// Replaces the inner HTML of the first matching element.
    fn replace_html(&self, selector: &str, html: &str);

    /// Replaces the text content of the first matching element.
    fn set_text(&self, selector: &str, text: &str);

    fn set_attribute(&self, selector: &str, name: &str, value: &str);

    fn attribute(&self, selector: &str, name: &str) -> Option<String>;

    /// Moves keyboard focus to the first matching element.
    /// Returns whether anything was focused.
    fn focus(&self, selector: &str) -> bool;

    /// Toggles a class on every child of the first matching element.
    /// Used for the second-image-on-hover effect on product cards.
    fn toggle_child_class(&self, selector: &str, class: &str);

    /// Animated scroll to the top of the page. Cosmetic; fire-and-forget.
    fn scroll_to_top(&self, duration: Duration);

    /// Full page navigation reload.
    fn reload(&self);
}
