//! Query state for the faceted-search request cycle.
//!
//! A [`QueryState`] captures everything the server needs to render a filtered
//! category page: facet selections, sort order, page number, and an optional
//! price range. It is a pure value type; the URL representation lives in
//! [`crate::codec`].

use std::collections::{BTreeMap, BTreeSet};

use crate::codec::{ValidationCase, ValidationError};

/// Sort orders offered by the category page, with their stable wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Featured,
    Newest,
    BestSelling,
    AlphaAsc,
    AlphaDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// The value carried in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::BestSelling => "bestselling",
            SortKey::AlphaAsc => "alphaasc",
            SortKey::AlphaDesc => "alphadesc",
            SortKey::PriceAsc => "priceasc",
            SortKey::PriceDesc => "pricedesc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "featured" => Some(SortKey::Featured),
            "newest" => Some(SortKey::Newest),
            "bestselling" => Some(SortKey::BestSelling),
            "alphaasc" => Some(SortKey::AlphaAsc),
            "alphadesc" => Some(SortKey::AlphaDesc),
            "priceasc" => Some(SortKey::PriceAsc),
            "pricedesc" => Some(SortKey::PriceDesc),
            _ => None,
        }
    }
}

/// An inclusive price window. Both bounds are always present; a half-open
/// range is represented by not having a `PriceRange` at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Validates and builds a range.
    ///
    /// A negative minimum reports the min-bound case; a maximum below the
    /// minimum reports the max-bound case. Never clamps.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ValidationError::new(ValidationCase::InvalidValue));
        }
        if min < 0.0 {
            return Err(ValidationError::new(ValidationCase::MinEvaluation));
        }
        if max < min {
            return Err(ValidationError::new(ValidationCase::MaxEvaluation));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// The full selection a user has made on the category page.
///
/// Facet values have set semantics: selection order is irrelevant and
/// duplicates collapse. `BTreeMap`/`BTreeSet` keep the encoded form stable,
/// which is what makes the codec round-trip law testable.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    facets: BTreeMap<String, BTreeSet<String>>,
    sort: SortKey,
    page: u32,
    price_range: Option<PriceRange>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            facets: BTreeMap::new(),
            sort: SortKey::default(),
            page: 1,
            price_range: None,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a facet value. Re-adding an already-selected value is a no-op.
    pub fn select_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.facets
            .entry(facet.into())
            .or_default()
            .insert(value.into());
    }

    /// Removes a facet value; drops the facet entirely once empty.
    pub fn deselect_facet(&mut self, facet: &str, value: &str) {
        if let Some(values) = self.facets.get_mut(facet) {
            values.remove(value);
            if values.is_empty() {
                self.facets.remove(facet);
            }
        }
    }

    /// Toggles a facet value and resets pagination, since the result set
    /// under the new filter has no relationship to the old page number.
    pub fn toggle_facet(&mut self, facet: &str, value: &str) {
        let selected = self
            .facets
            .get(facet)
            .is_some_and(|values| values.contains(value));
        if selected {
            self.deselect_facet(facet, value);
        } else {
            self.select_facet(facet, value);
        }
        self.page = 1;
    }

    pub fn facets(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.facets
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Sets the page number; zero is treated as page one.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
        self.page = 1;
    }

    /// True when nothing is filtered, sorted, or paged beyond the defaults.
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }
}
