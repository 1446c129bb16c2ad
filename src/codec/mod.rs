//! # Query State Codec
//!
//! Serializes a [`QueryState`] to the query-string form the fragment endpoint
//! expects, and decodes one back. The two directions round-trip:
//! `decode(&encode(s)) == Ok(s)` for every valid state.
//!
//! Default values (page 1, featured sort, no price range) are omitted from
//! the encoded form, so an unfiltered page encodes to an empty string.
//!
//! Decoding validates rather than clamps: a price range that fails the
//! min <= max invariant comes back as a [`ValidationError`] tagged with the
//! specific case, never as a silently adjusted range.

mod error;

pub use error::{ValidationCase, ValidationError};

use url::form_urlencoded;

use crate::model::{PriceRange, QueryState, SortKey};

// Parameter names reserved by the page itself; everything else is a facet.
const PARAM_SORT: &str = "sort";
const PARAM_PAGE: &str = "page";
const PARAM_MIN_PRICE: &str = "min_price";
const PARAM_MAX_PRICE: &str = "max_price";

/// Encodes a state as `application/x-www-form-urlencoded` pairs.
///
/// Facets come first in key order, each selected value as its own pair, so
/// multi-select facets appear as repeated keys the way the server expects.
pub fn encode(state: &QueryState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (facet, values) in state.facets() {
        for value in values {
            serializer.append_pair(facet, value);
        }
    }

    if let Some(range) = state.price_range() {
        serializer.append_pair(PARAM_MIN_PRICE, &range.min().to_string());
        serializer.append_pair(PARAM_MAX_PRICE, &range.max().to_string());
    }

    if state.page() != 1 {
        serializer.append_pair(PARAM_PAGE, &state.page().to_string());
    }

    if state.sort() != SortKey::default() {
        serializer.append_pair(PARAM_SORT, state.sort().as_str());
    }

    serializer.finish()
}

/// Decodes a query string back into a [`QueryState`].
///
/// # Errors
///
/// Returns the tagged [`ValidationError`] for malformed price bounds
/// (the five dictionary cases), an unknown sort value, or an unusable
/// page number.
pub fn decode(query: &str) -> Result<QueryState, ValidationError> {
    let mut state = QueryState::new();
    let mut min_price: Option<String> = None;
    let mut max_price: Option<String> = None;
    let mut page: Option<u32> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PARAM_SORT => {
                let sort = SortKey::parse(&value)
                    .ok_or_else(|| ValidationError::new(ValidationCase::InvalidValue))?;
                state.set_sort(sort);
            }
            PARAM_PAGE => {
                let parsed: u32 = value
                    .parse()
                    .map_err(|_| ValidationError::new(ValidationCase::InvalidValue))?;
                page = Some(parsed);
            }
            PARAM_MIN_PRICE => min_price = Some(value.into_owned()),
            PARAM_MAX_PRICE => max_price = Some(value.into_owned()),
            facet => state.select_facet(facet, value.as_ref()),
        }
    }

    state.set_price_range(decode_price_range(min_price, max_price)?);
    // Applied last: the sort and price mutators reset pagination.
    if let Some(page) = page {
        state.set_page(page);
    }
    Ok(state)
}

/// Validates the optional price bounds from a submission.
///
/// Missing-bound cases fire before numeric parsing, which fires before the
/// cross-bound check, so the user always sees the most actionable message.
pub fn decode_price_range(
    min: Option<String>,
    max: Option<String>,
) -> Result<Option<PriceRange>, ValidationError> {
    let (min, max) = match (min, max) {
        (None, None) => return Ok(None),
        (Some(_), None) => return Err(ValidationError::new(ValidationCase::MaxNotEntered)),
        (None, Some(_)) => return Err(ValidationError::new(ValidationCase::MinNotEntered)),
        (Some(min), Some(max)) => (min, max),
    };

    let min: f64 = parse_price(&min)?;
    let max: f64 = parse_price(&max)?;
    PriceRange::new(min, max).map(Some)
}

fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::new(ValidationCase::InvalidValue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> QueryState {
        let mut state = QueryState::new();
        state.select_facet("brand", "acme");
        state.select_facet("brand", "zenith");
        state.select_facet("color", "red");
        state.set_sort(SortKey::PriceAsc);
        state.set_price_range(Some(PriceRange::new(10.0, 50.0).unwrap()));
        state.set_page(3);
        state
    }

    #[test]
    fn round_trips_a_full_state() {
        let state = sample_state();
        let decoded = decode(&encode(&state)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn round_trips_the_default_state() {
        let state = QueryState::new();
        assert_eq!(encode(&state), "");
        assert_eq!(decode("").unwrap(), state);
    }

    #[test]
    fn multi_select_facets_encode_as_repeated_keys() {
        let mut state = QueryState::new();
        state.select_facet("brand", "acme");
        state.select_facet("brand", "zenith");
        assert_eq!(encode(&state), "brand=acme&brand=zenith");
    }

    #[test]
    fn rejects_inverted_price_range_with_max_case() {
        let err = decode("min_price=100&max_price=10").unwrap_err();
        assert_eq!(err.case(), ValidationCase::MaxEvaluation);
    }

    #[test]
    fn rejects_lone_bounds_with_not_entered_cases() {
        let err = decode("min_price=10").unwrap_err();
        assert_eq!(err.case(), ValidationCase::MaxNotEntered);

        let err = decode("max_price=10").unwrap_err();
        assert_eq!(err.case(), ValidationCase::MinNotEntered);
    }

    #[test]
    fn rejects_non_numeric_bounds() {
        let err = decode("min_price=cheap&max_price=50").unwrap_err();
        assert_eq!(err.case(), ValidationCase::InvalidValue);
    }

    #[test]
    fn rejects_unknown_sort_values() {
        let err = decode("sort=sideways").unwrap_err();
        assert_eq!(err.case(), ValidationCase::InvalidValue);
    }

    #[test]
    fn page_survives_alongside_filters() {
        let decoded = decode("brand=acme&page=5").unwrap();
        assert_eq!(decoded.page(), 5);
        assert!(decoded.facets().contains_key("brand"));
    }
}
