//! Validation errors raised while decoding a price-filter submission.

use thiserror::Error;

/// The five validation cases the translation dictionary carries messages for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCase {
    /// The minimum bound is unacceptable on its own (negative).
    MinEvaluation,
    /// The maximum bound is below the minimum.
    MaxEvaluation,
    /// A maximum was given without a minimum.
    MinNotEntered,
    /// A minimum was given without a maximum.
    MaxNotEntered,
    /// A bound is not a usable number.
    InvalidValue,
}

impl ValidationCase {
    /// Key under which the storefront's translation dictionary stores the
    /// user-facing message for this case.
    pub fn dictionary_key(self) -> &'static str {
        match self {
            ValidationCase::MinEvaluation => "price_min_evaluation",
            ValidationCase::MaxEvaluation => "price_max_evaluation",
            ValidationCase::MinNotEntered => "price_min_not_entered",
            ValidationCase::MaxNotEntered => "price_max_not_entered",
            ValidationCase::InvalidValue => "price_invalid_value",
        }
    }
}

/// A rejected filter submission, tagged with the specific case so the
/// notifier can announce the matching dictionary message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("price filter rejected: {}", .case.dictionary_key())]
pub struct ValidationError {
    case: ValidationCase,
}

impl ValidationError {
    pub fn new(case: ValidationCase) -> Self {
        Self { case }
    }

    pub fn case(&self) -> ValidationCase {
        self.case
    }
}
