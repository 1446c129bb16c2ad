//! Validation messages sourced from the storefront's translation dictionary.

use tracing::warn;

use crate::codec::ValidationCase;

/// Lookup into the storefront's translation dictionary. The dictionary
/// itself is an external collaborator; the page only reads five keys from
/// it, once, at construction.
pub trait TranslationDictionary: Send + Sync {
    fn translate(&self, key: &str) -> Option<String>;
}

/// The five price-filter messages, resolved once and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessages {
    min_evaluation: String,
    max_evaluation: String,
    min_not_entered: String,
    max_not_entered: String,
    invalid_value: String,
}

impl ValidationMessages {
    /// Resolves every case from the dictionary, falling back to a built-in
    /// English string (with a warning) when a key is missing.
    pub fn from_dictionary(dictionary: &dyn TranslationDictionary) -> Self {
        let resolve = |case: ValidationCase, fallback: &str| {
            dictionary.translate(case.dictionary_key()).unwrap_or_else(|| {
                warn!(key = case.dictionary_key(), "translation missing, using fallback");
                fallback.to_string()
            })
        };
        Self {
            min_evaluation: resolve(
                ValidationCase::MinEvaluation,
                "The minimum price must not be negative.",
            ),
            max_evaluation: resolve(
                ValidationCase::MaxEvaluation,
                "The maximum price must be greater than the minimum price.",
            ),
            min_not_entered: resolve(
                ValidationCase::MinNotEntered,
                "A minimum price is required.",
            ),
            max_not_entered: resolve(
                ValidationCase::MaxNotEntered,
                "A maximum price is required.",
            ),
            invalid_value: resolve(
                ValidationCase::InvalidValue,
                "Please enter a valid price.",
            ),
        }
    }

    pub fn message(&self, case: ValidationCase) -> &str {
        match case {
            ValidationCase::MinEvaluation => &self.min_evaluation,
            ValidationCase::MaxEvaluation => &self.max_evaluation,
            ValidationCase::MinNotEntered => &self.min_not_entered,
            ValidationCase::MaxNotEntered => &self.max_not_entered,
            ValidationCase::InvalidValue => &self.invalid_value,
        }
    }
}
