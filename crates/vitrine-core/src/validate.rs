//! # Field Validators
//!
//! Pure, total validation predicates for untrusted boundary input. All
//! validators return `false` for malformed input — including empty strings,
//! non-numeric text, and out-of-range values — and never raise.

use crate::config::CatalogConfig;
use crate::primitives::{MAX_RECORD_ID, MIN_RECORD_ID};
use crate::types::{Hall, Language};

/// Check whether `code` is a supported language code under the active
/// configuration.
#[must_use]
pub fn is_valid_language(config: &CatalogConfig, code: &str) -> bool {
    Language::from_code(code).is_some_and(|lang| config.is_supported(lang))
}

/// Check whether `text` is a valid record identifier.
///
/// The parse is strict: the whole string must be an integer in
/// `[MIN_RECORD_ID, MAX_RECORD_ID]`. Trailing garbage is invalid.
#[must_use]
pub fn is_valid_id(text: &str) -> bool {
    text.parse::<u32>()
        .is_ok_and(|id| (MIN_RECORD_ID..=MAX_RECORD_ID).contains(&id))
}

/// Check whether `text` is exactly one of the five English hall keys.
///
/// Korean display strings are deliberately not accepted here; they are an
/// ingestion-boundary concern, not a URL-facing one.
#[must_use]
pub fn is_valid_hall(text: &str) -> bool {
    Hall::ALL.into_iter().any(|hall| hall.key() == text)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_language_codes_accepted() {
        let config = CatalogConfig::minimal();
        for code in ["ko", "en", "zh", "ja", "th"] {
            assert!(is_valid_language(&config, code), "{code} should be valid");
        }
    }

    #[test]
    fn invalid_language_codes_rejected() {
        let config = CatalogConfig::minimal();
        // Known to the data model but outside the minimal set.
        assert!(!is_valid_language(&config, "fr"));
        assert!(!is_valid_language(&config, "invalid"));
        assert!(!is_valid_language(&config, ""));
    }

    #[test]
    fn extended_config_widens_language_set() {
        let config = CatalogConfig::extended();
        assert!(is_valid_language(&config, "fr"));
        assert!(is_valid_language(&config, "ar"));
        assert!(!is_valid_language(&config, "de"));
    }

    #[test]
    fn valid_ids_accepted() {
        assert!(is_valid_id("1"));
        assert!(is_valid_id("50"));
        assert!(is_valid_id("100"));
    }

    #[test]
    fn invalid_ids_rejected() {
        assert!(!is_valid_id("0"));
        assert!(!is_valid_id("101"));
        assert!(!is_valid_id("-1"));
        assert!(!is_valid_id("abc"));
        assert!(!is_valid_id(""));
        // Strict parse: numeric prefix with trailing garbage is invalid.
        assert!(!is_valid_id("50x"));
    }

    #[test]
    fn valid_halls_accepted() {
        for key in ["archaeology", "art", "history", "asia", "donation"] {
            assert!(is_valid_hall(key), "{key} should be valid");
        }
    }

    #[test]
    fn invalid_halls_rejected() {
        assert!(!is_valid_hall("invalid"));
        assert!(!is_valid_hall(""));
        assert!(!is_valid_hall("museum"));
        // Display strings resolve at ingestion, not here.
        assert!(!is_valid_hall("미술관"));
    }
}
