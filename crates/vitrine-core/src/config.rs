//! # Catalog Configuration
//!
//! The supported-language set is a single configuration-time value, not a
//! hardcoded literal duplicated per component. The source data carries two
//! divergent sets (a five-language minimal set and a ten-language extended
//! set); both are expressible here and every component consults the active
//! config instead of its own list.

use crate::types::{CatalogError, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The five-language minimal set.
const MINIMAL_LANGUAGES: [Language; 5] = [
    Language::Ko,
    Language::En,
    Language::Zh,
    Language::Ja,
    Language::Th,
];

/// Configuration for one catalog: which languages are supported and which
/// one is the default.
///
/// Constructed once and passed explicitly down the call chain; there is no
/// ambient global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    default_language: Language,
    supported: BTreeSet<Language>,
}

impl CatalogConfig {
    /// The minimal five-language configuration (`ko, en, zh, ja, th`),
    /// defaulting to Korean.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            default_language: Language::Ko,
            supported: MINIMAL_LANGUAGES.into_iter().collect(),
        }
    }

    /// The extended ten-language configuration, defaulting to Korean.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            default_language: Language::Ko,
            supported: Language::ALL.into_iter().collect(),
        }
    }

    /// A custom configuration. The default language must be a member of the
    /// supported set.
    pub fn custom(
        default_language: Language,
        supported: BTreeSet<Language>,
    ) -> Result<Self, CatalogError> {
        if !supported.contains(&default_language) {
            return Err(CatalogError::UnsupportedDefaultLanguage(default_language));
        }
        Ok(Self {
            default_language,
            supported,
        })
    }

    /// The configured default language.
    #[must_use]
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// The supported languages, in deterministic order.
    #[must_use]
    pub fn supported(&self) -> &BTreeSet<Language> {
        &self.supported
    }

    /// Check whether a language is in the supported set.
    #[must_use]
    pub fn is_supported(&self, language: Language) -> bool {
        self.supported.contains(&language)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::minimal()
    }
}

// =============================================================================
// TESTS
// =============================================================================
