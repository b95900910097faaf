//! # Core Type Definitions
//!
//! This module contains all core types for the Vitrine catalog engine:
//! - Record identifier (`RecordId`)
//! - The closed language and hall sets (`Language`, `Hall`)
//! - Designation tier classification (`DesignationTier`)
//! - Per-language display strings (`LocalizedText`)
//! - The catalog record itself (`Record`) and its raw input shape
//!   (`RecordDraft`)
//! - Error types (`CatalogError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Carry closed enums where the data model is a closed set

use crate::primitives::{MAX_RECORD_ID, MIN_RECORD_ID, NATIONAL_TREASURE_MARKER, TREASURE_MARKER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// RECORD IDENTIFIER
// =============================================================================

/// Unique identifier for a catalog record.
///
/// Valid identifiers are positive and bounded by the fixed catalog size
/// (`[MIN_RECORD_ID, MAX_RECORD_ID]`). Range enforcement happens at the
/// ingestion boundary, not on every construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Check whether the identifier is inside the fixed catalog range.
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.0 >= MIN_RECORD_ID && self.0 <= MAX_RECORD_ID
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// LANGUAGE
// =============================================================================

/// A display language known to the catalog data.
///
/// This is the union of every code the source data carries. Which subset is
/// actually *supported* at runtime is a configuration decision
/// ([`CatalogConfig`](crate::config::CatalogConfig)), never a per-component
/// literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
    Zh,
    Ja,
    Th,
    Vi,
    Id,
    Es,
    Ar,
    Fr,
}

impl Language {
    /// Every language the data model knows, in canonical order.
    pub const ALL: [Language; 10] = [
        Language::Ko,
        Language::En,
        Language::Zh,
        Language::Ja,
        Language::Th,
        Language::Vi,
        Language::Id,
        Language::Es,
        Language::Ar,
        Language::Fr,
    ];

    /// The two-letter code used in data files, URLs, and the preference store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Th => "th",
            Language::Vi => "vi",
            Language::Id => "id",
            Language::Es => "es",
            Language::Ar => "ar",
            Language::Fr => "fr",
        }
    }

    /// The language's own name, for human-facing pickers.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::Ko => "한국어",
            Language::En => "English",
            Language::Zh => "中文",
            Language::Ja => "日本語",
            Language::Th => "ไทย",
            Language::Vi => "Tiếng Việt",
            Language::Id => "Bahasa Indonesia",
            Language::Es => "Español",
            Language::Ar => "العربية",
            Language::Fr => "Français",
        }
    }

    /// Resolve a two-letter code. Returns `None` for anything outside the
    /// closed set, including the empty string.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// HALL
// =============================================================================

/// One of the five fixed top-level exhibition halls.
///
/// The source data uses English keys and Korean display strings
/// interchangeably for the same logical field; both forms resolve here at
/// the ingestion boundary and only this enum travels further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hall {
    Archaeology,
    Art,
    History,
    Asia,
    Donation,
}

impl Hall {
    /// The five halls, in canonical order.
    pub const ALL: [Hall; 5] = [
        Hall::Archaeology,
        Hall::Art,
        Hall::History,
        Hall::Asia,
        Hall::Donation,
    ];

    /// The canonical English key used in URLs and data files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Hall::Archaeology => "archaeology",
            Hall::Art => "art",
            Hall::History => "history",
            Hall::Asia => "asia",
            Hall::Donation => "donation",
        }
    }

    /// The Korean display string the legacy data uses for the same field.
    #[must_use]
    pub const fn display_ko(self) -> &'static str {
        match self {
            Hall::Archaeology => "고고관",
            Hall::Art => "미술관",
            Hall::History => "역사관",
            Hall::Asia => "아시아관",
            Hall::Donation => "기증관",
        }
    }

    /// Resolve either representation found in source data: the English key
    /// or the Korean display string. Returns `None` for anything else.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        Hall::ALL
            .into_iter()
            .find(|hall| hall.key() == input || hall.display_ko() == input)
    }
}

impl std::fmt::Display for Hall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// =============================================================================
// DESIGNATION TIER
// =============================================================================

/// Cultural-property designation tier, derived from the free-text
/// designation field.
///
/// The tier is promoted to a typed field at ingestion; the substring
/// extraction below is the one parsing step that feeds it. The national
/// treasure marker takes precedence, so a string carrying both markers is a
/// national treasure and is never double-counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignationTier {
    None,
    Treasure,
    NationalTreasure,
}

impl DesignationTier {
    /// Classify a raw designation string by substring match.
    ///
    /// A string containing neither marker yields `None`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.contains(NATIONAL_TREASURE_MARKER) {
            DesignationTier::NationalTreasure
        } else if text.contains(TREASURE_MARKER) {
            DesignationTier::Treasure
        } else {
            DesignationTier::None
        }
    }

    /// Classify an optional designation field. An absent field is no tier.
    #[must_use]
    pub fn from_field(field: Option<&str>) -> Self {
        field.map_or(DesignationTier::None, Self::parse)
    }
}

impl std::fmt::Display for DesignationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignationTier::None => write!(f, "none"),
            DesignationTier::Treasure => write!(f, "treasure"),
            DesignationTier::NationalTreasure => write!(f, "national_treasure"),
        }
    }
}

// =============================================================================
// LOCALIZED TEXT
// =============================================================================

/// A per-language mapping of display strings for one record field.
///
/// Uses `BTreeMap` for deterministic ordering. Completeness against the
/// supported language set is enforced at the ingestion boundary; a missing
/// language afterwards is a data-integrity condition, not a fallback case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText {
    translations: BTreeMap<Language, String>,
}

impl LocalizedText {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the string for one language.
    pub fn insert(&mut self, language: Language, text: impl Into<String>) {
        self.translations.insert(language, text.into());
    }

    /// Get the display string for a language, if present.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        self.translations.get(&language).map(String::as_str)
    }

    /// The first language from `required` that has no translation, if any.
    pub fn first_missing<'a, I>(&self, required: I) -> Option<Language>
    where
        I: IntoIterator<Item = &'a Language>,
    {
        required
            .into_iter()
            .copied()
            .find(|lang| !self.translations.contains_key(lang))
    }

    /// Number of languages populated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Check if no language is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl FromIterator<(Language, String)> for LocalizedText {
    fn from_iter<T: IntoIterator<Item = (Language, String)>>(iter: T) -> Self {
        Self {
            translations: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One catalog entry: an artifact with per-language translated fields.
///
/// Records are defined at build/deploy time as static data and are immutable
/// once the catalog is constructed. The `designation` field is typed; the
/// raw `cultural_property` string it was parsed from is retained for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: LocalizedText,
    pub period: LocalizedText,
    pub category: String,
    pub description: LocalizedText,
    pub detailed_info: LocalizedText,
    pub hall: Hall,
    pub designation: DesignationTier,
    pub cultural_property: Option<String>,
    pub featured: bool,
    pub exhibition_room: Option<String>,
    pub artifact_number: Option<String>,
    pub material: Option<LocalizedText>,
    pub dimensions: Option<String>,
    pub location: Option<LocalizedText>,
    pub image: Option<String>,
}

// =============================================================================
// RECORD DRAFT (raw input shape)
// =============================================================================

/// The raw serde shape of one record in the external catalog data file.
///
/// Language keys and the hall are plain strings here; the
/// [`Ingestor`](crate::ingest::Ingestor) canonicalizes drafts into
/// [`Record`]s and rejects anything malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub id: u32,
    pub name: BTreeMap<String, String>,
    pub period: BTreeMap<String, String>,
    pub category: String,
    pub description: BTreeMap<String, String>,
    pub detailed_info: BTreeMap<String, String>,
    pub hall: String,
    #[serde(default)]
    pub cultural_property: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub exhibition_room: Option<String>,
    #[serde(default)]
    pub artifact_number: Option<String>,
    #[serde(default)]
    pub material: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub location: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub image: Option<String>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the catalog engine.
///
/// - No silent failures at the ingestion boundary
/// - Use `Result<T, CatalogError>` for fallible operations
/// - The core should never panic; all errors must be recoverable
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A language code outside the closed set, or outside the configured
    /// supported subset where one is required.
    #[error("Unknown language code: {0:?}")]
    UnknownLanguage(String),

    /// A language known to the data model but not in the active
    /// configuration's supported set.
    #[error("Language {0} is not in the supported set")]
    UnsupportedLanguage(Language),

    /// The configured default language is missing from the supported set.
    #[error("Default language {0} is not in the supported set")]
    UnsupportedDefaultLanguage(Language),

    /// A hall string matching neither the English keys nor the Korean
    /// display strings.
    #[error("Unknown hall: {0:?}")]
    UnknownHall(String),

    /// A record identifier outside the fixed catalog range.
    #[error("Record id {0} outside valid range [{MIN_RECORD_ID}, {MAX_RECORD_ID}]")]
    IdOutOfRange(u32),

    /// Two records carrying the same identifier.
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),

    /// A populated per-language field missing a supported language.
    #[error("Record {id} missing {language} translation for field {field:?}")]
    MissingTranslation {
        id: RecordId,
        language: Language,
        field: &'static str,
    },

    /// More records than the fixed catalog size allows.
    #[error("Catalog size {0} exceeds maximum {max}", max = MAX_RECORD_ID)]
    CatalogTooLarge(usize),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
