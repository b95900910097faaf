//! # Ingestion Module
//!
//! Draft validation and canonicalization at the catalog boundary.
//!
//! - Validate drafts before any record is admitted
//! - Reject malformed input with typed errors
//! - Canonicalize the two hall representations into the `Hall` enum
//! - Promote the designation tier to a typed field
//! - No semantic inference or enrichment

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::types::{
    CatalogError, DesignationTier, Hall, Language, LocalizedText, Record, RecordDraft, RecordId,
};
use std::collections::BTreeMap;

/// The Ingestor turns raw [`RecordDraft`]s into canonical [`Record`]s.
///
/// The Ingestor:
/// - Accepts raw drafts from an external loader (file, API, database)
/// - Validates identifiers, halls, and translation completeness
/// - Reduces free-text designation strings to a typed tier
pub struct Ingestor;

impl Ingestor {
    /// Canonicalize one draft against the active configuration.
    ///
    /// Fails fast with a typed error on the first violation: an identifier
    /// outside `[1, 100]`, a hall matching neither representation, an
    /// unknown language key, or a populated per-language field missing a
    /// supported language.
    pub fn canonicalize(
        draft: &RecordDraft,
        config: &CatalogConfig,
    ) -> Result<Record, CatalogError> {
        let id = RecordId(draft.id);
        if !id.in_range() {
            return Err(CatalogError::IdOutOfRange(draft.id));
        }

        let hall =
            Hall::from_input(&draft.hall).ok_or_else(|| CatalogError::UnknownHall(draft.hall.clone()))?;

        let designation = DesignationTier::from_field(draft.cultural_property.as_deref());

        Ok(Record {
            id,
            name: Self::localize(id, "name", &draft.name, config)?,
            period: Self::localize(id, "period", &draft.period, config)?,
            category: draft.category.clone(),
            description: Self::localize(id, "description", &draft.description, config)?,
            detailed_info: Self::localize(id, "detailed_info", &draft.detailed_info, config)?,
            hall,
            designation,
            cultural_property: draft.cultural_property.clone(),
            featured: draft.featured,
            exhibition_room: draft.exhibition_room.clone(),
            artifact_number: draft.artifact_number.clone(),
            material: Self::localize_optional(id, "material", draft.material.as_ref(), config)?,
            dimensions: draft.dimensions.clone(),
            location: Self::localize_optional(id, "location", draft.location.as_ref(), config)?,
            image: draft.image.clone(),
        })
    }

    /// Canonicalize a whole draft sequence and build the catalog from it.
    ///
    /// Input order is preserved; the catalog constructor enforces the
    /// store-level invariants (size, id uniqueness).
    pub fn build_catalog(
        drafts: &[RecordDraft],
        config: CatalogConfig,
    ) -> Result<Catalog, CatalogError> {
        let records = drafts
            .iter()
            .map(|draft| Self::canonicalize(draft, &config))
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::from_records(records, config)
    }

    /// Convert one raw per-language mapping into [`LocalizedText`].
    ///
    /// Every key must be a known language code; every supported language
    /// must be present. A missing supported language is a data-integrity
    /// error, never a silent default.
    fn localize(
        id: RecordId,
        field: &'static str,
        raw: &BTreeMap<String, String>,
        config: &CatalogConfig,
    ) -> Result<LocalizedText, CatalogError> {
        let text: LocalizedText = raw
            .iter()
            .map(|(code, value)| {
                Language::from_code(code)
                    .map(|lang| (lang, value.clone()))
                    .ok_or_else(|| CatalogError::UnknownLanguage(code.clone()))
            })
            .collect::<Result<_, _>>()?;

        if let Some(language) = text.first_missing(config.supported()) {
            return Err(CatalogError::MissingTranslation {
                id,
                language,
                field,
            });
        }
        Ok(text)
    }

    /// An absent optional mapping stays absent; a populated one must be
    /// complete like any required field.
    fn localize_optional(
        id: RecordId,
        field: &'static str,
        raw: Option<&BTreeMap<String, String>>,
        config: &CatalogConfig,
    ) -> Result<Option<LocalizedText>, CatalogError> {
        raw.map(|map| Self::localize(id, field, map, config)).transpose()
    }
}

// =============================================================================
// TESTS
// =============================================================================
