//! # Catalog Store
//!
//! The static, ordered record store. Loaded once, immutable thereafter;
//! every read path in the engine goes through this structure.
//!
//! Construction enforces the store invariants: bounded size, unique
//! identifiers in range, and translation completeness for the supported
//! language set. Read operations never fail on a constructed catalog.

use crate::config::CatalogConfig;
use crate::filter::filter_records;
use crate::primitives::MAX_CATALOG_SIZE;
use crate::types::{CatalogError, Hall, Language, Record, RecordId};
use std::collections::BTreeMap;

/// One window of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// The records on this page, in catalog order.
    pub records: Vec<&'a Record>,
    /// Total records matching the hall filter (not just this page).
    pub total: usize,
    /// Whether another page follows this one.
    pub has_more: bool,
}

/// The static record store.
///
/// Uses `BTreeMap` for the identifier index; record order is the input
/// order and is never re-ranked.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
    index: BTreeMap<RecordId, usize>,
    config: CatalogConfig,
}

impl Catalog {
    /// Build a catalog from canonical records.
    ///
    /// Validates store-level invariants: at most [`MAX_CATALOG_SIZE`]
    /// records, every id unique and in range, and every required
    /// per-language field complete for the supported set. Records arriving
    /// from [`Ingestor`](crate::ingest::Ingestor) already satisfy the
    /// per-record checks; re-validating here keeps snapshot imports honest.
    pub fn from_records(
        records: Vec<Record>,
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        if records.len() > MAX_CATALOG_SIZE {
            return Err(CatalogError::CatalogTooLarge(records.len()));
        }

        let mut index = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            if !record.id.in_range() {
                return Err(CatalogError::IdOutOfRange(record.id.value()));
            }
            if index.insert(record.id, position).is_some() {
                return Err(CatalogError::DuplicateId(record.id));
            }
            Self::check_translations(record, &config)?;
        }

        Ok(Self {
            records,
            index,
            config,
        })
    }

    /// Verify every populated per-language field covers the supported set.
    fn check_translations(record: &Record, config: &CatalogConfig) -> Result<(), CatalogError> {
        let required = [
            ("name", &record.name),
            ("period", &record.period),
            ("description", &record.description),
            ("detailed_info", &record.detailed_info),
        ];
        for (field, text) in required {
            if let Some(language) = text.first_missing(config.supported()) {
                return Err(CatalogError::MissingTranslation {
                    id: record.id,
                    language,
                    field,
                });
            }
        }
        for (field, text) in [
            ("material", record.material.as_ref()),
            ("location", record.location.as_ref()),
        ] {
            if let Some(text) = text {
                if let Some(language) = text.first_missing(config.supported()) {
                    return Err(CatalogError::MissingTranslation {
                        id: record.id,
                        language,
                        field,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in catalog order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Lookup a record by identifier.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// Check whether an identifier is present.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    /// All records in one hall, in catalog order.
    #[must_use]
    pub fn by_hall(&self, hall: Hall) -> Vec<&Record> {
        self.records.iter().filter(|r| r.hall == hall).collect()
    }

    /// All featured records, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Record> {
        self.records.iter().filter(|r| r.featured).collect()
    }

    /// One window of a paginated listing, optionally restricted to a hall.
    ///
    /// Pages are 1-based; `page` 0 is treated as the first page. A window
    /// past the end yields an empty page with `has_more = false`.
    #[must_use]
    pub fn page(&self, page: usize, limit: usize, hall: Option<Hall>) -> Page<'_> {
        let filtered: Vec<&Record> = match hall {
            Some(hall) => self.by_hall(hall),
            None => self.records.iter().collect(),
        };
        let total = filtered.len();

        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = start.saturating_add(limit).min(total);
        let records = if start < total {
            filtered[start..end].to_vec()
        } else {
            Vec::new()
        };

        Page {
            records,
            total,
            has_more: end < total,
        }
    }

    /// Run the filter engine over the full catalog.
    ///
    /// See [`filter_records`] for the matching semantics, including the
    /// empty-term policy.
    #[must_use]
    pub fn search(
        &self,
        search_term: &str,
        selected_category: &str,
        language: Language,
        all_category_sentinel: &str,
    ) -> Vec<&Record> {
        filter_records(
            &self.records,
            search_term,
            selected_category,
            language,
            all_category_sentinel,
        )
    }

}

// =============================================================================
// TESTS
// =============================================================================
