//! # vitrine-core
//!
//! The deterministic catalog engine for Vitrine - THE LOGIC.
//!
//! This crate implements the CORE of the museum showcase: a static
//! multilingual record store with a sanitized search/filter pipeline,
//! designation and hall stat aggregation, and a persisted per-user
//! favorites set and language preference.
//!
//! ## Pipeline
//!
//! ```text
//! RecordDraft ──► Ingestor ──► Catalog ──► Filter ──► Stats
//!                                 │
//!            Preferences (redb) ──┴──► Session (favorites + language)
//! ```
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is pure Rust: no async, no network dependencies
//! - Is deterministic: `BTreeMap`/`BTreeSet` only, no floats, no randomness
//! - Is closed: records are immutable once the catalog is constructed
//! - Never panics; all errors are recoverable `CatalogError` values

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod filter;
pub mod formats;
pub mod ingest;
pub mod primitives;
pub mod sanitize;
pub mod session;
pub mod stats;
pub mod storage;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    CatalogError, DesignationTier, Hall, Language, LocalizedText, Record, RecordDraft, RecordId,
};

// =============================================================================
// RE-EXPORTS: Catalog Engine
// =============================================================================

pub use catalog::{Catalog, Page};
pub use config::CatalogConfig;
pub use favorites::FavoritesSet;
pub use filter::filter_records;
pub use ingest::Ingestor;
pub use sanitize::{sanitize_search_input, validate_url_params};
pub use session::{Session, StorageBackend};
pub use stats::{DesignationStats, HallBreakdown, designation_stats, hall_breakdown};
pub use storage::{MemoryPreferences, PreferenceStore, RedbPreferences};
pub use validate::{is_valid_hall, is_valid_id, is_valid_language};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{SnapshotHeader, catalog_from_bytes, catalog_to_bytes};
