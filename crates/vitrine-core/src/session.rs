//! # Session Module
//!
//! The explicit context object for one catalog consumer: the immutable
//! catalog, the durable preference backend, and the two pieces of user
//! state (favorites, active language).
//!
//! This replaces the ambient module-level singletons of the original
//! display layer. Lifecycle is explicit: construction loads persisted
//! preferences (fail-open), every mutation writes through, and dropping
//! the session releases the store.
//!
//! ## Storage Backends
//!
//! - `InMemory`: volatile preferences (tests, ephemeral tools)
//! - `Persistent`: disk-backed preferences via redb

use crate::catalog::{Catalog, Page};
use crate::favorites::FavoritesSet;
use crate::sanitize::sanitize_search_input;
use crate::stats::{self, DesignationStats, HallBreakdown};
use crate::storage::{self, MemoryPreferences, PreferenceStore, RedbPreferences};
use crate::types::{CatalogError, Hall, Language, Record, RecordId};
use std::path::Path;

// =============================================================================
// ERROR LOGGING HELPERS
// =============================================================================

/// Log a swallowed preference-write failure.
///
/// Preference writes are fire-and-forget from the caller's perspective: a
/// failed write must never crash or block a catalog operation, but it must
/// not disappear silently either.
///
/// Uses stderr logging for the core (no external dependencies). The app
/// layer should configure proper tracing if needed.
#[inline]
fn log_write_failure(context: &str, error: &CatalogError) {
    eprintln!(
        "{{\"level\":\"warn\",\"target\":\"vitrine_core::session\",\"message\":\"preference write failed in {}: {}\"}}",
        context, error
    );
}

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Preference storage backend for a Session.
#[derive(Debug)]
pub enum StorageBackend {
    /// Volatile in-memory preferences.
    InMemory(MemoryPreferences),
    /// Disk-backed preferences using redb (ACID, persistent).
    Persistent(RedbPreferences),
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::InMemory(MemoryPreferences::new())
    }
}

// NOTE: StorageBackend does NOT implement Clone.
// RedbPreferences (database handle) cannot be safely cloned.

impl StorageBackend {
    fn store(&self) -> &dyn PreferenceStore {
        match self {
            StorageBackend::InMemory(prefs) => prefs,
            StorageBackend::Persistent(prefs) => prefs,
        }
    }

    fn store_mut(&mut self) -> &mut dyn PreferenceStore {
        match self {
            StorageBackend::InMemory(prefs) => prefs,
            StorageBackend::Persistent(prefs) => prefs,
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A Session combines the catalog with per-user state.
///
/// The Session provides the high-level interface for:
/// - Sanitized, language-aware search
/// - Stat aggregation over the catalog
/// - Favorites membership with write-through persistence
/// - The active language preference
#[derive(Debug)]
pub struct Session {
    /// The immutable record store.
    catalog: Catalog,
    /// The preference storage backend.
    backend: StorageBackend,
    /// The user's favorites set, rehydrated at construction.
    favorites: FavoritesSet,
    /// The active display language.
    language: Language,
}

impl Session {
    /// Create a session with volatile in-memory preferences.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_backend(catalog, StorageBackend::default())
    }

    /// Create a session over an existing backend, loading persisted
    /// preferences. Reads fail open: malformed favorites become the empty
    /// set and an unusable language code becomes the configured default.
    #[must_use]
    pub fn with_backend(catalog: Catalog, backend: StorageBackend) -> Self {
        let favorites = storage::load_favorites(backend.store());
        let language = storage::load_language(backend.store(), catalog.config());
        Self {
            catalog,
            backend,
            favorites,
            language,
        }
    }

    /// Create a session with persistent redb preferences.
    ///
    /// Opens or creates a preference database at the given path.
    pub fn with_redb(catalog: Catalog, path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let prefs = RedbPreferences::open(path)?;
        Ok(Self::with_backend(
            catalog,
            StorageBackend::Persistent(prefs),
        ))
    }

    /// Check if using persistent storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, StorageBackend::Persistent(_))
    }

    /// The record store.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // LANGUAGE PREFERENCE
    // =========================================================================

    /// The active display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the active language and persist the preference.
    ///
    /// Rejects languages outside the catalog's supported set; the active
    /// language is unchanged on error.
    pub fn set_language(&mut self, language: Language) -> Result<(), CatalogError> {
        if !self.catalog.config().is_supported(language) {
            return Err(CatalogError::UnsupportedLanguage(language));
        }
        self.language = language;
        if let Err(e) = storage::save_language(self.backend.store_mut(), language) {
            log_write_failure("set_language", &e);
        }
        Ok(())
    }

    // =========================================================================
    // FAVORITES
    // =========================================================================

    /// The favorites set.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Check membership for one record.
    #[must_use]
    pub fn is_favorite(&self, id: RecordId) -> bool {
        self.favorites.contains(id)
    }

    /// Number of favorited records.
    #[must_use]
    pub fn favorites_count(&self) -> usize {
        self.favorites.count()
    }

    /// Add a favorite. Idempotent; returns `true` if the set changed.
    pub fn add_favorite(&mut self, id: RecordId) -> bool {
        let changed = self.favorites.add(id);
        if changed {
            self.persist_favorites("add_favorite");
        }
        changed
    }

    /// Remove a favorite. Returns `true` if the set changed.
    pub fn remove_favorite(&mut self, id: RecordId) -> bool {
        let changed = self.favorites.remove(id);
        if changed {
            self.persist_favorites("remove_favorite");
        }
        changed
    }

    /// Flip membership for one record. Returns the new membership state.
    pub fn toggle_favorite(&mut self, id: RecordId) -> bool {
        let now_member = self.favorites.toggle(id);
        self.persist_favorites("toggle_favorite");
        now_member
    }

    /// Empty the favorites set unconditionally.
    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.persist_favorites("clear_favorites");
    }

    /// Write the favorites set through to the preference store, logging
    /// (never propagating) failures.
    fn persist_favorites(&mut self, context: &str) {
        if let Err(e) = storage::save_favorites(self.backend.store_mut(), &self.favorites) {
            log_write_failure(context, &e);
        }
    }

    // =========================================================================
    // SEARCH & STATS
    // =========================================================================

    /// Sanitize raw search input and run the filter engine with the active
    /// language.
    ///
    /// `all_category_sentinel` is the locale-specific "no category filter"
    /// string, compared by exact equality against `selected_category`.
    #[must_use]
    pub fn search(
        &self,
        raw_term: &str,
        selected_category: &str,
        all_category_sentinel: &str,
    ) -> Vec<&Record> {
        let term = sanitize_search_input(raw_term);
        self.catalog
            .search(&term, selected_category, self.language, all_category_sentinel)
    }

    /// Per-hall record counts over the whole catalog.
    #[must_use]
    pub fn hall_breakdown(&self) -> HallBreakdown {
        stats::hall_breakdown(self.catalog.records())
    }

    /// Designation counts over the whole catalog.
    #[must_use]
    pub fn designation_stats(&self) -> DesignationStats {
        stats::designation_stats(self.catalog.records())
    }

    /// Designation counts over one hall.
    #[must_use]
    pub fn hall_stats(&self, hall: Hall) -> DesignationStats {
        stats::designation_stats(self.catalog.by_hall(hall).into_iter())
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Lookup a record by identifier.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.catalog.get(id)
    }

    /// One window of a paginated listing.
    #[must_use]
    pub fn page(&self, page: usize, limit: usize, hall: Option<Hall>) -> Page<'_> {
        self.catalog.page(page, limit, hall)
    }
}

// =============================================================================
// TESTS
// =============================================================================
