//! # Preference Storage
//!
//! The durable key-value store behind the favorites set and the language
//! preference, defined as a trait so the session works with both a
//! volatile in-memory store and the disk-backed redb store.
//!
//! ## Read semantics (fail-open)
//!
//! - Favorites: the value is a JSON-encoded array of positive integers.
//!   Malformed or non-array content reads as "no favorites", never as an
//!   error surfaced to the user.
//! - Language: the value is one language code. An unrecognized or
//!   unsupported stored value falls back to the configured default.
//!
//! ## Write semantics
//!
//! Last write to a key wins on the stored blob as a whole. A single
//! session is the only expected writer; concurrent-writer merging is out
//! of scope.

mod redb_prefs;

pub use redb_prefs::RedbPreferences;

use crate::config::CatalogConfig;
use crate::favorites::FavoritesSet;
use crate::primitives::{FAVORITES_STORAGE_KEY, LANGUAGE_STORAGE_KEY};
use crate::types::{CatalogError, Language};
use std::collections::BTreeMap;

// =============================================================================
// PREFERENCE STORE TRAIT
// =============================================================================

/// Raw byte-valued key-value storage for user preferences.
///
/// Implementors provide durability (or deliberately don't); the typed
/// encode/decode lives in the free functions below so every backend shares
/// the same fail-open behavior.
pub trait PreferenceStore {
    /// Read the raw bytes stored under `key`, if any.
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, CatalogError>;

    /// Store raw bytes under `key`, replacing any previous value.
    fn store_raw(&mut self, key: &str, bytes: &[u8]) -> Result<(), CatalogError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Volatile preference store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryPreferences {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, CatalogError> {
        Ok(self.entries.get(key).cloned())
    }

    fn store_raw(&mut self, key: &str, bytes: &[u8]) -> Result<(), CatalogError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

// =============================================================================
// TYPED ACCESSORS
// =============================================================================

/// Load the persisted favorites set, failing open to empty.
#[must_use]
pub fn load_favorites<S: PreferenceStore + ?Sized>(store: &S) -> FavoritesSet {
    let Ok(Some(bytes)) = store.load_raw(FAVORITES_STORAGE_KEY) else {
        return FavoritesSet::new();
    };
    match serde_json::from_slice::<Vec<u32>>(&bytes) {
        Ok(ids) => FavoritesSet::from_raw_ids(&ids),
        Err(_) => FavoritesSet::new(),
    }
}

/// Persist the favorites set as a JSON-encoded array of identifiers.
pub fn save_favorites<S: PreferenceStore + ?Sized>(
    store: &mut S,
    favorites: &FavoritesSet,
) -> Result<(), CatalogError> {
    let bytes = serde_json::to_vec(&favorites.to_raw_ids())
        .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
    store.store_raw(FAVORITES_STORAGE_KEY, &bytes)
}

/// Load the persisted language preference, falling back to the configured
/// default for missing, malformed, unknown, or unsupported values.
#[must_use]
pub fn load_language<S: PreferenceStore + ?Sized>(store: &S, config: &CatalogConfig) -> Language {
    let Ok(Some(bytes)) = store.load_raw(LANGUAGE_STORAGE_KEY) else {
        return config.default_language();
    };
    std::str::from_utf8(&bytes)
        .ok()
        .and_then(Language::from_code)
        .filter(|&lang| config.is_supported(lang))
        .unwrap_or_else(|| config.default_language())
}

/// Persist the language preference as its code string.
pub fn save_language<S: PreferenceStore + ?Sized>(
    store: &mut S,
    language: Language,
) -> Result<(), CatalogError> {
    store.store_raw(LANGUAGE_STORAGE_KEY, language.code().as_bytes())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordId;

    #[test]
    fn favorites_roundtrip() {
        let mut store = MemoryPreferences::new();
        let mut favorites = FavoritesSet::new();
        favorites.add(RecordId(3));
        favorites.add(RecordId(17));

        save_favorites(&mut store, &favorites).expect("save");
        let loaded = load_favorites(&store);

        assert_eq!(loaded, favorites);
    }

    #[test]
    fn favorites_persisted_as_json_array() {
        let mut store = MemoryPreferences::new();
        let mut favorites = FavoritesSet::new();
        favorites.add(RecordId(2));
        favorites.add(RecordId(1));

        save_favorites(&mut store, &favorites).expect("save");
        let bytes = store
            .load_raw(FAVORITES_STORAGE_KEY)
            .expect("load")
            .expect("present");

        assert_eq!(std::str::from_utf8(&bytes).expect("utf8"), "[1,2]");
    }

    #[test]
    fn malformed_favorites_fail_open_to_empty() {
        let mut store = MemoryPreferences::new();
        store
            .store_raw(FAVORITES_STORAGE_KEY, b"{\"not\":\"an array\"}")
            .expect("store");
        assert!(load_favorites(&store).is_empty());

        store
            .store_raw(FAVORITES_STORAGE_KEY, b"not json at all")
            .expect("store");
        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn missing_favorites_read_as_empty() {
        let store = MemoryPreferences::new();
        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn language_roundtrip() {
        let mut store = MemoryPreferences::new();
        let config = CatalogConfig::minimal();

        save_language(&mut store, Language::Ja).expect("save");
        assert_eq!(load_language(&store, &config), Language::Ja);
    }

    #[test]
    fn unrecognized_language_falls_back_to_default() {
        let mut store = MemoryPreferences::new();
        let config = CatalogConfig::minimal();

        store
            .store_raw(LANGUAGE_STORAGE_KEY, b"klingon")
            .expect("store");
        assert_eq!(load_language(&store, &config), Language::Ko);
    }

    #[test]
    fn unsupported_language_falls_back_to_default() {
        let mut store = MemoryPreferences::new();
        let config = CatalogConfig::minimal();

        // A known code, but outside the minimal supported set.
        store.store_raw(LANGUAGE_STORAGE_KEY, b"fr").expect("store");
        assert_eq!(load_language(&store, &config), Language::Ko);
    }
}
