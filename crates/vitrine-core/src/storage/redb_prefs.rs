//! # redb-backed Preference Store
//!
//! A disk-backed [`PreferenceStore`] using the redb embedded database,
//! providing:
//! - ACID transactions
//! - Crash safety (copy-on-write B-trees)
//! - Zero configuration
//!
//! One table holds every preference key; the typed encode/decode and the
//! fail-open read policy live in [`super`], shared with the in-memory
//! backend.

use super::PreferenceStore;
use crate::types::CatalogError;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;

/// Table for preferences: key string -> raw value bytes.
const PREFERENCES: TableDefinition<&str, &[u8]> = TableDefinition::new("preferences");

/// A disk-backed preference store.
pub struct RedbPreferences {
    /// The redb database handle.
    db: Database,
}

impl std::fmt::Debug for RedbPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbPreferences").finish_non_exhaustive()
    }
}

impl RedbPreferences {
    /// Open or create a preference database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let db =
            Database::create(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;

        // Initialize the table if it doesn't exist
        {
            let write_txn = db
                .begin_write()
                .map_err(|e| CatalogError::IoError(e.to_string()))?;
            let _ = write_txn
                .open_table(PREFERENCES)
                .map_err(|e| CatalogError::IoError(e.to_string()))?;
            write_txn
                .commit()
                .map_err(|e| CatalogError::IoError(e.to_string()))?;
        }

        Ok(Self { db })
    }

    /// Compact the database (optional optimization).
    pub fn compact(&mut self) -> Result<(), CatalogError> {
        self.db
            .compact()
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        Ok(())
    }
}

impl PreferenceStore for RedbPreferences {
    fn load_raw(&self, key: &str) -> Result<Option<Vec<u8>>, CatalogError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        let table = read_txn
            .open_table(PREFERENCES)
            .map_err(|e| CatalogError::IoError(e.to_string()))?;

        let value = table
            .get(key)
            .map_err(|e| CatalogError::IoError(e.to_string()))?
            .map(|guard| guard.value().to_vec());
        Ok(value)
    }

    fn store_raw(&mut self, key: &str, bytes: &[u8]) -> Result<(), CatalogError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(PREFERENCES)
                .map_err(|e| CatalogError::IoError(e.to_string()))?;
            table
                .insert(key, bytes)
                .map_err(|e| CatalogError::IoError(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = RedbPreferences::open(dir.path().join("prefs.db")).expect("open");

        assert_eq!(store.load_raw("missing").expect("load"), None);

        store.store_raw("key", b"value").expect("store");
        assert_eq!(
            store.load_raw("key").expect("load"),
            Some(b"value".to_vec())
        );

        // Overwrite wins.
        store.store_raw("key", b"other").expect("store");
        assert_eq!(
            store.load_raw("key").expect("load"),
            Some(b"other".to_vec())
        );
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.db");

        {
            let mut store = RedbPreferences::open(&path).expect("open");
            store.store_raw("key", b"durable").expect("store");
        }

        let store = RedbPreferences::open(&path).expect("reopen");
        assert_eq!(
            store.load_raw("key").expect("load"),
            Some(b"durable".to_vec())
        );
    }
}
