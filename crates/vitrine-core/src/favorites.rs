//! # Favorites Set
//!
//! The per-user set of favorited record identifiers.
//!
//! This is the volatile, in-memory half of the favorites feature; the
//! session layer write-through persists it after every mutation. Uses
//! `BTreeSet` for deterministic ordering, so the persisted array is always
//! sorted ascending.

use crate::types::RecordId;
use std::collections::BTreeSet;

/// A user-scoped set of record identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: BTreeSet<RecordId>,
}

impl FavoritesSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw identifier values, discarding zeros.
    ///
    /// Used when rehydrating from the preference store; identifiers are
    /// positive by contract, so a zero can only be corrupted data.
    #[must_use]
    pub fn from_raw_ids(ids: &[u32]) -> Self {
        Self {
            ids: ids
                .iter()
                .filter(|&&id| id > 0)
                .map(|&id| RecordId(id))
                .collect(),
        }
    }

    /// Add an identifier. Idempotent: adding a present id is a no-op.
    /// Returns `true` if the set changed.
    pub fn add(&mut self, id: RecordId) -> bool {
        self.ids.insert(id)
    }

    /// Remove an identifier. Returns `true` if the set changed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.ids.remove(&id)
    }

    /// Flip membership. Returns the new membership state.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of favorited identifiers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Check if no identifier is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    /// The raw identifier values, sorted ascending. This is the shape the
    /// preference store persists.
    #[must_use]
    pub fn to_raw_ids(&self) -> Vec<u32> {
        self.ids.iter().map(|id| id.value()).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
