//! # Filter Engine
//!
//! The search/filter pipeline over the record store.
//!
//! - Deterministic: pure function of its inputs, order-preserving
//! - Substring containment after lowercasing both sides; no tokenization,
//!   no stemming, no fuzzy matching
//! - An empty search term yields the empty result, not "all records"

use crate::types::{Language, Record};

/// Filter a record sequence by search term and category facet.
///
/// A record matches when, using the display strings for `language`, any of
/// name, description, or period contains `search_term` case-insensitively,
/// AND `selected_category` either equals `all_category_sentinel` or equals
/// the record's category exactly (case-sensitive).
///
/// Two deliberate edges:
/// - An empty `search_term` returns the empty sequence, even when a
///   category is selected. Consumers that want "everything" list the
///   catalog instead of searching it.
/// - A record with no translation for `language` is treated as a
///   non-match. Catalog construction already rejects incomplete records
///   for supported languages, so this only arises for languages outside
///   the configured set.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [Record],
    search_term: &str,
    selected_category: &str,
    language: Language,
    all_category_sentinel: &str,
) -> Vec<&'a Record> {
    if search_term.is_empty() {
        return Vec::new();
    }

    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            matches_search(record, &needle, language)
                && matches_category(record, selected_category, all_category_sentinel)
        })
        .collect()
}

/// Case-insensitive containment over name, description, and period.
fn matches_search(record: &Record, needle: &str, language: Language) -> bool {
    [&record.name, &record.description, &record.period]
        .into_iter()
        .any(|field| {
            field
                .get(language)
                .is_some_and(|value| value.to_lowercase().contains(needle))
        })
}

/// Exact, case-sensitive category equality, short-circuited by the
/// locale-specific "all" sentinel.
fn matches_category(record: &Record, selected: &str, all_sentinel: &str) -> bool {
    selected == all_sentinel || record.category == selected
}

// =============================================================================
// TESTS
// =============================================================================
