//! # Property-Based Tests
//!
//! Verification tests using proptest.
//!
//! These tests ensure determinism and correctness invariants of the
//! sanitizer, the filter engine, the aggregators, and the favorites set.

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;
use vitrine_core::{
    DesignationTier, FavoritesSet, Hall, Language, LocalizedText, Record, RecordId, designation_stats,
    filter_records, hall_breakdown, sanitize_search_input, validate_url_params,
};

// =============================================================================
// GENERATORS
// =============================================================================

/// A record whose searchable fields are drawn from a tiny alphabet, so
/// random terms actually collide with random corpora.
fn make_record(id: u32, name: &str, category: &str, hall: Hall) -> Record {
    let localized = |value: &str| -> LocalizedText {
        [
            (Language::Ko, value.to_string()),
            (Language::En, value.to_string()),
        ]
        .into_iter()
        .collect()
    };

    Record {
        id: RecordId(id),
        name: localized(name),
        period: localized("period"),
        category: category.to_string(),
        description: localized("description"),
        detailed_info: localized("info"),
        hall,
        designation: DesignationTier::None,
        cultural_property: None,
        featured: false,
        exhibition_room: None,
        artifact_number: None,
        material: None,
        dimensions: None,
        location: None,
        image: None,
    }
}

fn arb_hall() -> impl Strategy<Value = Hall> {
    prop::sample::select(Hall::ALL.to_vec())
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    vec(
        (
            1u32..=100,
            "[a-c]{0,4}",
            prop::sample::select(vec!["ceramics", "sculpture", "painting"]),
            arb_hall(),
        ),
        0..20,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, name, category, hall)| make_record(id, &name, category, hall))
            .collect()
    })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Filter results are always a subsequence of the input: no fabricated
    /// records, and relative order preserved.
    #[test]
    fn filter_results_are_ordered_subsequence(
        records in arb_records(),
        term in "[a-c]{1,2}",
    ) {
        let results = filter_records(&records, &term, "전체", Language::En, "전체");

        let mut cursor = 0usize;
        for result in results {
            let position = records[cursor..]
                .iter()
                .position(|r| std::ptr::eq(r, result));
            prop_assert!(position.is_some(), "result missing from input or out of order");
            cursor += position.unwrap_or(0) + 1;
        }
    }

    /// The empty search term yields the empty result for any corpus and
    /// any category selection.
    #[test]
    fn empty_term_always_yields_empty(
        records in arb_records(),
        category in prop::sample::select(vec!["전체", "ceramics", "sculpture"]),
    ) {
        let results = filter_records(&records, "", category, Language::En, "전체");
        prop_assert!(results.is_empty());
    }

    /// Matching is case-insensitive: uppercasing the term never changes
    /// the result set.
    #[test]
    fn filter_is_case_insensitive(
        records in arb_records(),
        term in "[a-cA-C]{1,3}",
    ) {
        let upper = filter_records(&records, &term.to_uppercase(), "전체", Language::En, "전체");
        let lower = filter_records(&records, &term.to_lowercase(), "전체", Language::En, "전체");
        prop_assert_eq!(upper, lower);
    }

    /// Filtering twice produces identical results (pure function).
    #[test]
    fn filter_is_deterministic(
        records in arb_records(),
        term in "[a-c]{1,2}",
    ) {
        let first = filter_records(&records, &term, "전체", Language::En, "전체");
        let second = filter_records(&records, &term, "전체", Language::En, "전체");
        prop_assert_eq!(first, second);
    }

    /// Sanitized output never contains angle brackets and never exceeds
    /// the length cap, for arbitrary adversarial input.
    #[test]
    fn sanitizer_output_is_bounded_and_bracket_free(raw in ".{0,300}") {
        let out = sanitize_search_input(&raw);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(out.chars().count() <= 100);
        prop_assert_eq!(out.trim(), out.as_str());
    }

    /// Surviving URL parameters have alphanumeric keys, bounded values,
    /// and no markup-significant characters.
    #[test]
    fn url_params_survivors_are_clean(
        entries in vec(("[ -~]{1,12}", "[ -~]{0,250}"), 0..8),
    ) {
        let params = entries.into_iter().collect();
        let validated = validate_url_params(&params);

        for (key, value) in &validated {
            prop_assert!(key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
            prop_assert!(value.chars().count() <= 200);
            prop_assert!(!value.contains(['<', '>', '\'', '"']));
        }
    }

    /// Toggling an id twice returns the set to its original membership
    /// state, from any starting set.
    #[test]
    fn toggle_twice_is_identity(
        seed in vec(1u32..=100, 0..20),
        id in 1u32..=100,
    ) {
        let mut favorites = FavoritesSet::from_raw_ids(&seed);
        let before = favorites.clone();

        favorites.toggle(RecordId(id));
        favorites.toggle(RecordId(id));

        prop_assert_eq!(favorites, before);
    }

    /// Count always equals the number of distinct positive ids added.
    #[test]
    fn favorites_count_matches_distinct_ids(ids in vec(1u32..=100, 0..40)) {
        let mut favorites = FavoritesSet::new();
        for &id in &ids {
            favorites.add(RecordId(id));
        }

        let distinct = ids.iter().collect::<BTreeSet<_>>().len();
        prop_assert_eq!(favorites.count(), distinct);
    }

    /// Per-hall counts always sum to the input length, and every one of
    /// the five halls is reported.
    #[test]
    fn hall_counts_sum_to_input_length(records in arb_records()) {
        let breakdown = hall_breakdown(&records);

        prop_assert_eq!(breakdown.total(), records.len());
        prop_assert_eq!(breakdown.iter().count(), 5);
        for hall in Hall::ALL {
            let expected = records.iter().filter(|r| r.hall == hall).count();
            prop_assert_eq!(breakdown.count(hall), expected);
        }
    }

    /// Designation buckets never overlap and never exceed the total.
    #[test]
    fn designation_buckets_are_disjoint(
        tiers in vec(
            prop::sample::select(vec![
                DesignationTier::None,
                DesignationTier::Treasure,
                DesignationTier::NationalTreasure,
            ]),
            0..30,
        ),
    ) {
        let records: Vec<Record> = tiers
            .iter()
            .enumerate()
            .map(|(i, &tier)| {
                let mut record = make_record((i as u32 % 100) + 1, "a", "ceramics", Hall::Art);
                record.designation = tier;
                record
            })
            .collect();

        let stats = designation_stats(&records);
        prop_assert_eq!(stats.total, records.len());
        prop_assert!(stats.national_treasures + stats.treasures <= stats.total);
        prop_assert_eq!(
            stats.national_treasures,
            tiers.iter().filter(|&&t| t == DesignationTier::NationalTreasure).count()
        );
        prop_assert_eq!(
            stats.treasures,
            tiers.iter().filter(|&&t| t == DesignationTier::Treasure).count()
        );
    }
}
