//! # Stat Aggregation
//!
//! Count aggregation over any record subsequence. Two shapes coexist
//! because the display layer consumes both:
//!
//! - [`DesignationStats`]: scalar counts per collection (total, national
//!   treasures, treasures)
//! - [`HallBreakdown`]: per-hall counts over the five fixed halls, with
//!   zero-count halls reported rather than omitted
//!
//! All counts are computed in a single pass over deterministic iteration.

use crate::types::{DesignationTier, Hall, Record};
use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// DESIGNATION STATS (Shape A)
// =============================================================================

/// Scalar designation counts over one record subsequence.
///
/// The tier precedence from ingestion guarantees a record is never counted
/// in both buckets: a designation string carrying both markers is a
/// national treasure only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DesignationStats {
    pub total: usize,
    pub national_treasures: usize,
    pub treasures: usize,
}

/// Aggregate designation counts over any record subsequence.
#[must_use]
pub fn designation_stats<'a, I>(records: I) -> DesignationStats
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut stats = DesignationStats::default();
    for record in records {
        stats.total += 1;
        match record.designation {
            DesignationTier::NationalTreasure => stats.national_treasures += 1,
            DesignationTier::Treasure => stats.treasures += 1,
            DesignationTier::None => {}
        }
    }
    stats
}

// =============================================================================
// HALL BREAKDOWN (Shape B)
// =============================================================================

/// Per-hall record counts over the five fixed halls.
///
/// Every hall is always present; a hall with no matching records reports
/// `0`. Iteration order is the canonical hall order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HallBreakdown {
    counts: BTreeMap<Hall, usize>,
}

impl HallBreakdown {
    /// The count for one hall.
    #[must_use]
    pub fn count(&self, hall: Hall) -> usize {
        self.counts.get(&hall).copied().unwrap_or(0)
    }

    /// Sum of all per-hall counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(hall, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Hall, usize)> + '_ {
        self.counts.iter().map(|(&hall, &count)| (hall, count))
    }
}

/// Aggregate per-hall counts over any record subsequence.
#[must_use]
pub fn hall_breakdown<'a, I>(records: I) -> HallBreakdown
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: BTreeMap<Hall, usize> = Hall::ALL.into_iter().map(|hall| (hall, 0)).collect();
    for record in records {
        if let Some(count) = counts.get_mut(&record.hall) {
            *count += 1;
        }
    }
    HallBreakdown { counts }
}

// =============================================================================
// TESTS
// =============================================================================
