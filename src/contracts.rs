//! Runtime contracts for the index and query results.
//!
//! Debug-mode assertions that the build and query paths call on their own
//! output. They compile to nothing in release builds.
//!
//! | Contract Function               | Property                                   |
//! |---------------------------------|--------------------------------------------|
//! | `check_index_well_formed`       | sorted, non-empty, in-bounds posting lists |
//! | `check_hits_deduplicated`       | each id appears at most once               |
//! | `check_hits_capped`             | result length never exceeds the limit      |
//! | `check_hits_ordered`            | (field, ordinal) ascending                 |
//!
//! # Usage
//!
//! ```ignore
//! let hits = collect_hits(index, &words, limit);
//! check_hits_capped(&hits, limit);
//! ```

use crate::index::GlossaryIndex;
use crate::types::SearchHit;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that every posting list is non-empty, strictly ascending by ordinal,
/// and points at an existing entry.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_index_well_formed(index: &GlossaryIndex) {
    #[cfg(debug_assertions)]
    debug_assert!(
        crate::inverted::check_token_index_well_formed(index.token_index(), index.len()),
        "Contract violation: token index malformed for {} entries",
        index.len()
    );
    #[cfg(not(debug_assertions))]
    let _ = index;
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// # Panics (debug builds only)
/// Panics if an id occurs twice.
#[inline]
pub fn check_hits_deduplicated(hits: &[SearchHit]) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::new();
        for hit in hits {
            debug_assert!(
                seen.insert(&hit.id),
                "Contract violation: duplicate id {} in results",
                hit.id
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = hits;
}

/// # Panics (debug builds only)
/// Panics if `hits.len() > limit`.
#[inline]
pub fn check_hits_capped(hits: &[SearchHit], limit: usize) {
    debug_assert!(
        hits.len() <= limit,
        "Contract violation: {} results exceed limit {}",
        hits.len(),
        limit
    );
}

/// # Panics (debug builds only)
/// Panics if two adjacent hits are out of (field, ordinal) order.
#[inline]
pub fn check_hits_ordered(hits: &[SearchHit]) {
    debug_assert!(
        hits.windows(2)
            .all(|w| (w[0].field, w[0].ordinal) < (w[1].field, w[1].ordinal)),
        "Contract violation: results not in (field, ordinal) order"
    );
}
