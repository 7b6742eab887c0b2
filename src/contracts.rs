// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts.
//!
//! Debug-mode assertions over the outputs of the range parser and the search
//! engine. They compile to nothing in release builds and fail loudly in tests
//! when a change breaks an ordering or capping guarantee.
//!
//! | Contract                 | Guarantee                                        |
//! |--------------------------|--------------------------------------------------|
//! | `check_range_expanded`   | non-empty, strictly ascending, contiguous        |
//! | `check_results_ranked`   | at most `limit`, score non-increasing, two tiers |

use crate::search::{BASE_SCORE, PHRASE_BONUS};
use crate::types::MatchResult;

// A phrase hit must always outrank a scattered hit.
const _: () = assert!(PHRASE_BONUS > 0);

/// Check that an expanded range is `start..=end` with no holes.
#[inline]
pub fn check_range_expanded(verses: &[u32]) {
    debug_assert!(!verses.is_empty(), "expanded range is empty");
    debug_assert!(
        verses.first().is_some_and(|&v| v > 0),
        "expanded range starts at verse 0"
    );
    debug_assert!(
        verses.windows(2).all(|w| w[1] == w[0] + 1),
        "expanded range is not contiguous: {:?}",
        verses
    );
}

/// Check that search results are capped and ranked.
///
/// Ties within a score tier are in corpus order, but that needs scan
/// positions to verify; the ranking tests cover it.
#[inline]
pub fn check_results_ranked(results: &[MatchResult], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "{} results exceed limit {}",
        results.len(),
        limit
    );
    debug_assert!(
        results.windows(2).all(|w| w[0].score >= w[1].score),
        "results not sorted by score descending"
    );
    debug_assert!(
        results
            .iter()
            .all(|r| r.score == BASE_SCORE || r.score == BASE_SCORE + PHRASE_BONUS),
        "score outside the two scoring tiers"
    );
}
