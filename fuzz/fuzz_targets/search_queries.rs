// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary phrases, versions and limits against the sample corpus. The
//! search must never panic, must reject blank phrases, and must always hand
//! back a capped, score-sorted list.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use versicle::testing::sample_corpus;
use versicle::types::UNSUPPORTED_VERSION;
use versicle::{search_records, LookupError, SearchQuery, VerseRecord};

#[derive(Debug, Arbitrary)]
struct Input {
    phrase: String,
    version: Option<String>,
    footnotes: bool,
    limit: u8,
}

fuzz_target!(|input: Input| {
    static CORPUS: std::sync::OnceLock<Vec<VerseRecord>> = std::sync::OnceLock::new();
    let corpus = CORPUS.get_or_init(sample_corpus);

    let limit = usize::from(input.limit);
    let query = SearchQuery::new(input.phrase.clone(), input.version.as_deref())
        .with_footnotes(input.footnotes)
        .with_limit(limit);

    match search_records(corpus, &query) {
        Ok(results) => {
            assert!(results.len() <= limit);
            assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
            assert!(results.iter().all(|r| r.score == 1 || r.score == 11));
            // Only rows with text in the selected version can match
            assert!(results.iter().all(|r| r.content != UNSUPPORTED_VERSION));
        }
        Err(LookupError::InvalidQuery) => {
            assert!(versicle::strip_markers(&input.phrase).trim().is_empty());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
