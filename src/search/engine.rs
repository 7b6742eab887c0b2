// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scan: feed records in natural order, get back the ranked, capped hits.
//!
//! Two entry points share one scoring path:
//!
//! - [`SearchScan`] is pushed one record at a time. The assembler drives it
//!   from [`VerseStore::scan`](crate::store::VerseStore::scan), so the engine
//!   itself never touches the store.
//! - [`search_records`] takes a resident slice. With the `parallel` feature
//!   the slice is split into chunks, each chunk keeps its own top-k, and the
//!   partial results merge into the same answer the sequential scan gives.
//!
//! Either way peak memory is bounded by the limit, not by the hit count.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::rank::TopK;
use super::scoring::PhraseMatcher;
use crate::contracts::check_results_ranked;
use crate::error::Result;
use crate::types::{MatchResult, VerseRecord, Version, UNSUPPORTED_VERSION};

/// Result cap when the caller does not give one.
pub const DEFAULT_LIMIT: usize = 100;

/// Records per parallel work unit.
#[cfg(feature = "parallel")]
const SCAN_CHUNK: usize = 2048;

/// One search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The phrase as the caller typed it.
    pub text: String,
    /// Selected version; `None` when the key was absent or unknown.
    pub version: Option<Version>,
    pub include_footnotes: bool,
    pub limit: usize,
}

impl SearchQuery {
    /// A query with the default limit and no footnotes. Unknown version keys
    /// are kept as `None`: not an error, but nothing can match.
    pub fn new(text: impl Into<String>, version_key: Option<&str>) -> Self {
        let version = version_key.and_then(Version::from_key);
        match (version_key, version) {
            (Some(key), None) => warn!(key, "search with unsupported version key"),
            (None, _) => debug!("search without a version key"),
            _ => {}
        }
        Self {
            text: text.into(),
            version,
            include_footnotes: false,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_footnotes(mut self, include: bool) -> Self {
        self.include_footnotes = include;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn score(&self, matcher: &PhraseMatcher, record: &VerseRecord) -> Option<u32> {
        matcher.score(self.version.and_then(|v| record.text(v)))
    }

    fn to_match(&self, record: &VerseRecord, score: u32) -> MatchResult {
        MatchResult {
            book: record.book.clone(),
            book_name: record.book_name.clone(),
            chapter: record.chapter,
            verse: record.verse,
            content: record.text_or(self.version, UNSUPPORTED_VERSION).to_string(),
            reference: record.reference(),
            footnotes: self
                .include_footnotes
                .then(|| record.footnotes.attached()),
            score,
        }
    }

    /// Offer `record` at scan position `seq` to `top`.
    fn rank_into(
        &self,
        matcher: &PhraseMatcher,
        top: &mut TopK<MatchResult>,
        seq: usize,
        record: &VerseRecord,
    ) -> bool {
        let Some(score) = self.score(matcher, record) else {
            return false;
        };
        if top.would_keep(score, seq) {
            top.offer(score, seq, self.to_match(record, score));
        }
        true
    }
}

/// Push-driven search over records arriving in natural order.
pub struct SearchScan<'q> {
    query: &'q SearchQuery,
    matcher: PhraseMatcher,
    top: TopK<MatchResult>,
    seen: usize,
    matched: usize,
}

impl<'q> SearchScan<'q> {
    /// # Errors
    ///
    /// [`LookupError::InvalidQuery`](crate::LookupError::InvalidQuery) when
    /// the phrase has no terms.
    pub fn new(query: &'q SearchQuery) -> Result<Self> {
        Ok(Self {
            query,
            matcher: PhraseMatcher::new(&query.text)?,
            top: TopK::new(query.limit),
            seen: 0,
            matched: 0,
        })
    }

    pub fn offer(&mut self, record: &VerseRecord) {
        let seq = self.seen;
        self.seen += 1;
        if self.query.rank_into(&self.matcher, &mut self.top, seq, record) {
            self.matched += 1;
        }
    }

    /// Hits, best first, at most `limit` of them.
    pub fn finish(self) -> Vec<MatchResult> {
        trace!(scanned = self.seen, matched = self.matched, kept = self.top.len(), "search scan done");
        let results: Vec<MatchResult> = self.top.into_sorted().into_iter().map(|(_, m)| m).collect();
        check_results_ranked(&results, self.query.limit);
        results
    }
}

/// Search a resident corpus. `records` must be in natural order.
#[cfg(feature = "parallel")]
pub fn search_records(records: &[VerseRecord], query: &SearchQuery) -> Result<Vec<MatchResult>> {
    let matcher = PhraseMatcher::new(&query.text)?;

    let top = records
        .par_chunks(SCAN_CHUNK)
        .enumerate()
        .map(|(chunk_idx, chunk)| {
            let mut top = TopK::new(query.limit);
            let base = chunk_idx * SCAN_CHUNK;
            for (offset, record) in chunk.iter().enumerate() {
                query.rank_into(&matcher, &mut top, base + offset, record);
            }
            top
        })
        .reduce(|| TopK::new(query.limit), TopK::merge);

    trace!(scanned = records.len(), kept = top.len(), "parallel search scan done");
    let results: Vec<MatchResult> = top.into_sorted().into_iter().map(|(_, m)| m).collect();
    check_results_ranked(&results, query.limit);
    Ok(results)
}

/// Search a resident corpus. `records` must be in natural order.
#[cfg(not(feature = "parallel"))]
pub fn search_records(records: &[VerseRecord], query: &SearchQuery) -> Result<Vec<MatchResult>> {
    let mut scan = SearchScan::new(query)?;
    for record in records {
        scan.offer(record);
    }
    Ok(scan.finish())
}
