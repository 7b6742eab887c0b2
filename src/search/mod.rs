// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-text search over verse content.
//!
//! No index: every search is one linear pass over the corpus. What keeps it
//! predictable is that each piece is small and fixed:
//!
//! - [`scoring`]: the conjunctive, marker-insensitive predicate and the
//!   two-tier score
//! - [`rank`]: a bounded top-k that caps after ranking, never before
//! - [`engine`]: the scan itself, streamed or parallel over a resident slice

pub mod engine;
pub mod rank;
pub mod scoring;

pub use engine::{search_records, SearchQuery, SearchScan, DEFAULT_LIMIT};
pub use rank::TopK;
pub use scoring::{PhraseMatcher, BASE_SCORE, PHRASE_BONUS};
