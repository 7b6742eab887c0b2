// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scripture verse lookup and phrase search over a bilingual corpus.
//!
//! A corpus is a flat table of verses keyed by `(book, chapter, verse)`, each
//! carrying text in up to three versions and up to twelve footnotes. Queries
//! ask for chapter or verse counts, a single verse, a range, a whole chapter,
//! or a ranked phrase search.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │ VerseRequest │───▶│  assemble.rs  │───▶│QueryResponse │
//! └──────────────┘    │  (QueryMode,  │    └──────────────┘
//!                     │   Assembler)  │
//!                     └───────┬───────┘
//!          ┌──────────────────┼──────────────────┐
//!          ▼                  ▼                  ▼
//! ┌─────────────────┐ ┌───────────────┐ ┌─────────────────┐
//! │   reference/    │ │    search/    │ │     store/      │
//! │ (parse_range,   │ │ (PhraseMatcher│ │ (VerseStore,    │
//! │  resolve_book)  │ │  TopK, scan)  │ │  Memory/Sqlite) │
//! └─────────────────┘ └───────┬───────┘ └─────────────────┘
//!                             ▼
//!                     ┌───────────────┐
//!                     │ normalize.rs  │
//!                     │(strip_markers)│
//!                     └───────────────┘
//! ```
//!
//! Only the assembler touches a store. Range parsing, marker stripping, and
//! scoring are pure functions over strings and records.
//!
//! # Usage
//!
//! ```
//! use versicle::{execute, QueryResponse, VerseRequest};
//! use versicle::testing::sample_store;
//!
//! let store = sample_store();
//! let request: VerseRequest = serde_json::from_str(
//!     r#"{"book_ref": "John", "chapter": 3, "verse_expr": "16", "version_key": "rev_eng"}"#,
//! ).unwrap();
//!
//! let QueryResponse::Verses(found) = execute(&store, &request).unwrap() else { panic!() };
//! assert!(found.verses[0].content().starts_with("For God so loved the world"));
//! ```

pub mod assemble;
pub mod contracts;
pub mod error;
pub mod normalize;
pub mod reference;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;

pub use assemble::{execute, Assembler, ContentOptions, QueryMode};
pub use error::{ErrorBody, ErrorKind, LookupError, Result, StoreError};
pub use normalize::strip_markers;
pub use reference::{parse_range, resolve_book, VerseSelection, MAX_RANGE_LEN, WHOLE_CHAPTER};
pub use search::{search_records, SearchQuery, SearchScan, DEFAULT_LIMIT};
pub use store::{MemoryStore, VerseStore};
#[cfg(feature = "sqlite")]
pub use store::{create_corpus, SqliteStore};
pub use types::{
    BookRef, ChapterCount, Footnotes, MatchResult, MissingVerse, QueryResponse, SearchResponse,
    VerseCount, VerseEntry, VerseRecord, VerseRequest, VerseRow, VersesResponse, Version,
};
