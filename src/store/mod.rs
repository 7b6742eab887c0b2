// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Row store access.
//!
//! The store is an injected capability: the assembler takes any
//! [`VerseStore`] and never opens connections of its own. Two implementations
//! ship with the crate:
//!
//! - [`MemoryStore`]: a resident corpus, built from records or a JSON file.
//!   Used by tests, and fast enough for the CLI on a JSON corpus.
//! - [`SqliteStore`] (feature `sqlite`): the `bible` table of an SQLite
//!   database.
//!
//! "Natural order" below means corpus order: the order rows were loaded or
//! inserted, which for a canonical corpus is book, chapter, verse ascending.

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::{create_corpus, SqliteStore, TABLE};

use crate::error::StoreError;
use crate::types::VerseRecord;

/// Read-only access to the corpus.
///
/// Implementations must be safe to share across threads; requests run
/// concurrently and keep no state of their own.
pub trait VerseStore: Send + Sync {
    /// Distinct canonical ids of books whose display name is exactly
    /// `display_name`. More than one means the alias is ambiguous.
    fn canonical_ids_for(&self, display_name: &str) -> Result<Vec<String>, StoreError>;

    /// Highest chapter number recorded for `book`.
    fn max_chapter(&self, book: &str) -> Result<Option<u32>, StoreError>;

    /// Highest verse number recorded in `book` `chapter`.
    fn max_verse(&self, book: &str, chapter: u32) -> Result<Option<u32>, StoreError>;

    /// Every verse of a chapter, ordered by verse number.
    fn chapter_verses(&self, book: &str, chapter: u32) -> Result<Vec<VerseRecord>, StoreError>;

    /// One verse by its natural key.
    fn verse(&self, book: &str, chapter: u32, verse: u32)
        -> Result<Option<VerseRecord>, StoreError>;

    /// Visit every record in natural order.
    fn scan(&self, visit: &mut dyn FnMut(&VerseRecord)) -> Result<(), StoreError>;

    /// The whole corpus as a slice, when it is already in memory.
    ///
    /// Lets the search engine split the scan across threads instead of
    /// streaming through [`VerseStore::scan`].
    fn resident(&self) -> Option<&[VerseRecord]> {
        None
    }
}

impl<S: VerseStore + ?Sized> VerseStore for Box<S> {
    fn canonical_ids_for(&self, display_name: &str) -> Result<Vec<String>, StoreError> {
        (**self).canonical_ids_for(display_name)
    }

    fn max_chapter(&self, book: &str) -> Result<Option<u32>, StoreError> {
        (**self).max_chapter(book)
    }

    fn max_verse(&self, book: &str, chapter: u32) -> Result<Option<u32>, StoreError> {
        (**self).max_verse(book, chapter)
    }

    fn chapter_verses(&self, book: &str, chapter: u32) -> Result<Vec<VerseRecord>, StoreError> {
        (**self).chapter_verses(book, chapter)
    }

    fn verse(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<VerseRecord>, StoreError> {
        (**self).verse(book, chapter, verse)
    }

    fn scan(&self, visit: &mut dyn FnMut(&VerseRecord)) -> Result<(), StoreError> {
        (**self).scan(visit)
    }

    fn resident(&self) -> Option<&[VerseRecord]> {
        (**self).resident()
    }
}
