// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resident corpus.
//!
//! Records live in a `Vec` in load order, which is the natural order scans
//! and search ties follow. Two side indexes answer the keyed lookups:
//! book → (chapter, verse) → position, and display name → canonical ids.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::VerseStore;
use crate::error::StoreError;
use crate::types::VerseRecord;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<VerseRecord>,
    by_book: HashMap<String, BTreeMap<(u32, u32), usize>>,
    by_display_name: HashMap<String, BTreeSet<String>>,
}

impl MemoryStore {
    /// Build a store from records in corpus order.
    ///
    /// # Errors
    ///
    /// Rejects a zero chapter or verse number and duplicate natural keys.
    pub fn new(records: Vec<VerseRecord>) -> Result<Self, StoreError> {
        let mut by_book: HashMap<String, BTreeMap<(u32, u32), usize>> = HashMap::new();
        let mut by_display_name: HashMap<String, BTreeSet<String>> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            if record.chapter == 0 || record.verse == 0 {
                return Err(StoreError::NonPositiveKey {
                    book: record.book.clone(),
                    chapter: record.chapter,
                    verse: record.verse,
                });
            }
            let verses = by_book.entry(record.book.clone()).or_default();
            if verses.insert((record.chapter, record.verse), pos).is_some() {
                return Err(StoreError::DuplicateVerse {
                    book: record.book.clone(),
                    chapter: record.chapter,
                    verse: record.verse,
                });
            }
            by_display_name
                .entry(record.book_name.clone())
                .or_default()
                .insert(record.book.clone());
        }

        debug!(records = records.len(), books = by_book.len(), "loaded resident corpus");
        Ok(Self {
            records,
            by_book,
            by_display_name,
        })
    }

    /// Load a JSON array of records.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let records: Vec<VerseRecord> = serde_json::from_reader(reader)?;
        Self::new(records)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn positions(&self, book: &str) -> Option<&BTreeMap<(u32, u32), usize>> {
        self.by_book.get(book)
    }
}

impl VerseStore for MemoryStore {
    fn canonical_ids_for(&self, display_name: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .by_display_name
            .get(display_name)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn max_chapter(&self, book: &str) -> Result<Option<u32>, StoreError> {
        Ok(self
            .positions(book)
            .and_then(|verses| verses.keys().next_back())
            .map(|&(chapter, _)| chapter))
    }

    fn max_verse(&self, book: &str, chapter: u32) -> Result<Option<u32>, StoreError> {
        Ok(self.positions(book).and_then(|verses| {
            verses
                .range((chapter, 0)..=(chapter, u32::MAX))
                .next_back()
                .map(|(&(_, verse), _)| verse)
        }))
    }

    fn chapter_verses(&self, book: &str, chapter: u32) -> Result<Vec<VerseRecord>, StoreError> {
        Ok(self
            .positions(book)
            .map(|verses| {
                verses
                    .range((chapter, 0)..=(chapter, u32::MAX))
                    .map(|(_, &pos)| self.records[pos].clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn verse(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<VerseRecord>, StoreError> {
        Ok(self
            .positions(book)
            .and_then(|verses| verses.get(&(chapter, verse)))
            .map(|&pos| self.records[pos].clone()))
    }

    fn scan(&self, visit: &mut dyn FnMut(&VerseRecord)) -> Result<(), StoreError> {
        for record in &self.records {
            visit(record);
        }
        Ok(())
    }

    fn resident(&self) -> Option<&[VerseRecord]> {
        Some(&self.records)
    }
}
