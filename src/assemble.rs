// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request orchestration.
//!
//! A request is first classified into exactly one [`QueryMode`], then run
//! against the store. Classification is pure (no I/O) and does all the
//! validation that does not need the corpus: required fields, verse
//! expression syntax, search phrase. Only then does the assembler resolve the
//! book and fetch rows. This is the one place in the crate that talks to a
//! [`VerseStore`].
//!
//! Mode precedence, first match wins:
//!
//! 1. `chapters_check`  → highest chapter of the book
//! 2. `verses_check`    → highest verse of the chapter
//! 3. `search_text`     → ranked search (no book needed)
//! 4. verse expr `0`    → whole chapter, ordered by verse
//! 5. any other expr    → those verses, one lookup each

use tracing::debug;

use crate::error::{LookupError, Result};
use crate::reference::{parse_range, resolve_book, VerseSelection};
use crate::search::{search_records, SearchQuery, SearchScan};
use crate::store::VerseStore;
use crate::types::{
    BookRef, ChapterCount, MissingVerse, QueryResponse, SearchResponse, VerseCount, VerseEntry,
    VerseRecord, VerseRequest, VerseRow, VersesResponse, Version, INVALID_VERSION,
};

/// How verse content is shaped for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentOptions {
    /// `None` means the key was absent or unknown; content falls back to
    /// [`INVALID_VERSION`].
    pub version: Option<Version>,
    pub footnotes: bool,
}

impl ContentOptions {
    pub fn new(version_key: Option<&str>, footnotes: bool) -> Self {
        let version = version_key.and_then(Version::from_key);
        if version.is_none() {
            debug!(key = ?version_key, "unrecognized version key, content falls back");
        }
        Self { version, footnotes }
    }

    fn row(&self, record: &VerseRecord) -> VerseRow {
        VerseRow {
            book: record.book.clone(),
            book_name: record.book_name.clone(),
            chapter: record.chapter,
            verse: record.verse,
            content: record.text_or(self.version, INVALID_VERSION).to_string(),
            footnotes: self.footnotes.then(|| record.footnotes.attached()),
        }
    }
}

/// One classified request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    ChapterCount {
        book: BookRef,
    },
    VerseCount {
        book: BookRef,
        chapter: u32,
    },
    Search(SearchQuery),
    WholeChapter {
        book: BookRef,
        chapter: u32,
        options: ContentOptions,
    },
    Verses {
        book: BookRef,
        chapter: u32,
        verses: Vec<u32>,
        options: ContentOptions,
    },
}

impl QueryMode {
    /// Classify and validate a request.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidRequest`] when a field the mode needs is absent
    /// - [`LookupError::InvalidReference`] / [`LookupError::InvalidRange`]
    ///   for a malformed verse expression
    pub fn from_request(request: &VerseRequest) -> Result<QueryMode> {
        if request.chapters_check {
            return Ok(QueryMode::ChapterCount {
                book: required_book(request, "a chapter count")?,
            });
        }

        if request.verses_check {
            let book = required_book(request, "a verse count")?;
            let chapter = request
                .chapter
                .ok_or_else(|| LookupError::missing_field("chapter", "a verse count"))?;
            return Ok(QueryMode::VerseCount { book, chapter });
        }

        if let Some(text) = &request.search_text {
            let mut query = SearchQuery::new(text.clone(), request.version_key.as_deref())
                .with_footnotes(request.footnotes);
            if let Some(limit) = request.limit {
                query = query.with_limit(limit);
            }
            return Ok(QueryMode::Search(query));
        }

        let book = required_book(request, "a verse lookup")?;
        let chapter = request
            .chapter
            .ok_or_else(|| LookupError::missing_field("chapter", "a verse lookup"))?;
        let expr = request
            .verse_expr
            .as_deref()
            .ok_or_else(|| LookupError::missing_field("verse", "a verse lookup"))?;
        let options = ContentOptions::new(request.version_key.as_deref(), request.footnotes);

        Ok(match parse_range(expr)? {
            VerseSelection::WholeChapter => QueryMode::WholeChapter {
                book,
                chapter,
                options,
            },
            VerseSelection::Verses(verses) => QueryMode::Verses {
                book,
                chapter,
                verses,
                options,
            },
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryMode::ChapterCount { .. } => "chapter_count",
            QueryMode::VerseCount { .. } => "verse_count",
            QueryMode::Search(_) => "search",
            QueryMode::WholeChapter { .. } => "whole_chapter",
            QueryMode::Verses { .. } => "verses",
        }
    }
}

fn required_book(request: &VerseRequest, mode: &str) -> Result<BookRef> {
    request
        .book_ref
        .clone()
        .ok_or_else(|| LookupError::missing_field("book", mode))
}

/// Runs queries against an injected store.
pub struct Assembler<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: VerseStore + ?Sized> Assembler<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Classify `request` and run it.
    pub fn handle(&self, request: &VerseRequest) -> Result<QueryResponse> {
        let mode = QueryMode::from_request(request)?;
        self.run(mode)
    }

    pub fn run(&self, mode: QueryMode) -> Result<QueryResponse> {
        debug!(mode = mode.name(), "running query");
        Ok(match mode {
            QueryMode::ChapterCount { book } => QueryResponse::ChapterCount(self.chapter_count(&book)?),
            QueryMode::VerseCount { book, chapter } => {
                QueryResponse::VerseCount(self.verse_count(&book, chapter)?)
            }
            QueryMode::Search(query) => QueryResponse::Search(self.search(&query)?),
            QueryMode::WholeChapter {
                book,
                chapter,
                options,
            } => QueryResponse::Verses(self.whole_chapter(&book, chapter, options)?),
            QueryMode::Verses {
                book,
                chapter,
                verses,
                options,
            } => QueryResponse::Verses(self.verses(&book, chapter, &verses, options)?),
        })
    }

    /// Highest chapter number of `book`.
    pub fn chapter_count(&self, book: &BookRef) -> Result<ChapterCount> {
        let book = resolve_book(self.store, book)?;
        match self.store.max_chapter(&book)? {
            Some(chapters_number) => Ok(ChapterCount {
                book,
                chapters_number,
            }),
            None => Err(LookupError::ChaptersNotFound { book }),
        }
    }

    /// Highest verse number of `book` `chapter`.
    pub fn verse_count(&self, book: &BookRef, chapter: u32) -> Result<VerseCount> {
        let book = resolve_book(self.store, book)?;
        match self.store.max_verse(&book, chapter)? {
            Some(verses_number) => Ok(VerseCount {
                book,
                chapter,
                verses_number,
            }),
            None => Err(LookupError::VersesNotFound { book, chapter }),
        }
    }

    /// Ranked search over the whole corpus.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let verses = match self.store.resident() {
            Some(records) => search_records(records, query)?,
            None => {
                let mut scan = SearchScan::new(query)?;
                self.store.scan(&mut |record| scan.offer(record))?;
                scan.finish()
            }
        };
        debug!(hits = verses.len(), limit = query.limit, "search complete");

        Ok(SearchResponse {
            message: format!("Found {} matching verses", verses.len()),
            search_text: query.text.clone(),
            verses,
        })
    }

    /// Every verse of a chapter, ordered by verse number. An empty chapter
    /// yields an empty list, not an error.
    pub fn whole_chapter(
        &self,
        book: &BookRef,
        chapter: u32,
        options: ContentOptions,
    ) -> Result<VersesResponse> {
        let book = resolve_book(self.store, book)?;
        let verses = self
            .store
            .chapter_verses(&book, chapter)?
            .iter()
            .map(|record| VerseEntry::Found(options.row(record)))
            .collect();
        Ok(VersesResponse { verses })
    }

    /// The listed verses in the listed order. A verse the store lacks gets a
    /// [`MissingVerse`] placeholder; the rest of the list is still returned.
    pub fn verses(
        &self,
        book: &BookRef,
        chapter: u32,
        verses: &[u32],
        options: ContentOptions,
    ) -> Result<VersesResponse> {
        let book = resolve_book(self.store, book)?;
        let mut entries = Vec::with_capacity(verses.len());
        for &verse in verses {
            let entry = match self.store.verse(&book, chapter, verse)? {
                Some(record) => VerseEntry::Found(options.row(&record)),
                None => {
                    debug!(%book, chapter, verse, "verse not in corpus");
                    VerseEntry::Missing(MissingVerse::new(verse))
                }
            };
            entries.push(entry);
        }
        Ok(VersesResponse { verses: entries })
    }
}

/// Run one request against `store`.
pub fn execute<S: VerseStore + ?Sized>(store: &S, request: &VerseRequest) -> Result<QueryResponse> {
    Assembler::new(store).handle(request)
}
