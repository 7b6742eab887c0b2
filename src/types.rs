// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: the verse record, its versions and footnotes, and the
//! request/response shapes the assembler speaks.
//!
//! Records are read-only here. The store owns them; everything in this crate
//! either borrows a record or copies fields out of it into a response row.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Content value for a lookup whose version key is unknown (or absent).
pub const INVALID_VERSION: &str = "Invalid version specified";

/// Content value for a search hit whose version key is unknown (or absent).
pub const UNSUPPORTED_VERSION: &str = "unsupported version";

/// Content value for a verse inside a range that the store does not have.
pub const VERSE_NOT_FOUND: &str = "Verse not found";

/// Number of footnote slots a record carries.
pub const FOOTNOTE_SLOTS: usize = 12;

// ============================================================================
// VERSIONS
// ============================================================================

/// A translation of the corpus.
///
/// The set is closed. Content selection is a lookup keyed by this enum rather
/// than a branch per translation, so adding one means adding a variant here
/// and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Version {
    /// Recovery Version, English.
    RevEng,
    /// Recovery Version, Chinese.
    RevCn,
    /// Chinese Union Version.
    CuvCn,
}

impl Version {
    pub const ALL: [Version; 3] = [Version::RevEng, Version::RevCn, Version::CuvCn];

    /// The key callers use to select this version (`rev_eng`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Version::RevEng => "rev_eng",
            Version::RevCn => "rev_cn",
            Version::CuvCn => "cuv_cn",
        }
    }

    /// Store column holding this version's text.
    pub fn column(self) -> &'static str {
        match self {
            Version::RevEng => "content_rev_eng",
            Version::RevCn => "content_rev_cn",
            Version::CuvCn => "content_cuv_cn",
        }
    }

    /// Parse a version key. Unknown keys are `None`, never an error.
    pub fn from_key(key: &str) -> Option<Version> {
        Version::ALL.into_iter().find(|v| v.key() == key.trim())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// FOOTNOTES
// ============================================================================

/// Twelve optional annotation slots, numbered 1..=12.
///
/// Serialized as a plain array of up to twelve nullable strings, slot 1 first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<String>>", into = "Vec<Option<String>>")]
pub struct Footnotes([Option<String>; FOOTNOTE_SLOTS]);

impl Footnotes {
    /// Text in `slot` (1-based), if the slot holds any.
    pub fn get(&self, slot: usize) -> Option<&str> {
        slot.checked_sub(1)
            .and_then(|i| self.0.get(i))
            .and_then(Option::as_deref)
            .filter(|text| !text.trim().is_empty())
    }

    /// Fill `slot` (1-based). Slots outside 1..=12 are ignored.
    pub fn set(&mut self, slot: usize, text: impl Into<String>) {
        if let Some(entry) = slot.checked_sub(1).and_then(|i| self.0.get_mut(i)) {
            *entry = Some(text.into());
        }
    }

    /// Non-empty slots in slot order. Blank text counts as empty.
    pub fn present(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        (1..=FOOTNOTE_SLOTS).filter_map(move |slot| self.get(slot).map(|text| (slot as u8, text)))
    }

    /// The non-empty slots keyed by slot number, as attached to responses.
    pub fn attached(&self) -> BTreeMap<u8, String> {
        self.present()
            .map(|(slot, text)| (slot, text.to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl TryFrom<Vec<Option<String>>> for Footnotes {
    type Error = String;

    fn try_from(slots: Vec<Option<String>>) -> Result<Self, Self::Error> {
        if slots.len() > FOOTNOTE_SLOTS {
            return Err(format!(
                "at most {} footnote slots, got {}",
                FOOTNOTE_SLOTS,
                slots.len()
            ));
        }
        let mut notes = Footnotes::default();
        for (i, text) in slots.into_iter().enumerate() {
            notes.0[i] = text;
        }
        Ok(notes)
    }
}

impl From<Footnotes> for Vec<Option<String>> {
    fn from(notes: Footnotes) -> Self {
        let mut slots: Vec<Option<String>> = notes.0.into();
        while matches!(slots.last(), Some(None)) {
            slots.pop();
        }
        slots
    }
}

// ============================================================================
// VERSE RECORD
// ============================================================================

/// One row of the corpus. `(book, chapter, verse)` is the natural key.
///
/// Field names on the wire follow the store schema (`book_eng`, `book_cn`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Canonical book id (English slug, e.g. `John`).
    #[serde(rename = "book_eng")]
    pub book: String,
    /// Localized display name (e.g. `约翰福音`).
    #[serde(rename = "book_cn")]
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    /// Text per version. A corpus snapshot may carry only some versions.
    #[serde(default)]
    pub content: BTreeMap<Version, String>,
    #[serde(default, skip_serializing_if = "Footnotes::is_empty")]
    pub footnotes: Footnotes,
}

impl VerseRecord {
    pub fn new(book: &str, book_name: &str, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.to_string(),
            book_name: book_name.to_string(),
            chapter,
            verse,
            content: BTreeMap::new(),
            footnotes: Footnotes::default(),
        }
    }

    /// Builder-style content setter, mostly for fixtures.
    pub fn with_text(mut self, version: Version, text: &str) -> Self {
        self.content.insert(version, text.to_string());
        self
    }

    /// Builder-style footnote setter (1-based slot).
    pub fn with_footnote(mut self, slot: usize, text: &str) -> Self {
        self.footnotes.set(slot, text);
        self
    }

    /// Text for `version`, if this record carries it.
    pub fn text(&self, version: Version) -> Option<&str> {
        self.content.get(&version).map(String::as_str)
    }

    /// Selected content, or `fallback` when the version is unknown or this
    /// record has no text for it.
    pub fn text_or<'a>(&'a self, version: Option<Version>, fallback: &'a str) -> &'a str {
        version.and_then(|v| self.text(v)).unwrap_or(fallback)
    }

    /// Human-readable reference: `"{display_name} {chapter}:{verse}"`.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book_name, self.chapter, self.verse)
    }
}

// ============================================================================
// REQUEST
// ============================================================================

/// How the caller named a book.
///
/// The two schemes are kept apart because they resolve differently: a
/// canonical id is trusted as-is, a display name goes through the store's
/// alias lookup and must match exactly one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "RawBookRef")]
pub enum BookRef {
    Canonical(String),
    DisplayName(String),
}

impl BookRef {
    /// Infer the scheme from a bare string.
    ///
    /// Canonical ids are ASCII slugs; display names in this corpus are
    /// localized, so anything outside ASCII is taken as a display name.
    pub fn infer(raw: &str) -> BookRef {
        let raw = raw.trim();
        if raw.is_ascii() {
            BookRef::Canonical(raw.to_string())
        } else {
            BookRef::DisplayName(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BookRef::Canonical(s) | BookRef::DisplayName(s) => s,
        }
    }
}

impl fmt::Display for BookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBookRef {
    Plain(String),
    Canonical { canonical: String },
    DisplayName { display_name: String },
}

impl From<RawBookRef> for BookRef {
    fn from(raw: RawBookRef) -> Self {
        match raw {
            RawBookRef::Plain(s) => BookRef::infer(&s),
            RawBookRef::Canonical { canonical } => BookRef::Canonical(canonical),
            RawBookRef::DisplayName { display_name } => BookRef::DisplayName(display_name),
        }
    }
}

/// A single logical query.
///
/// Field aliases accept the older request shape (`book_eng`, `verse`,
/// `content`) so existing clients keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VerseRequest {
    #[serde(default, alias = "book_eng")]
    pub book_ref: Option<BookRef>,
    #[serde(default)]
    pub chapter: Option<u32>,
    #[serde(default, alias = "verse", deserialize_with = "string_or_number")]
    pub verse_expr: Option<String>,
    #[serde(default, alias = "content")]
    pub version_key: Option<String>,
    #[serde(default)]
    pub chapters_check: bool,
    #[serde(default)]
    pub verses_check: bool,
    #[serde(default)]
    pub footnotes: bool,
    #[serde(default)]
    pub search_text: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Verse expressions arrive as strings (`"3-5"`), but clients often send a
/// bare number for a single verse.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterCount {
    pub book: String,
    pub chapters_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseCount {
    pub book: String,
    pub chapter: u32,
    pub verses_number: u32,
}

/// A verse the store returned, shaped for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRow {
    pub book: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<BTreeMap<u8, String>>,
}

/// Placeholder for a requested verse the store does not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingVerse {
    pub verse: u32,
    pub content: String,
}

impl MissingVerse {
    pub fn new(verse: u32) -> Self {
        Self {
            verse,
            content: VERSE_NOT_FOUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseEntry {
    Found(VerseRow),
    Missing(MissingVerse),
}

impl VerseEntry {
    pub fn verse(&self) -> u32 {
        match self {
            VerseEntry::Found(row) => row.verse,
            VerseEntry::Missing(missing) => missing.verse,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            VerseEntry::Found(row) => &row.content,
            VerseEntry::Missing(missing) => &missing.content,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, VerseEntry::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersesResponse {
    pub verses: Vec<VerseEntry>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub book: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub content: String,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<BTreeMap<u8, String>>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    pub search_text: String,
    pub verses: Vec<MatchResult>,
}

/// Everything the assembler can answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    ChapterCount(ChapterCount),
    VerseCount(VerseCount),
    Verses(VersesResponse),
    Search(SearchResponse),
}
