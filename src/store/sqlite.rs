// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SQLite-backed corpus.
//!
//! Schema (one table, `bible`):
//!
//! | Column                 | Type    | Notes                          |
//! |------------------------|---------|--------------------------------|
//! | `book_eng`             | TEXT    | canonical id                   |
//! | `book_cn`              | TEXT    | display name                   |
//! | `chapter`, `verse`     | INTEGER | positive                       |
//! | `content_<version>`    | TEXT    | one per version, optional      |
//! | `footnote_1..12`       | TEXT    | optional                       |
//!
//! Older snapshots carry only some content columns and no footnote columns at
//! all. The table layout is read once on open and the SELECT list is built
//! from what is actually there; an absent column reads as an absent value.
//!
//! The connection is opened read-only and guarded by a mutex. Scans run in
//! `rowid` order, which is insertion order.

use std::collections::HashSet;
use std::path::Path;

use parking_lot::Mutex;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use tracing::debug;

use super::VerseStore;
use crate::error::StoreError;
use crate::types::{Footnotes, VerseRecord, Version, FOOTNOTE_SLOTS};

/// Corpus table name.
pub const TABLE: &str = "bible";

const KEY_COLUMNS: [&str; 4] = ["book_eng", "book_cn", "chapter", "verse"];

fn footnote_column(slot: usize) -> String {
    format!("footnote_{}", slot)
}

/// Which optional columns this database has, and the SELECT list for them.
#[derive(Debug)]
struct Layout {
    select: String,
    versions: Vec<Version>,
    footnote_slots: Vec<usize>,
}

impl Layout {
    fn read(conn: &Connection) -> Result<Self, StoreError> {
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
        let columns = stmt
            .query_map([TABLE], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<String>, _>>()?;

        if let Some(missing) = KEY_COLUMNS.iter().find(|c| !columns.contains(**c)) {
            return Err(StoreError::MissingColumn {
                table: TABLE.to_string(),
                column: (*missing).to_string(),
            });
        }

        let versions: Vec<Version> = Version::ALL
            .into_iter()
            .filter(|v| columns.contains(v.column()))
            .collect();
        let footnote_slots: Vec<usize> = (1..=FOOTNOTE_SLOTS)
            .filter(|&slot| columns.contains(&footnote_column(slot)))
            .collect();

        let mut select: Vec<String> = KEY_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        select.extend(versions.iter().map(|v| v.column().to_string()));
        select.extend(footnote_slots.iter().map(|&slot| footnote_column(slot)));

        Ok(Self {
            select: select.join(", "),
            versions,
            footnote_slots,
        })
    }

    fn record(&self, row: &Row<'_>) -> rusqlite::Result<VerseRecord> {
        let mut record = VerseRecord {
            book: row.get(0)?,
            book_name: row.get(1)?,
            chapter: row.get(2)?,
            verse: row.get(3)?,
            content: Default::default(),
            footnotes: Footnotes::default(),
        };

        let mut idx = KEY_COLUMNS.len();
        for &version in &self.versions {
            if let Some(text) = row.get::<_, Option<String>>(idx)? {
                record.content.insert(version, text);
            }
            idx += 1;
        }
        for &slot in &self.footnote_slots {
            if let Some(note) = row.get::<_, Option<String>>(idx)? {
                record.footnotes.set(slot, note);
            }
            idx += 1;
        }
        Ok(record)
    }
}

pub struct SqliteStore {
    conn: Mutex<Connection>,
    layout: Layout,
}

impl SqliteStore {
    /// Open an existing corpus database read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::from_connection(conn)
    }

    /// Wrap an already-open connection.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let layout = Layout::read(&conn)?;
        debug!(
            versions = ?layout.versions,
            footnote_columns = layout.footnote_slots.len(),
            "opened sqlite corpus"
        );
        Ok(Self {
            conn: Mutex::new(conn),
            layout,
        })
    }

    /// Versions this database has a content column for.
    pub fn versions(&self) -> &[Version] {
        &self.layout.versions
    }

    fn max_of(&self, sql: &str, params: impl rusqlite::Params) -> Result<Option<u32>, StoreError> {
        let conn = self.conn.lock();
        let max = conn
            .prepare_cached(sql)?
            .query_row(params, |row| row.get::<_, Option<u32>>(0))?;
        Ok(max)
    }
}

impl VerseStore for SqliteStore {
    fn canonical_ids_for(&self, display_name: &str) -> Result<Vec<String>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT DISTINCT book_eng FROM {} WHERE book_cn = ?1",
            TABLE
        ))?;
        let ids = stmt
            .query_map([display_name], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    fn max_chapter(&self, book: &str) -> Result<Option<u32>, StoreError> {
        self.max_of(
            &format!("SELECT MAX(chapter) FROM {} WHERE book_eng = ?1", TABLE),
            params![book],
        )
    }

    fn max_verse(&self, book: &str, chapter: u32) -> Result<Option<u32>, StoreError> {
        self.max_of(
            &format!(
                "SELECT MAX(verse) FROM {} WHERE book_eng = ?1 AND chapter = ?2",
                TABLE
            ),
            params![book, chapter],
        )
    }

    fn chapter_verses(&self, book: &str, chapter: u32) -> Result<Vec<VerseRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM {} WHERE book_eng = ?1 AND chapter = ?2 ORDER BY verse",
            self.layout.select, TABLE
        ))?;
        let records = stmt
            .query_map(params![book, chapter], |row| self.layout.record(row))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn verse(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<VerseRecord>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM {} WHERE book_eng = ?1 AND chapter = ?2 AND verse = ?3",
            self.layout.select, TABLE
        ))?;
        let record = stmt
            .query_row(params![book, chapter, verse], |row| self.layout.record(row))
            .optional()?;
        Ok(record)
    }

    fn scan(&self, visit: &mut dyn FnMut(&VerseRecord)) -> Result<(), StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM {} ORDER BY rowid",
            self.layout.select, TABLE
        ))?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let record = self.layout.record(row)?;
            visit(&record);
        }
        Ok(())
    }
}

/// Create (or extend) a corpus database at `path` and insert `records`.
///
/// Writes every content and footnote column, in one transaction.
pub fn create_corpus(path: impl AsRef<Path>, records: &[VerseRecord]) -> Result<(), StoreError> {
    let mut conn = Connection::open(path.as_ref())?;

    let mut columns: Vec<String> = vec![
        "book_eng TEXT NOT NULL".into(),
        "book_cn TEXT NOT NULL".into(),
        "chapter INTEGER NOT NULL CHECK (chapter > 0)".into(),
        "verse INTEGER NOT NULL CHECK (verse > 0)".into(),
    ];
    columns.extend(Version::ALL.iter().map(|v| format!("{} TEXT", v.column())));
    columns.extend((1..=FOOTNOTE_SLOTS).map(|slot| format!("{} TEXT", footnote_column(slot))));

    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {table} ({columns}, UNIQUE (book_eng, chapter, verse));
         CREATE INDEX IF NOT EXISTS {table}_book_cn ON {table} (book_cn);",
        table = TABLE,
        columns = columns.join(", "),
    ))?;

    let column_count = KEY_COLUMNS.len() + Version::ALL.len() + FOOTNOTE_SLOTS;
    let placeholders = vec!["?"; column_count].join(", ");

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&format!("INSERT INTO {} VALUES ({})", TABLE, placeholders))?;
        for record in records {
            let mut values: Vec<Value> = Vec::with_capacity(column_count);
            values.push(Value::Text(record.book.clone()));
            values.push(Value::Text(record.book_name.clone()));
            values.push(Value::Integer(i64::from(record.chapter)));
            values.push(Value::Integer(i64::from(record.verse)));
            for version in Version::ALL {
                values.push(
                    record
                        .text(version)
                        .map_or(Value::Null, |text| Value::Text(text.to_string())),
                );
            }
            for slot in 1..=FOOTNOTE_SLOTS {
                values.push(
                    record
                        .footnotes
                        .get(slot)
                        .map_or(Value::Null, |note| Value::Text(note.to_string())),
                );
            }
            stmt.execute(rusqlite::params_from_iter(values))?;
        }
    }
    tx.commit()?;

    debug!(records = records.len(), "wrote sqlite corpus");
    Ok(())
}
