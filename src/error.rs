// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Every failure a caller can see maps to exactly one [`ErrorKind`], and every
//! kind maps to one status code. Callers never get a partial payload alongside
//! an error: either the whole request succeeds or it surfaces one of these.
//!
//! | Variant                           | Kind               | Status |
//! |-----------------------------------|--------------------|--------|
//! | `BookNotFound`, `AmbiguousBook`   | `NotFound`         | 404    |
//! | `ChaptersNotFound`                | `NotFound`         | 404    |
//! | `VersesNotFound`                  | `NotFound`         | 404    |
//! | `InvalidRequest`                  | `InvalidRequest`   | 400    |
//! | `InvalidReference`, `InvalidRange`| `InvalidReference` | 400    |
//! | `InvalidQuery`                    | `InvalidQuery`     | 400    |
//! | `Store`                           | `Store`            | 500    |
//!
//! A verse missing from the middle of a range is *not* an error. The
//! assembler reports it inline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Failures from the row store. All of them are fatal for the request.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "sqlite")]
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corpus table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("invalid record {book} {chapter}:{verse}: chapter and verse must be positive")]
    NonPositiveKey {
        book: String,
        chapter: u32,
        verse: u32,
    },

    #[error("duplicate record {book} {chapter}:{verse}")]
    DuplicateVerse {
        book: String,
        chapter: u32,
        verse: u32,
    },
}

/// Everything that can abort a query.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no book is named '{0}'")]
    BookNotFound(String),

    #[error("book name '{name}' is ambiguous: matches {}", .candidates.join(", "))]
    AmbiguousBook {
        name: String,
        candidates: Vec<String>,
    },

    #[error("chapters not found for book '{book}'")]
    ChaptersNotFound { book: String },

    #[error("verses not found for {book} chapter {chapter}")]
    VersesNotFound { book: String, chapter: u32 },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("invalid verse reference '{0}'")]
    InvalidReference(String),

    #[error("invalid verse range '{expr}': start {start} is after end {end}")]
    InvalidRange { expr: String, start: u32, end: u32 },

    #[error("search text must contain at least one term")]
    InvalidQuery,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LookupError {
    pub(crate) fn missing_field(field: &str, mode: &str) -> Self {
        LookupError::InvalidRequest(format!("{} must be provided for {}", field, mode))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::BookNotFound(_)
            | LookupError::AmbiguousBook { .. }
            | LookupError::ChaptersNotFound { .. }
            | LookupError::VersesNotFound { .. } => ErrorKind::NotFound,
            LookupError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            LookupError::InvalidReference(_) | LookupError::InvalidRange { .. } => {
                ErrorKind::InvalidReference
            }
            LookupError::InvalidQuery => ErrorKind::InvalidQuery,
            LookupError::Store(_) => ErrorKind::Store,
        }
    }

    pub fn status(&self) -> u16 {
        self.kind().status()
    }

    /// The status/kind pair surfaced to callers.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status(),
            kind: self.kind(),
            detail: self.to_string(),
        }
    }
}

/// Coarse error classification exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidRequest,
    InvalidReference,
    InvalidQuery,
    Store,
}

impl ErrorKind {
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidRequest | ErrorKind::InvalidReference | ErrorKind::InvalidQuery => 400,
            ErrorKind::Store => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::InvalidReference => "invalid_reference",
            ErrorKind::InvalidQuery => "invalid_query",
            ErrorKind::Store => "store",
        };
        f.write_str(name)
    }
}

/// Serialized error payload: `{"status": 404, "kind": "not_found", "detail": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub kind: ErrorKind,
    pub detail: String,
}

pub type Result<T, E = LookupError> = std::result::Result<T, E>;
