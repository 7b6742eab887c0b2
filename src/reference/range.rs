// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verse expression parsing.
//!
//! Three shapes, checked in this order:
//!
//! | Input  | Result                           |
//! |--------|----------------------------------|
//! | `0`    | whole chapter                    |
//! | `3-5`  | `[3, 4, 5]` (closed, inclusive)  |
//! | `16`   | `[16]`                           |
//!
//! Verse numbers are positive decimal integers, digits only. A reversed range
//! is rejected rather than quietly expanding to nothing.

use crate::error::{LookupError, Result};

/// The expression meaning "every verse in the chapter".
pub const WHOLE_CHAPTER: &str = "0";

/// Longest range a single expression may expand to. The longest chapter in
/// the corpus has 176 verses; this leaves headroom without letting one
/// request fan out into millions of point lookups.
pub const MAX_RANGE_LEN: u32 = 500;

/// A parsed verse expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseSelection {
    /// Every verse in the chapter, ordered by verse number.
    WholeChapter,
    /// These verses, in this order. Never empty.
    Verses(Vec<u32>),
}

impl VerseSelection {
    pub fn is_whole_chapter(&self) -> bool {
        matches!(self, VerseSelection::WholeChapter)
    }
}

/// Parse a verse expression.
///
/// # Errors
///
/// - [`LookupError::InvalidRange`] when `start > end`
/// - [`LookupError::InvalidReference`] for anything that is not a positive
///   integer or a single-hyphen range of them
pub fn parse_range(expr: &str) -> Result<VerseSelection> {
    let trimmed = expr.trim();
    if trimmed == WHOLE_CHAPTER {
        return Ok(VerseSelection::WholeChapter);
    }

    let Some((start, end)) = trimmed.split_once('-') else {
        return Ok(VerseSelection::Verses(vec![parse_verse_number(trimmed, expr)?]));
    };

    let start = parse_verse_number(start, expr)?;
    let end = parse_verse_number(end, expr)?;
    if start > end {
        return Err(LookupError::InvalidRange {
            expr: expr.to_string(),
            start,
            end,
        });
    }
    if end - start >= MAX_RANGE_LEN {
        return Err(LookupError::InvalidReference(expr.to_string()));
    }

    let verses: Vec<u32> = (start..=end).collect();
    crate::contracts::check_range_expanded(&verses);
    Ok(VerseSelection::Verses(verses))
}

/// One positive verse number. `expr` is the whole expression, for the error.
fn parse_verse_number(token: &str, expr: &str) -> Result<u32> {
    let token = token.trim();
    let invalid = || LookupError::InvalidReference(expr.to_string());

    // `u32::from_str` would accept a leading '+'
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match token.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(n),
    }
}
