// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match predicate and two-tier scoring.
//!
//! A row qualifies when every term appears in its selected content, either in
//! the raw text or in the text with footnote markers stripped. That is the whole
//! predicate: plain substring containment, conjunctive across terms.
//!
//! Scoring has exactly two tiers:
//!
//! | Condition                                    | Score |
//! |----------------------------------------------|-------|
//! | all terms present, phrase not contiguous     | 1     |
//! | whole stripped phrase contiguous in content  | 11    |
//!
//! No term frequency, no positions. Phrase hits float above scattered hits
//! and the stable sort keeps corpus order inside each tier.

use crate::error::{LookupError, Result};
use crate::normalize::strip_markers;

/// Score of any qualifying row.
pub const BASE_SCORE: u32 = 1;

/// Added when the whole phrase occurs contiguously in the stripped content.
pub const PHRASE_BONUS: u32 = 10;

/// A search phrase compiled into its stripped form and terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatcher {
    phrase: String,
    terms: Vec<String>,
}

impl PhraseMatcher {
    /// Strip markers from `raw`, trim it, split on whitespace.
    ///
    /// # Errors
    ///
    /// [`LookupError::InvalidQuery`] when nothing is left to search for.
    pub fn new(raw: &str) -> Result<Self> {
        let phrase = strip_markers(raw).trim().to_string();
        let terms: Vec<String> = phrase.split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return Err(LookupError::InvalidQuery);
        }
        Ok(Self { phrase, terms })
    }

    /// The stripped, trimmed phrase the bonus looks for.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Score one row, or `None` if some term is missing from it.
    ///
    /// `content` is the selected version's text, absent when the version is
    /// unsupported. Footnotes never take part in matching.
    pub fn score(&self, content: Option<&str>) -> Option<u32> {
        let raw = content?;
        let stripped = strip_markers(raw);

        if !self
            .terms
            .iter()
            .all(|term| raw.contains(term.as_str()) || stripped.contains(term.as_str()))
        {
            return None;
        }

        Some(if stripped.contains(self.phrase.as_str()) {
            BASE_SCORE + PHRASE_BONUS
        } else {
            BASE_SCORE
        })
    }
}
