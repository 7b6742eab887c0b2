// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning what a reader typed into something the store can key on: a book
//! name into a canonical id, a verse expression into verse numbers.

mod range;
mod resolver;

pub use range::{parse_range, VerseSelection, MAX_RANGE_LEN, WHOLE_CHAPTER};
pub use resolver::resolve_book;
