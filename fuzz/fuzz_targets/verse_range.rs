// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verse expression parsing under adversarial input.
//!
//! The parser sees whatever a client typed into the verse box. The worst case
//! must be an `InvalidReference`, never a panic and never a range so large it
//! fans out into millions of lookups.

#![no_main]

use libfuzzer_sys::fuzz_target;
use versicle::{parse_range, ErrorKind, VerseSelection, MAX_RANGE_LEN};

fuzz_target!(|expr: &str| {
    match parse_range(expr) {
        Ok(VerseSelection::WholeChapter) => assert_eq!(expr.trim(), "0"),
        Ok(VerseSelection::Verses(verses)) => {
            assert!(!verses.is_empty());
            assert!(verses.len() <= MAX_RANGE_LEN as usize);
            assert!(verses[0] > 0);
            assert!(verses.windows(2).all(|w| w[1] == w[0] + 1));
        }
        Err(err) => assert_eq!(err.kind(), ErrorKind::InvalidReference),
    }
});
