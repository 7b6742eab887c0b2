// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Footnote-marker stripping.
//!
//! Corpus text carries superscript digits (`¹`, `²`, ... `⁰`) that point at
//! footnotes. Readers never type them, so every comparison the search engine
//! makes has to be able to see through them. The set is closed: the ten
//! superscript digit glyphs, nothing else. Punctuation, whitespace, ordinary
//! digits and every other script pass through untouched.
//!
//! Note the code points are not contiguous. `¹²³` live in Latin-1 Supplement
//! (U+00B9, U+00B2, U+00B3), the rest in Superscripts and Subscripts
//! (U+2070, U+2074..=U+2079).

use std::borrow::Cow;

/// The closed set of footnote marker glyphs, in digit order 0..=9.
pub const SUPERSCRIPT_DIGITS: [char; 10] = [
    '\u{2070}', // ⁰
    '\u{00B9}', // ¹
    '\u{00B2}', // ²
    '\u{00B3}', // ³
    '\u{2074}', // ⁴
    '\u{2075}', // ⁵
    '\u{2076}', // ⁶
    '\u{2077}', // ⁷
    '\u{2078}', // ⁸
    '\u{2079}', // ⁹
];

/// True if `c` is one of the ten superscript digit markers.
#[inline]
pub fn is_marker(c: char) -> bool {
    matches!(
        c,
        '\u{2070}' | '\u{00B9}' | '\u{00B2}' | '\u{00B3}' | '\u{2074}'..='\u{2079}'
    )
}

/// Remove every footnote marker from `text` in a single pass.
///
/// Borrows when the input has no markers, which is the common case for
/// query strings and for most verses, so the search scan does not allocate
/// per row just to find out nothing changed.
///
/// Idempotent, and the output is never longer than the input.
pub fn strip_markers(text: &str) -> Cow<'_, str> {
    match text.find(is_marker) {
        None => Cow::Borrowed(text),
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..first]);
            out.extend(text[first..].chars().filter(|&c| !is_marker(c)));
            Cow::Owned(out)
        }
    }
}
