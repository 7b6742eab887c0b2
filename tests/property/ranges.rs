//! Range parser properties.

use proptest::prelude::*;
use versicle::{parse_range, ErrorKind, LookupError, VerseSelection, MAX_RANGE_LEN};

proptest! {
    #[test]
    fn prop_single_verse_round_trips(v in 1u32..100_000) {
        prop_assert_eq!(parse_range(&v.to_string()).unwrap(), VerseSelection::Verses(vec![v]));
    }

    #[test]
    fn prop_range_is_closed_and_contiguous(start in 1u32..1000, len in 0u32..MAX_RANGE_LEN) {
        let end = start + len;
        let VerseSelection::Verses(verses) = parse_range(&format!("{}-{}", start, end)).unwrap() else {
            return Err(TestCaseError::fail("range parsed as whole chapter"));
        };
        prop_assert_eq!(verses.len() as u32, len + 1);
        prop_assert_eq!(verses.first().copied(), Some(start));
        prop_assert_eq!(verses.last().copied(), Some(end));
        prop_assert!(verses.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn prop_reversed_range_is_rejected(start in 2u32..10_000, gap in 1u32..1000) {
        let end = start.saturating_sub(gap).max(1);
        prop_assume!(end < start);
        let err = parse_range(&format!("{}-{}", start, end)).unwrap_err();
        prop_assert!(
            matches!(err, LookupError::InvalidRange { .. }),
            "expected InvalidRange, got {:?}",
            err
        );
    }

    #[test]
    fn prop_surrounding_whitespace_is_ignored(
        start in 1u32..200,
        len in 0u32..20,
        pad in "[ \t]{0,3}",
    ) {
        let expr = format!("{pad}{}{pad}-{pad}{}{pad}", start, start + len, pad = pad);
        let padded = parse_range(&expr).unwrap();
        let tight = parse_range(&format!("{}-{}", start, start + len)).unwrap();
        prop_assert_eq!(padded, tight);
    }

    #[test]
    fn prop_never_panics(expr in "\\PC{0,12}") {
        match parse_range(&expr) {
            Ok(VerseSelection::WholeChapter) => prop_assert_eq!(expr.trim(), "0"),
            Ok(VerseSelection::Verses(v)) => prop_assert!(!v.is_empty() && v[0] > 0),
            Err(e) => prop_assert_eq!(e.kind(), ErrorKind::InvalidReference),
        }
    }
}
