//! Marker stripping properties.

use proptest::prelude::*;
use versicle::normalize::{is_marker, SUPERSCRIPT_DIGITS};
use versicle::strip_markers;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Text mixing plain words, CJK, ordinary digits and superscript markers.
fn marked_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::string::string_regex("[a-zA-Z0-9 ,.;:]{1,6}").unwrap(),
            2 => prop::sample::select(vec!["恩典", "怜悯", "神", "话", "，", "。"]).prop_map(str::to_string),
            2 => prop::sample::select(SUPERSCRIPT_DIGITS.to_vec()).prop_map(String::from),
            1 => prop::sample::select(vec!["₁", "ⁿ", "⁺", "°", "²⁰"]).prop_map(str::to_string),
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_idempotent(text in marked_text()) {
        let once = strip_markers(&text).into_owned();
        let twice = strip_markers(&once);
        prop_assert_eq!(twice.as_ref(), once.as_str());
    }

    #[test]
    fn prop_never_grows(text in marked_text()) {
        prop_assert!(strip_markers(&text).len() <= text.len());
    }

    #[test]
    fn prop_removes_exactly_the_markers(text in marked_text()) {
        let stripped = strip_markers(&text);
        let expected: String = text.chars().filter(|&c| !is_marker(c)).collect();
        prop_assert_eq!(stripped.as_ref(), expected.as_str());
        prop_assert!(!stripped.chars().any(is_marker));
    }

    #[test]
    fn prop_unmarked_text_is_borrowed(text in "[a-z 恩典神]{0,30}") {
        prop_assert!(matches!(strip_markers(&text), std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn prop_arbitrary_unicode_survives(text in any::<String>()) {
        let stripped = strip_markers(&text);
        prop_assert_eq!(
            stripped.chars().count(),
            text.chars().filter(|&c| !is_marker(c)).count()
        );
    }
}
