//! Every term must be present; order and adjacency only affect the score.

use super::common::{for_each_store, references, sample_store, search};
use versicle::{execute, ErrorKind, VerseRequest};

#[test]
fn all_terms_required() {
    for_each_store(|backend, store| {
        let found = search(store, "怜悯 恩典", "rev_cn");
        assert_eq!(
            references(&found.verses),
            vec!["提摩太前书 1:2", "希伯来书 4:16"],
            "[{}]",
            backend
        );
        assert!(found.verses.iter().all(|h| h.score == 1));
    });
}

#[test]
fn term_order_does_not_matter_for_membership() {
    for_each_store(|_, store| {
        let a = search(store, "mercy grace", "rev_eng");
        let b = search(store, "grace mercy", "rev_eng");
        assert_eq!(references(&a.verses), references(&b.verses));
    });
}

#[test]
fn matching_is_case_sensitive() {
    for_each_store(|backend, store| {
        // 1 Timothy 1:2 has "Grace" but not "grace"
        let lower = search(store, "grace mercy", "rev_eng");
        assert_eq!(references(&lower.verses), vec!["希伯来书 4:16"], "[{}]", backend);
        let upper = search(store, "Grace mercy", "rev_eng");
        assert_eq!(references(&upper.verses), vec!["提摩太前书 1:2"], "[{}]", backend);
    });
}

#[test]
fn substring_matches_inside_words() {
    for_each_store(|_, store| {
        let found = search(store, "tabernacle", "rev_eng");
        assert_eq!(references(&found.verses), vec!["约翰福音 1:14"]);
    });
}

#[test]
fn search_needs_no_book_and_ignores_it() {
    let store = sample_store();
    let req = VerseRequest {
        book_ref: Some(versicle::BookRef::infer("Genesis")),
        chapter: Some(1),
        verse_expr: Some("1".into()),
        search_text: Some("mercy".into()),
        version_key: Some("rev_eng".into()),
        ..VerseRequest::default()
    };
    let versicle::QueryResponse::Search(found) = execute(&store, &req).unwrap() else {
        panic!("search_text selects search mode")
    };
    assert_eq!(found.verses.len(), 3);
}

#[test]
fn blank_phrase_is_invalid_query() {
    let store = sample_store();
    for phrase in ["", "   ", "²³"] {
        let req = VerseRequest {
            search_text: Some(phrase.into()),
            version_key: Some("rev_eng".into()),
            ..VerseRequest::default()
        };
        let err = execute(&store, &req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuery, "{:?}", phrase);
        assert_eq!(err.status(), 400);
    }
}

#[test]
fn no_hits_is_success() {
    for_each_store(|_, store| {
        let found = search(store, "Melchizedek", "rev_eng");
        assert!(found.verses.is_empty());
        assert_eq!(found.message, "Found 0 matching verses");
    });
}
