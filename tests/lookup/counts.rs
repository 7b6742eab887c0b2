//! Chapter and verse count modes.

use super::common::{for_each_store, request};
use versicle::{execute, ErrorKind, LookupError, QueryResponse};

#[test]
fn chapter_count_is_highest_chapter() {
    for_each_store(|backend, store| {
        let response = execute(store, &request(r#"{"book_ref": "John", "chapters_check": true}"#)).unwrap();
        let QueryResponse::ChapterCount(count) = response else {
            panic!("[{}] expected a chapter count", backend)
        };
        assert_eq!(count.book, "John");
        assert_eq!(count.chapters_number, 3, "[{}]", backend);
    });
}

#[test]
fn verse_count_is_highest_verse() {
    for_each_store(|backend, store| {
        let response = execute(
            store,
            &request(r#"{"book_ref": "Ephesians", "chapter": 2, "verses_check": true}"#),
        )
        .unwrap();
        let QueryResponse::VerseCount(count) = response else {
            panic!("[{}] expected a verse count", backend)
        };
        // The highest verse, not the number of rows present
        assert_eq!(count.verses_number, 8, "[{}]", backend);
    });
}

#[test]
fn count_response_shape() {
    for_each_store(|_, store| {
        let response = execute(store, &request(r#"{"book_ref": "Genesis", "chapters_check": true}"#)).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"book": "Genesis", "chapters_number": 1}));

        let response = execute(
            store,
            &request(r#"{"book_ref": "Genesis", "chapter": 1, "verses_check": true}"#),
        )
        .unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"book": "Genesis", "chapter": 1, "verses_number": 2})
        );
    });
}

#[test]
fn unknown_book_has_no_chapters() {
    for_each_store(|backend, store| {
        let err = execute(store, &request(r#"{"book_ref": "Obadiah", "chapters_check": true}"#)).unwrap_err();
        assert!(matches!(err, LookupError::ChaptersNotFound { .. }), "[{}] {:?}", backend, err);
        assert_eq!(err.status(), 404);
    });
}

#[test]
fn empty_chapter_has_no_verses() {
    for_each_store(|backend, store| {
        let err = execute(
            store,
            &request(r#"{"book_ref": "John", "chapter": 2, "verses_check": true}"#),
        )
        .unwrap_err();
        assert!(
            matches!(err, LookupError::VersesNotFound { chapter: 2, .. }),
            "[{}] {:?}",
            backend,
            err
        );
    });
}

#[test]
fn verse_count_without_chapter_is_invalid() {
    let store = super::common::sample_store();
    let err = execute(&store, &request(r#"{"book_ref": "John", "verses_check": true}"#)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert_eq!(err.status(), 400);
}

#[test]
fn chapter_flag_wins_over_verse_flag() {
    let store = super::common::sample_store();
    let response = execute(
        &store,
        &request(r#"{"book_ref": "John", "chapters_check": true, "verses_check": true}"#),
    )
    .unwrap();
    assert!(matches!(response, QueryResponse::ChapterCount(_)));
}
