//! Book naming: canonical ids, display names, and their failures.

use super::common::{for_each_store, lookup, request};
use versicle::{execute, BookRef, ErrorKind, LookupError, MemoryStore, VerseRecord};

#[test]
fn display_name_and_canonical_id_agree() {
    for_each_store(|backend, store| {
        let by_id = lookup(
            store,
            r#"{"book_ref": "John", "chapter": 3, "verse_expr": "16", "version_key": "rev_cn"}"#,
        );
        let by_name = lookup(
            store,
            r#"{"book_ref": "约翰福音", "chapter": 3, "verse_expr": "16", "version_key": "rev_cn"}"#,
        );
        assert_eq!(by_id, by_name, "[{}]", backend);
    });
}

#[test]
fn explicit_scheme_overrides_inference() {
    for_each_store(|backend, store| {
        let verses = lookup(
            store,
            r#"{"book_ref": {"display_name": "约翰福音"}, "chapter": 3, "verse_expr": "16", "version_key": "rev_eng"}"#,
        );
        assert!(verses[0].is_found(), "[{}]", backend);

        // An ASCII string forced into the display-name scheme must match book_name exactly
        let err = execute(
            store,
            &request(r#"{"book_ref": {"display_name": "John"}, "chapter": 3, "verse_expr": "16"}"#),
        )
        .unwrap_err();
        assert!(matches!(err, LookupError::BookNotFound(_)), "[{}] {:?}", backend, err);
    });
}

#[test]
fn unknown_display_name_is_not_found() {
    for_each_store(|backend, store| {
        let err = execute(
            store,
            &request(r#"{"book_ref": "约翰", "chapter": 1, "verse_expr": "1"}"#),
        )
        .unwrap_err();
        assert!(matches!(err, LookupError::BookNotFound(_)), "[{}] {:?}", backend, err);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    });
}

#[test]
fn unknown_canonical_id_yields_placeholders() {
    for_each_store(|backend, store| {
        let verses = lookup(
            store,
            r#"{"book_ref": "Obadiah", "chapter": 1, "verse_expr": "1-2", "version_key": "rev_eng"}"#,
        );
        assert_eq!(verses.len(), 2, "[{}]", backend);
        assert!(verses.iter().all(|v| !v.is_found()));
    });
}

#[test]
fn shared_display_name_is_ambiguous() {
    let store = MemoryStore::new(vec![
        VerseRecord::new("1John", "约翰书", 1, 1),
        VerseRecord::new("2John", "约翰书", 1, 1),
    ])
    .unwrap();
    let err = execute(
        &store,
        &request(r#"{"book_ref": "约翰书", "chapters_check": true}"#),
    )
    .unwrap_err();
    assert!(matches!(err, LookupError::AmbiguousBook { .. }));
    assert_eq!(err.status(), 404);
}

#[test]
fn inference_by_script() {
    assert_eq!(BookRef::infer("1Timothy"), BookRef::Canonical("1Timothy".into()));
    assert_eq!(BookRef::infer("提摩太前书"), BookRef::DisplayName("提摩太前书".into()));
}
