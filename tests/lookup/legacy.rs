//! Requests and databases in the older wire/table form.
//!
//! Older clients send `book_eng`, `verse` and `content` instead of
//! `book_ref`, `verse_expr` and `version_key`, and older databases carry no
//! footnote columns.

use super::common::{lookup, request, sample_store};
use versicle::{execute, ErrorKind, QueryResponse};

#[test]
fn old_field_names_are_aliases() {
    let store = sample_store();
    let old = request(r#"{"book_eng": "John", "chapter": 1, "verse": "1-2", "content": "rev_eng"}"#);
    let new = request(r#"{"book_ref": "John", "chapter": 1, "verse_expr": "1-2", "version_key": "rev_eng"}"#);
    assert_eq!(old, new);
    assert_eq!(execute(&store, &old).unwrap(), execute(&store, &new).unwrap());
}

#[test]
fn error_body_shape() {
    let store = sample_store();
    let err = execute(&store, &request(r#"{"book_eng": "John", "verses_check": true}"#)).unwrap_err();
    let body = serde_json::to_value(err.to_body()).unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["kind"], "invalid_request");
    assert!(body["detail"].as_str().unwrap().contains("chapter"));
}

#[test]
fn response_json_is_flat() {
    let store = sample_store();
    let response = execute(
        &store,
        &request(r#"{"book_eng": "John", "chapter": 3, "verse": "16", "content": "rev_eng"}"#),
    )
    .unwrap();
    assert!(matches!(response, QueryResponse::Verses(_)));
    let json = serde_json::to_value(&response).unwrap();
    let first = &json["verses"][0];
    assert_eq!(first["book"], "John");
    assert_eq!(first["book_name"], "约翰福音");
    assert_eq!(first["chapter"], 3);
    assert_eq!(first["verse"], 16);
}

#[cfg(feature = "sqlite")]
#[test]
fn database_without_footnote_columns() {
    use rusqlite::Connection;
    use versicle::SqliteStore;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE bible (book_eng TEXT, book_cn TEXT, chapter INTEGER, verse INTEGER,
                                 content_rev_eng TEXT, content_rev_cn TEXT, content_cuv_cn TEXT);
             INSERT INTO bible VALUES ('John', '约翰福音', 3, 16, 'For God so loved¹ the world', '神爱世人', '神爱世人');",
        )
        .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let verses = lookup(
        &store,
        r#"{"book_eng": "约翰福音", "chapter": 3, "verse": "16", "content": "rev_eng", "footnotes": true}"#,
    );
    let json = serde_json::to_value(&verses[0]).unwrap();
    assert_eq!(json["content"], "For God so loved¹ the world");
    assert_eq!(json["footnotes"], serde_json::json!({}));
}

#[cfg(feature = "sqlite")]
#[test]
fn database_missing_key_column_fails_to_open() {
    use rusqlite::Connection;
    use versicle::{LookupError, SqliteStore};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE bible (book_eng TEXT, chapter INTEGER, verse INTEGER);")
        .unwrap();

    let err = LookupError::from(SqliteStore::open(&path).err().expect("open must fail"));
    assert_eq!(err.kind(), ErrorKind::Store);
    assert_eq!(err.status(), 500);
    assert!(err.to_string().contains("book_cn"));
}
