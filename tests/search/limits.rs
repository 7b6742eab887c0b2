//! Result caps apply after ranking, never before.

use super::common::numbered_corpus;
use versicle::{
    execute, MemoryStore, QueryResponse, SearchResponse, VerseRecord, VerseRequest, VerseStore,
    Version, DEFAULT_LIMIT,
};

fn corpus_with_late_phrase_hit(filler: u32) -> Vec<VerseRecord> {
    let mut records = numbered_corpus(filler, "beta then alpha");
    records.push(
        VerseRecord::new("Revelation", "启示录", 22, 21).with_text(Version::RevEng, "alpha beta"),
    );
    records
}

fn run(store: &dyn VerseStore, phrase: &str, limit: Option<usize>) -> SearchResponse {
    let req = VerseRequest {
        search_text: Some(phrase.into()),
        version_key: Some("rev_eng".into()),
        limit,
        ..VerseRequest::default()
    };
    match execute(store, &req).unwrap() {
        QueryResponse::Search(found) => found,
        other => panic!("expected search, got {:?}", other),
    }
}

fn check_late_phrase_hit(store: &dyn VerseStore) {
    let found = run(store, "alpha beta", Some(5));
    assert_eq!(found.verses.len(), 5);
    assert_eq!(found.message, "Found 5 matching verses");
    assert_eq!(found.verses[0].reference, "启示录 22:21");
    assert_eq!(found.verses[0].score, 11);
    assert_eq!(
        found.verses[1..].iter().map(|h| h.verse).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn late_phrase_hit_survives_cap() {
    let store = MemoryStore::new(corpus_with_late_phrase_hit(3000)).unwrap();
    check_late_phrase_hit(&store);
}

#[cfg(feature = "sqlite")]
#[test]
fn late_phrase_hit_survives_cap_streamed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("psalms.db");
    versicle::create_corpus(&path, &corpus_with_late_phrase_hit(3000)).unwrap();
    let store = versicle::SqliteStore::open(&path).unwrap();
    check_late_phrase_hit(&store);
}

#[test]
fn default_limit_applies() {
    let store = MemoryStore::new(numbered_corpus(DEFAULT_LIMIT as u32 + 50, "selah")).unwrap();
    let found = run(&store, "selah", None);
    assert_eq!(found.verses.len(), DEFAULT_LIMIT);
    assert_eq!(found.verses.last().map(|h| h.verse), Some(DEFAULT_LIMIT as u32));
}

#[test]
fn explicit_limit_can_exceed_default() {
    let store = MemoryStore::new(numbered_corpus(DEFAULT_LIMIT as u32 + 50, "selah")).unwrap();
    let found = run(&store, "selah", Some(1000));
    assert_eq!(found.verses.len(), DEFAULT_LIMIT + 50);
}

#[test]
fn zero_limit_returns_nothing() {
    let store = MemoryStore::new(numbered_corpus(10, "selah")).unwrap();
    let found = run(&store, "selah", Some(0));
    assert!(found.verses.is_empty());
    assert_eq!(found.message, "Found 0 matching verses");
}
