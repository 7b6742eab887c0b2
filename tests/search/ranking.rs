//! Two-tier ranking: contiguous phrase hits first, corpus order within a tier.

use super::common::{for_each_store, references, search};

#[test]
fn phrase_hits_come_first() {
    for_each_store(|backend, store| {
        let found = search(store, "the Word", "rev_eng");
        let scores: Vec<u32> = found.verses.iter().map(|h| h.score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted, "[{}]", backend);
        assert_eq!(found.verses[0].reference, "约翰福音 1:1");
        assert_eq!(found.verses[0].score, 11);
    });
}

#[test]
fn ties_keep_corpus_order() {
    for_each_store(|backend, store| {
        // Every hit is scattered, so all score 1 and stay in load order
        let found = search(store, "the God", "rev_eng");
        assert!(found.verses.iter().all(|h| h.score == 1), "[{}]", backend);
        assert_eq!(
            references(&found.verses),
            vec!["创世记 1:1", "约翰福音 1:1", "约翰福音 1:2", "约翰福音 3:16", "提摩太前书 1:2", "以弗所书 2:8"],
            "[{}]",
            backend
        );
    });
}

#[test]
fn phrase_tier_reorders_across_books() {
    for_each_store(|backend, store| {
        let found = search(store, "in the beginning", "rev_eng");
        // "in" also matches inside "beginning", but only John 1:2 has the
        // lowercase phrase, so it jumps ahead of the earlier verses
        assert_eq!(
            references(&found.verses),
            vec!["约翰福音 1:2", "创世记 1:1", "约翰福音 1:1"],
            "[{}]",
            backend
        );
        assert_eq!(
            found.verses.iter().map(|h| h.score).collect::<Vec<_>>(),
            vec![11, 1, 1]
        );

        let found = search(store, "the beginning", "rev_eng");
        assert_eq!(
            references(&found.verses),
            vec!["创世记 1:1", "约翰福音 1:1", "约翰福音 1:2"],
            "[{}]",
            backend
        );
        assert!(found.verses.iter().all(|h| h.score == 11));
    });
}

#[test]
fn response_envelope() {
    for_each_store(|_, store| {
        let found = search(store, "mercy", "rev_eng");
        assert_eq!(found.search_text, "mercy");
        assert_eq!(found.message, "Found 3 matching verses");
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["verses"][0]["reference"], "提摩太前书 1:2");
        assert_eq!(json["verses"][0]["score"], 11);
    });
}

#[test]
fn search_is_deterministic() {
    for_each_store(|backend, store| {
        let first = search(store, "grace", "rev_eng");
        for _ in 0..5 {
            assert_eq!(search(store, "grace", "rev_eng"), first, "[{}]", backend);
        }
    });
}
