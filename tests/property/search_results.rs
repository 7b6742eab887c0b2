//! Search results agree with the brute-force oracle.

use super::oracles::{oracle_search, oracle_strip};
use proptest::prelude::*;
use versicle::{search_records, SearchQuery, SearchScan, VerseRecord, Version};

// ============================================================================
// STRATEGIES
// ============================================================================

const VOCAB: [&str; 8] = ["grace", "mercy", "peace", "love", "God", "恩典", "怜悯", "the"];

fn word() -> impl Strategy<Value = String> {
    (prop::sample::select(VOCAB.to_vec()), prop::option::weighted(0.2, prop::sample::select(vec!['¹', '²', '³'])))
        .prop_map(|(w, marker)| match marker {
            Some(m) => format!("{}{}", w, m),
            None => w.to_string(),
        })
}

fn verse_text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..8).prop_map(|words| words.join(" "))
}

fn record_parts() -> impl Strategy<Value = (String, Option<String>)> {
    (verse_text(), prop::option::weighted(0.3, verse_text()))
}

fn corpus() -> impl Strategy<Value = Vec<VerseRecord>> {
    prop::collection::vec(record_parts(), 0..60).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (text, note))| {
                let mut record = VerseRecord::new("Psalms", "诗篇", 1, i as u32 + 1)
                    .with_text(Version::RevEng, &text);
                if let Some(note) = note {
                    record = record.with_footnote(1, &note);
                }
                record
            })
            .collect()
    })
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..3).prop_map(|words| words.join(" "))
}

fn positions(records: &[VerseRecord], hits: &[versicle::MatchResult]) -> Vec<(usize, u32)> {
    hits.iter()
        .map(|h| {
            let idx = records
                .iter()
                .position(|r| r.verse == h.verse)
                .expect("hit must come from the corpus");
            (idx, h.score)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_matches_oracle(
        records in corpus(),
        phrase in phrase(),
        footnotes in any::<bool>(),
        limit in 0usize..20,
    ) {
        let query = SearchQuery::new(phrase.clone(), Some("rev_eng"))
            .with_footnotes(footnotes)
            .with_limit(limit);
        let results = search_records(&records, &query).unwrap();
        let expected = oracle_search(&records, &phrase, Some(Version::RevEng), limit);
        prop_assert_eq!(positions(&records, &results), expected);
        prop_assert!(results.iter().all(|h| h.footnotes.is_some() == footnotes));
    }

    #[test]
    fn prop_streamed_equals_resident(
        records in corpus(),
        phrase in phrase(),
        limit in 0usize..20,
    ) {
        let query = SearchQuery::new(phrase, Some("rev_eng")).with_limit(limit);
        let mut scan = SearchScan::new(&query).unwrap();
        for record in &records {
            scan.offer(record);
        }
        prop_assert_eq!(scan.finish(), search_records(&records, &query).unwrap());
    }

    #[test]
    fn prop_results_are_capped_and_sorted(
        records in corpus(),
        phrase in phrase(),
        limit in 0usize..20,
    ) {
        let query = SearchQuery::new(phrase.clone(), Some("rev_eng")).with_limit(limit);
        let results = search_records(&records, &query).unwrap();
        prop_assert!(results.len() <= limit);
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));

        let stripped = oracle_strip(&phrase);
        for hit in &results {
            // Every returned verse contains every term somewhere once stripped
            let text = oracle_strip(&hit.content);
            prop_assert!(stripped.split_whitespace().all(|t| text.contains(t)));
        }
    }

    #[test]
    fn prop_marker_in_query_is_invisible(
        records in corpus(),
        phrase in phrase(),
    ) {
        let plain = SearchQuery::new(oracle_strip(&phrase), Some("rev_eng"));
        let marked = SearchQuery::new(phrase, Some("rev_eng"));
        let a = search_records(&records, &plain).unwrap();
        let b = search_records(&records, &marked).unwrap();
        prop_assert_eq!(a, b);
    }
}
