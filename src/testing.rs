// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::store::MemoryStore;
use crate::types::{VerseRecord, Version};

fn verse(
    book: &str,
    name: &str,
    chapter: u32,
    verse: u32,
    texts: [&str; 3],
) -> VerseRecord {
    let mut record = VerseRecord::new(book, name, chapter, verse);
    for (version, text) in Version::ALL.into_iter().zip(texts) {
        if !text.is_empty() {
            record.content.insert(version, text.to_string());
        }
    }
    record
}

/// A small corpus in canonical order.
///
/// John 1 deliberately has a gap (verses 3..=13 are absent) so range
/// lookups can hit missing verses. Hebrews 4:16 carries no `cuv_cn` text.
pub fn sample_corpus() -> Vec<VerseRecord> {
    vec![
        verse(
            "Genesis",
            "创世记",
            1,
            1,
            [
                "In the beginning God created the heavens and the earth.",
                "起初神创造诸天与地。",
                "起初，神创造天地。",
            ],
        )
        .with_footnote(1, "Heb. Elohim"),
        verse(
            "Genesis",
            "创世记",
            1,
            2,
            [
                "But the earth became waste and emptiness, and darkness was on the surface of the deep.",
                "而地变为荒废空虚，渊面黑暗。",
                "地是空虚混沌，渊面黑暗。",
            ],
        ),
        verse(
            "John",
            "约翰福音",
            1,
            1,
            [
                "In the beginning was the Word¹, and the Word was with God, and the Word was God.",
                "太初有话¹，话与神同在，话就是神。",
                "太初有道，道与神同在，道就是神。",
            ],
        )
        .with_footnote(1, "Gk. logos, the Word expressing God")
        .with_footnote(3, ""),
        verse(
            "John",
            "约翰福音",
            1,
            2,
            [
                "He was in the beginning with God.",
                "这话太初与神同在。",
                "这道太初与神同在。",
            ],
        ),
        verse(
            "John",
            "约翰福音",
            1,
            14,
            [
                "And the Word became flesh and tabernacled among us, full of grace² and reality.",
                "话成了肉体，支搭帐幕在我们中间，丰丰满满地有恩典²，有实际。",
                "道成了肉身，住在我们中间，充充满满地有恩典有真理。",
            ],
        )
        .with_footnote(2, "grace: God enjoyed by man"),
        verse(
            "John",
            "约翰福音",
            3,
            16,
            [
                "For God so loved the world that He gave His only begotten Son, that every one who believes into Him would not perish, but would have eternal life.",
                "神爱世人，甚至将祂的独生子赐给他们，叫一切信入祂的，不至灭亡，反得永远的生命。",
                "神爱世人，甚至将他的独生子赐给他们，叫一切信他的，不至灭亡，反得永生。",
            ],
        ),
        verse(
            "1Timothy",
            "提摩太前书",
            1,
            2,
            [
                "To Timothy, my genuine child in faith: Grace, mercy, peace from God the Father.",
                "写信给因信作我真儿子的提摩太：愿恩典、怜悯、平安从父神归与你。",
                "写信给那因信主作我真儿子的提摩太。愿恩惠、怜悯、平安从父神归与你。",
            ],
        ),
        verse(
            "Hebrews",
            "希伯来书",
            4,
            16,
            [
                "Let us therefore come forward with boldness to the throne of grace that we may receive mercy and find grace for timely help.",
                "所以我们只管坦然无惧的来到施恩的宝座前，为要受怜悯，得恩典，作应时的帮助。",
                "",
            ],
        ),
        verse(
            "Ephesians",
            "以弗所书",
            2,
            4,
            [
                "But God, being rich in mercy, because of His great love with which He loved us,",
                "然而神丰富的怜悯，因祂爱我们的大爱，",
                "然而神既有丰富的怜悯，因他爱我们的大爱，",
            ],
        ),
        verse(
            "Ephesians",
            "以弗所书",
            2,
            8,
            [
                "For by grace you have been saved through faith, and this not of yourselves; it is the gift of God;",
                "你们得救是靠着恩典，藉着信；这并不是出于你们，乃是神的恩赐；",
                "你们得救是本乎恩，也因着信；这并不是出于自己，乃是神所赐的；",
            ],
        ),
    ]
}

/// [`sample_corpus`] loaded into a [`MemoryStore`].
pub fn sample_store() -> MemoryStore {
    MemoryStore::new(sample_corpus()).expect("sample corpus is well-formed")
}

/// `count` verses of Psalms 1, numbered from 1, all with the same `rev_eng`
/// text. For scale and cap tests.
pub fn numbered_corpus(count: u32, text: &str) -> Vec<VerseRecord> {
    (1..=count)
        .map(|v| VerseRecord::new("Psalms", "诗篇", 1, v).with_text(Version::RevEng, text))
        .collect()
}
