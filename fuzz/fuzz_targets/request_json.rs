// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-request handling from raw JSON bytes.
//!
//! Anything that deserializes as a request must produce either a response
//! or a classified error. Store errors cannot happen against the in-memory
//! sample corpus, so seeing one is a bug.

#![no_main]

use libfuzzer_sys::fuzz_target;
use versicle::testing::sample_store;
use versicle::{execute, ErrorKind, MemoryStore, VerseRequest};

fuzz_target!(|data: &[u8]| {
    static STORE: std::sync::OnceLock<MemoryStore> = std::sync::OnceLock::new();
    let store = STORE.get_or_init(sample_store);

    let Ok(request) = serde_json::from_slice::<VerseRequest>(data) else {
        return;
    };
    // Keep huge limits from turning into huge allocations
    if request.limit.is_some_and(|l| l > 10_000) {
        return;
    }
    if let Err(err) = execute(store, &request) {
        assert_ne!(err.kind(), ErrorKind::Store, "{}", err);
    }
});
