// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Marker stripping must be total, idempotent, and never grow its input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use versicle::normalize::is_marker;
use versicle::strip_markers;

fuzz_target!(|text: &str| {
    let once = strip_markers(text);
    assert!(once.len() <= text.len());
    assert!(!once.chars().any(is_marker));
    assert_eq!(strip_markers(&once), once);
    assert_eq!(
        once.chars().count(),
        text.chars().filter(|&c| !is_marker(c)).count()
    );
});
