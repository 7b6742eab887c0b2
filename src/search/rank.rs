// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-k collection.
//!
//! The scan visits every row, but only `limit` hits are ever held. A min-heap
//! keyed on "worst so far" decides in O(log k) whether a new hit displaces
//! anything. Order: score descending, then scan position ascending, which is
//! exactly what a stable sort over the full hit list would produce. So the
//! cap never drops a high-scoring row in favour of an earlier low-scoring one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Upper bound on eager heap allocation for very large limits.
const MAX_PREALLOC: usize = 1024;

struct Ranked<T> {
    score: u32,
    seq: usize,
    item: T,
}

impl<T> Ranked<T> {
    /// Greater means worse: lower score, or same score seen later.
    fn rank_cmp(score: u32, seq: usize, other_score: u32, other_seq: usize) -> Ordering {
        other_score.cmp(&score).then(seq.cmp(&other_seq))
    }
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::rank_cmp(self.score, self.seq, other.score, other.seq)
    }
}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The best `limit` items seen so far.
pub struct TopK<T> {
    limit: usize,
    heap: BinaryHeap<Ranked<T>>,
}

impl<T> TopK<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            heap: BinaryHeap::with_capacity(limit.min(MAX_PREALLOC) + 1),
        }
    }

    /// Whether an item with this score and position would be kept.
    ///
    /// Lets callers skip building an item that is about to be discarded.
    pub fn would_keep(&self, score: u32, seq: usize) -> bool {
        if self.limit == 0 {
            return false;
        }
        if self.heap.len() < self.limit {
            return true;
        }
        self.heap.peek().is_some_and(|worst| {
            Ranked::<T>::rank_cmp(score, seq, worst.score, worst.seq) == Ordering::Less
        })
    }

    pub fn offer(&mut self, score: u32, seq: usize, item: T) {
        if !self.would_keep(score, seq) {
            return;
        }
        self.heap.push(Ranked { score, seq, item });
        if self.heap.len() > self.limit {
            self.heap.pop();
        }
    }

    /// Combine two partial results, e.g. from separate chunks of one scan.
    /// Positions must come from the same sequence for the order to hold.
    pub fn merge(mut self, other: Self) -> Self {
        for ranked in other.heap {
            self.offer(ranked.score, ranked.seq, ranked.item);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Best first, as `(score, item)`.
    pub fn into_sorted(self) -> Vec<(u32, T)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|ranked| (ranked.score, ranked.item))
            .collect()
    }
}
