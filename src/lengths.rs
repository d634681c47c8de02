//! Module `lengths` implements the length partition `L[k]`: the set of
//! records whose value has exactly length `k`. It also precomputes the
//! suffix union `L[≥k] = ⋃_{j≥k} L[j]` at build time so that every
//! length-lower-bound filter the evaluator needs (prefix, suffix, pure
//! wildcard with `%`, multi-slice) is an O(1) lookup rather than a
//! query-time union.

use crate::{bitmaps::Bitmap, types::RecordId};

pub struct LengthIndex<B: Bitmap> {
    exact: Vec<B>,
    /// `at_least[k] = ⋃_{j>=k} exact[j]`, one entry longer than `exact`
    /// so `at_least(max_len + 1)` is a well-defined, always-empty lookup.
    at_least: Vec<B>,
}

impl<B: Bitmap> LengthIndex<B> {
    /// Build from per-record lengths, already clamped by the caller if
    /// it wants truncation; `lengths[id]` is the value length recorded
    /// for `id`.
    pub fn build(lengths: &[usize]) -> Self {
        let max_len = lengths.iter().copied().max().unwrap_or(0);
        let mut exact: Vec<B> = (0..=max_len).map(|_| B::create()).collect();
        for (id, &len) in lengths.iter().enumerate() {
            exact[len].add(id as RecordId);
        }

        let mut at_least: Vec<B> = (0..=(max_len + 1)).map(|_| B::create()).collect();
        // at_least[max_len+1] stays empty; fold down from the top.
        for k in (0..=max_len).rev() {
            let mut acc = exact[k].copy();
            acc.or_into(&at_least[k + 1]);
            at_least[k] = acc;
        }

        LengthIndex { exact, at_least }
    }

    pub fn max_len(&self) -> usize {
        self.exact.len().saturating_sub(1)
    }

    /// `L[k]`, the set of records whose length is exactly `k`.
    pub fn exact(&self, k: usize) -> B {
        self.exact.get(k).cloned().unwrap_or_else(B::create)
    }

    /// `⋃_{j>=k} L[j]`.
    pub fn at_least(&self, k: usize) -> B {
        self.at_least.get(k).cloned().unwrap_or_else(B::create)
    }

    pub fn footprint(&self) -> usize {
        self.exact.iter().map(|b| b.footprint()).sum::<usize>()
            + self.at_least.iter().map(|b| b.footprint()).sum::<usize>()
    }
}

#[cfg(test)]
#[path = "lengths_test.rs"]
mod lengths_test;
