//! Module `charcache` implements `A[c]`, the union over every position of
//! `P⁺[c][·]`: the set of records that contain byte `c` anywhere at all.
//! Used as a necessary-but-not-sufficient filter ahead of verification for
//! `contains` and multi-slice patterns.

use std::collections::HashMap;

use crate::{bitmaps::Bitmap, positional::PositionalMap};

#[derive(Default)]
pub struct CharCache<B: Bitmap> {
    by_byte: HashMap<u8, B>,
}

impl<B: Bitmap> CharCache<B> {
    /// Derive the cache from the forward positional index. Rebuilt
    /// whenever `P⁺` changes (spec invariant for `CharCache`).
    pub fn derive(forward: &PositionalMap<B>) -> Self {
        let mut by_byte = HashMap::new();
        for (c, slots) in forward.iter_bytes() {
            let mut union = B::create();
            for slot in slots.iter().flatten() {
                union.or_into(slot);
            }
            if !union.is_empty() {
                by_byte.insert(c, union);
            }
        }
        CharCache { by_byte }
    }

    pub fn get(&self, c: u8) -> Option<&B> {
        self.by_byte.get(&c)
    }

    /// Intersect `candidate` with `A[c]` for every distinct byte in
    /// `bytes`, short-circuiting to an empty set the moment any byte is
    /// never seen anywhere in the column (spec early-termination rule).
    /// `candidate` is `None` on entry meaning "no constraint yet".
    pub fn intersect_unique<'a, I>(&self, candidate: Option<B>, bytes: I) -> Option<B>
    where
        I: IntoIterator<Item = &'a u8>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut acc = candidate;
        for &c in bytes {
            if !seen.insert(c) {
                continue; // dedupe repeated bytes, spec §4.4
            }
            let bmap = match self.get(c) {
                Some(bmap) => bmap,
                None => return Some(B::create()), // byte never appears: empty result
            };
            acc = Some(match acc {
                Some(mut a) => {
                    a.and_into(bmap);
                    a
                }
                None => bmap.copy(),
            });
            if acc.as_ref().map(|a| a.is_empty()).unwrap_or(false) {
                return acc; // early termination
            }
        }
        acc
    }

    pub fn footprint(&self) -> usize {
        self.by_byte.values().map(|b| b.footprint()).sum()
    }
}

#[cfg(test)]
#[path = "charcache_test.rs"]
mod charcache_test;
