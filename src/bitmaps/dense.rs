//! Module `dense` implements [Bitmap] as a flat array of 64-bit words, the
//! "dense block-array fallback" spec `§4.1` allows as an alternative to a
//! compressed representation. Appropriate when the id space is small and
//! densely populated, where roaring's segment bookkeeping buys nothing.

use crate::{bitmaps::Bitmap, types::RecordId};

const BITS: usize = 64;

/// Dense, word-packed bitmap over `RecordId`.
#[derive(Clone, Default)]
pub struct DenseBitmap {
    words: Vec<u64>,
}

impl DenseBitmap {
    fn word_index(id: RecordId) -> usize {
        (id as usize) / BITS
    }

    fn ensure_words(&mut self, upto: usize) {
        if self.words.len() <= upto {
            self.words.resize(upto + 1, 0);
        }
    }
}

impl Bitmap for DenseBitmap {
    const BACKEND: &'static str = "dense";

    #[inline]
    fn add(&mut self, id: RecordId) {
        let w = Self::word_index(id);
        self.ensure_words(w);
        self.words[w] |= 1u64 << (id as usize % BITS);
    }

    #[inline]
    fn contains(&self, id: RecordId) -> bool {
        let w = Self::word_index(id);
        match self.words.get(w) {
            Some(word) => word & (1u64 << (id as usize % BITS)) != 0,
            None => false,
        }
    }

    #[inline]
    fn cardinality(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    fn and(&self, other: &Self) -> Self {
        let n = self.words.len().min(other.words.len());
        let words = (0..n).map(|i| self.words[i] & other.words[i]).collect();
        DenseBitmap { words }
    }

    fn or(&self, other: &Self) -> Self {
        let n = self.words.len().max(other.words.len());
        let words = (0..n)
            .map(|i| {
                let a = self.words.get(i).copied().unwrap_or(0);
                let b = other.words.get(i).copied().unwrap_or(0);
                a | b
            })
            .collect();
        DenseBitmap { words }
    }

    fn and_into(&mut self, other: &Self) {
        self.words.truncate(other.words.len());
        for (i, w) in self.words.iter_mut().enumerate() {
            *w &= other.words.get(i).copied().unwrap_or(0);
        }
    }

    fn or_into(&mut self, other: &Self) {
        self.ensure_words(other.words.len().saturating_sub(1));
        for (i, w) in other.words.iter().enumerate() {
            self.words[i] |= w;
        }
    }

    fn to_array(&self) -> Vec<RecordId> {
        let mut out = Vec::new();
        for (wi, word) in self.words.iter().enumerate() {
            let mut word = *word;
            while word != 0 {
                let bit = word.trailing_zeros() as usize;
                out.push((wi * BITS + bit) as RecordId);
                word &= word - 1;
            }
        }
        out
    }

    fn footprint(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod dense_test;
