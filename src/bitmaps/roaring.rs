//! Module `roaring` implements [Bitmap] on top of the compressed
//! [roaring bitmap][roaring-bitmap] provided by the `croaring` crate.
//!
//! [roaring-bitmap]: https://roaringbitmap.org

use croaring::bitmap::Bitmap as CRoaring;

use crate::{bitmaps::Bitmap, types::RecordId};

/// Compressed bitmap backend, suitable for the sparse, high-selectivity
/// sets a positional index tends to produce (most `P⁺[c][i]` bitmaps hold
/// a small fraction of the total record count).
#[derive(Clone)]
pub struct RoaringBitmap {
    inner: CRoaring,
}

impl Default for RoaringBitmap {
    fn default() -> Self {
        RoaringBitmap {
            inner: CRoaring::create(),
        }
    }
}

impl RoaringBitmap {
    /// Build directly from a slice of ids, skipping repeated `add` calls.
    pub fn from_ids(ids: &[RecordId]) -> Self {
        let mut inner = CRoaring::create();
        inner.add_many(ids);
        RoaringBitmap { inner }
    }
}

impl Bitmap for RoaringBitmap {
    const BACKEND: &'static str = "croaring";

    #[inline]
    fn add(&mut self, id: RecordId) {
        self.inner.add(id)
    }

    #[inline]
    fn contains(&self, id: RecordId) -> bool {
        self.inner.contains(id)
    }

    #[inline]
    fn cardinality(&self) -> u64 {
        self.inner.cardinality()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    fn and(&self, other: &Self) -> Self {
        RoaringBitmap {
            inner: self.inner.and(&other.inner),
        }
    }

    #[inline]
    fn or(&self, other: &Self) -> Self {
        RoaringBitmap {
            inner: self.inner.or(&other.inner),
        }
    }

    #[inline]
    fn and_into(&mut self, other: &Self) {
        self.inner.and_inplace(&other.inner)
    }

    #[inline]
    fn or_into(&mut self, other: &Self) {
        self.inner.or_inplace(&other.inner)
    }

    #[inline]
    fn to_array(&self) -> Vec<RecordId> {
        self.inner.to_vec()
    }

    #[inline]
    fn footprint(&self) -> usize {
        // croaring does not expose a cheap exact byte-size probe; a
        // per-id estimate is good enough for the status report.
        (self.inner.cardinality() as usize) * std::mem::size_of::<RecordId>()
    }
}

#[cfg(test)]
#[path = "roaring_test.rs"]
mod roaring_test;
