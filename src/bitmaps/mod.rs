//! Module `bitmaps` implements the compressed-set primitive the rest of
//! the index is built on: a set of [RecordId] supporting the handful of
//! operations (add, and, or, cardinality, iteration) the positional index,
//! the character-anywhere cache and the length partition all compose.
//!
//! Two interchangeable backends are provided, the way a Bloom filter in
//! this crate's earlier life could be backed by either a real roaring
//! bitmap or a dummy stand-in: [RoaringBitmap] wraps the `croaring`
//! compressed bitmap for high-selectivity, sparse sets; [DenseBitmap] is
//! a block-of-64-words fallback for small, dense id spaces that do not
//! benefit from compression. Both implement [Bitmap].

mod dense;
mod roaring;

pub use dense::DenseBitmap;
pub use roaring::RoaringBitmap;

use crate::types::RecordId;

/// Contract every bitmap backend must satisfy (spec `§4.1`).
///
/// Intersection and union are commutative and associative; empty operands
/// never fail; iteration yields ascending, deduplicated ids.
pub trait Bitmap: Clone + Default {
    /// Backend identifier surfaced by [crate::status::StatusReport].
    const BACKEND: &'static str;

    /// A new, empty bitmap.
    fn create() -> Self {
        Self::default()
    }

    /// Insert `id`. Idempotent: inserting twice is a no-op.
    fn add(&mut self, id: RecordId);

    /// Membership test.
    fn contains(&self, id: RecordId) -> bool;

    /// Number of distinct ids held.
    fn cardinality(&self) -> u64;

    /// `cardinality() == 0`, without necessarily computing the count.
    fn is_empty(&self) -> bool;

    /// New bitmap holding the intersection of `self` and `other`.
    fn and(&self, other: &Self) -> Self;

    /// New bitmap holding the union of `self` and `other`.
    fn or(&self, other: &Self) -> Self;

    /// Intersect `other` into `self` in place.
    fn and_into(&mut self, other: &Self);

    /// Union `other` into `self` in place.
    fn or_into(&mut self, other: &Self);

    /// Independent copy of `self`.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Ascending array of every id held, spec's "iterate-as-array".
    fn to_array(&self) -> Vec<RecordId>;

    /// Approximate memory footprint in bytes, used by [crate::status].
    fn footprint(&self) -> usize;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
