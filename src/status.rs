//! Module `status` implements the read-only, lock-free status reporter
//! (spec `§4.6`).

/// Snapshot of an index's size and backend, returned by
/// [crate::index::LikeIndex::status].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub record_count: usize,
    pub max_len: usize,
    pub memory_bytes: usize,
    pub backend: &'static str,
}

/// Trait to compute the approximate memory footprint of an index-type,
/// mirroring the convention the rest of this codebase uses for footprint
/// accounting.
pub trait Footprint {
    fn footprint(&self) -> usize;
}
