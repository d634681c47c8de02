//! Module `index` implements [LikeIndex], the public entry point tying
//! together the bitmap primitive, the positional index, the char-anywhere
//! cache, the length partition, the pattern compiler and the verifier into
//! `build`/`count`/`rows`/`status`/`matches` (spec `§4.4`, `§6`).
//!
//! The evaluator below does not special-case every row of the dispatch
//! table spec `§4.4` lists. Instead it implements five general strategies
//! (exact, prefix, suffix, dual-anchor, multi-slice) and lets the pure-`_`
//! and pure-wildcard rows fall out for free: an underscore position never
//! contributes a bitmap to an intersection, so a slice made entirely of
//! `_` degenerates to "no positional constraint, just a length bound" —
//! exactly the `L[k]` / `⋃_{j≥k} L[j]` rows spec `§4.4` calls out
//! separately.

use std::sync::{Arc, Mutex};

use crate::{
    bitmaps::{Bitmap, RoaringBitmap},
    charcache::CharCache,
    config::BuildConfig,
    driver::{BuildError, Driver, QueryError},
    lengths::LengthIndex,
    pattern::{find_slice, PatternPlan, Slice, SliceByte},
    positional::PositionalMap,
    status::{Footprint, StatusReport},
    types::{RecordId, Value},
};

struct Inner<B: Bitmap> {
    values: Vec<Value>,
    forward: PositionalMap<B>,
    reverse: PositionalMap<B>,
    charcache: CharCache<B>,
    lengths: LengthIndex<B>,
    max_positions: usize,
}

impl<B: Bitmap> Footprint for Inner<B> {
    fn footprint(&self) -> usize {
        let values_bytes: usize = self.values.iter().map(|v| v.len()).sum();
        values_bytes
            + self.forward.footprint()
            + self.reverse.footprint()
            + self.charcache.footprint()
            + self.lengths.footprint()
    }
}

/// What, if anything, a candidate bitmap still needs verified against the
/// stored value before it can be trusted (spec `§4.4`'s "filters are
/// necessary but not sufficient" rule).
enum Verify {
    /// The candidate bitmap is already exact; no false positives possible.
    None,
    /// A single literal slice (no `_`) must occur somewhere in the value —
    /// the `%s%` contains case, checked with a plain substring scan.
    Substring(Slice),
    /// General ordered-substring verification against a compiled plan.
    Plan(PatternPlan),
}

/// A positional bitmap index over a static column, accelerating
/// `LIKE`-style wildcard matching (spec `§1`). `B` selects the bitmap
/// backend (default [RoaringBitmap]); see [crate::bitmaps::DenseBitmap]
/// for the dense alternative.
///
/// Build is single-writer; once published, queries are race-free for any
/// number of concurrent readers (spec `§5`) — each query clones the
/// `Arc` behind a brief lock acquisition and then runs lock-free against
/// its own snapshot, so a concurrent rebuild never blocks or corrupts an
/// in-flight query.
pub struct LikeIndex<B: Bitmap = RoaringBitmap> {
    inner: Mutex<Option<Arc<Inner<B>>>>,
}

impl<B: Bitmap> Default for LikeIndex<B> {
    fn default() -> Self {
        LikeIndex {
            inner: Mutex::new(None),
        }
    }
}

impl<B: Bitmap> LikeIndex<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build (or rebuild) the index from `driver`'s scan of `table.column`
    /// (spec `§4.2`, `§6`). On failure the previously published index, if
    /// any, is left untouched — there is no "half-built" observable state.
    pub fn build<D: Driver>(
        &self,
        driver: &mut D,
        table: &str,
        column: &str,
        config: BuildConfig,
    ) -> Result<(), BuildError> {
        let scan = driver.scan(table, column)?;

        let mut values: Vec<Value> = Vec::new();
        let mut forward = PositionalMap::new();
        let mut reverse = PositionalMap::new();
        let mut lengths: Vec<usize> = Vec::new();
        let max_positions = config.max_positions;

        for item in scan {
            let raw = item?;
            let bytes = raw.unwrap_or_default();
            let len = bytes.len();
            let clamped = len.min(max_positions);
            for p in 0..clamped {
                forward.insert(bytes[p], p, values.len() as RecordId);
                reverse.insert(bytes[clamped - 1 - p], p, values.len() as RecordId);
            }
            lengths.push(len);
            values.push(bytes.into_boxed_slice());
        }

        let charcache = CharCache::derive(&forward);
        let length_index = LengthIndex::build(&lengths);

        let built = Arc::new(Inner {
            values,
            forward,
            reverse,
            charcache,
            lengths: length_index,
            max_positions,
        });

        let mut slot = self.inner.lock().unwrap();
        *slot = Some(built);
        Ok(())
    }

    fn snapshot(&self) -> Result<Arc<Inner<B>>, QueryError> {
        let slot = self.inner.lock().unwrap();
        match slot.as_ref() {
            Some(inner) => Ok(inner.clone()),
            None => crate::err_at!(IndexNotBuilt, msg: "no index has been built yet")
                .map_err(QueryError),
        }
    }

    fn compile_checked(&self, inner: &Inner<B>, pattern: &[u8]) -> Result<PatternPlan, QueryError> {
        let plan = PatternPlan::compile(pattern);
        if plan.min_length > inner.max_positions {
            return crate::err_at!(
                PatternTooLong,
                msg: "pattern requires {} bytes, max_positions is {}",
                plan.min_length,
                inner.max_positions
            )
            .map_err(QueryError);
        }
        Ok(plan)
    }

    /// Count of matching records without materialising the result
    /// (spec `§4.4`, "Return shape").
    pub fn count(&self, pattern: &[u8]) -> Result<u64, QueryError> {
        let inner = self.snapshot()?;
        let plan = self.compile_checked(&inner, pattern)?;
        let (cand, verify) = candidates(&inner, &plan);
        let n = match verify {
            Verify::None => cand.cardinality(),
            Verify::Substring(slice) => cand
                .to_array()
                .into_iter()
                .filter(|&id| find_slice(&inner.values[id as usize], 0, &slice).is_some())
                .count() as u64,
            Verify::Plan(p) => cand
                .to_array()
                .into_iter()
                .filter(|&id| crate::verify::matches_plan(&inner.values[id as usize], &p))
                .count() as u64,
        };
        Ok(n)
    }

    /// Matching `(RecordId, Value)` pairs in ascending id order
    /// (spec `§4.4`, `§6`). Verification, where needed, runs lazily as the
    /// iterator is drained. The returned iterator owns a snapshot of the
    /// index (an `Arc` clone) so it keeps working against the index as it
    /// was at call time even if a concurrent rebuild publishes a new one.
    pub fn rows(&self, pattern: &[u8]) -> Result<impl Iterator<Item = (RecordId, Value)>, QueryError> {
        let inner = self.snapshot()?;
        let plan = self.compile_checked(&inner, pattern)?;
        let (cand, verify) = candidates(&inner, &plan);
        let ids = cand.to_array();

        Ok(ids.into_iter().filter_map(move |id| {
            let value = &inner.values[id as usize];
            let ok = match &verify {
                Verify::None => true,
                Verify::Substring(slice) => find_slice(value, 0, slice).is_some(),
                Verify::Plan(p) => crate::verify::matches_plan(value, p),
            };
            if ok {
                Some((id, value.clone()))
            } else {
                None
            }
        }))
    }

    /// Record count, max length, approximate memory footprint, backend
    /// name (spec `§4.6`).
    pub fn status(&self) -> Result<StatusReport, QueryError> {
        let inner = self.snapshot()?;
        Ok(StatusReport {
            record_count: inner.values.len(),
            max_len: inner.lengths.max_len(),
            memory_bytes: inner.footprint(),
            backend: B::BACKEND,
        })
    }

    /// Debug/testing entry to the verifier (spec `§4.5`, `§6`). Does not
    /// require a built index.
    pub fn matches(value: &[u8], pattern: &[u8]) -> bool {
        crate::verify::matches(value, pattern)
    }
}

/// Intersect `P⁺[c][position]` for every literal byte of `slice`, in
/// position order; an all-`_` slice returns the universal set
/// (`lengths.at_least(0)`), which is the "underscore contributes no
/// bitmap" rule spec `§4.4` states as an edge-case policy.
fn forward_pin<B: Bitmap>(inner: &Inner<B>, slice: &[SliceByte]) -> B {
    let mut cand: Option<B> = None;
    for (p, b) in slice.iter().enumerate() {
        if let SliceByte::Lit(c) = b {
            let bmap = match inner.forward.get(*c, p) {
                Some(bmap) => bmap,
                None => return B::create(),
            };
            cand = Some(match cand {
                Some(mut acc) => {
                    acc.and_into(bmap);
                    acc
                }
                None => bmap.copy(),
            });
            if cand.as_ref().unwrap().is_empty() {
                return B::create();
            }
        }
    }
    cand.unwrap_or_else(|| inner.lengths.at_least(0))
}

/// Same as [forward_pin] but against the reverse positional index,
/// anchoring `slice` flush against the end of the value: `slice[i]` lines
/// up with reverse position `len(slice) - 1 - i` (spec `§4.4`, pure
/// suffix row).
fn reverse_pin<B: Bitmap>(inner: &Inner<B>, slice: &[SliceByte]) -> B {
    let len = slice.len();
    let mut cand: Option<B> = None;
    for (i, b) in slice.iter().enumerate() {
        if let SliceByte::Lit(c) = b {
            let j = len - 1 - i;
            let bmap = match inner.reverse.get(*c, j) {
                Some(bmap) => bmap,
                None => return B::create(),
            };
            cand = Some(match cand {
                Some(mut acc) => {
                    acc.and_into(bmap);
                    acc
                }
                None => bmap.copy(),
            });
            if cand.as_ref().unwrap().is_empty() {
                return B::create();
            }
        }
    }
    cand.unwrap_or_else(|| inner.lengths.at_least(0))
}

/// Core dispatch (spec `§4.4`). Computes the candidate bitmap and whatever
/// verification it still needs. A pure-wildcard pattern never needs
/// verification regardless of which branch below computed its candidate
/// set, since every slice byte is `_` and contributes no false positives
/// for the bitmap algebra to introduce — enforced once at the end instead
/// of threading a special case through every branch.
fn candidates<B: Bitmap>(inner: &Inner<B>, plan: &PatternPlan) -> (B, Verify) {
    let (cand, verify) = candidates_inner(inner, plan);
    if plan.is_pure_wildcard() {
        (cand, Verify::None)
    } else {
        (cand, verify)
    }
}

fn candidates_inner<B: Bitmap>(inner: &Inner<B>, plan: &PatternPlan) -> (B, Verify) {
    let n = plan.slices.len();

    if n == 0 {
        return if plan.has_percent {
            (inner.lengths.at_least(0), Verify::None)
        } else {
            (inner.lengths.exact(0), Verify::None)
        };
    }

    if !plan.has_percent {
        // No '%' anywhere: tokenisation guarantees exactly one slice
        // spanning the whole pattern. Exact length, not just a lower
        // bound — spec `§9c`'s resolved ambiguity.
        let slice = &plan.slices[0];
        let mut cand = forward_pin(inner, slice);
        cand.and_into(&inner.lengths.exact(slice.len()));
        return (cand, Verify::None);
    }

    if n == 1 {
        let slice = &plan.slices[0];
        if !plan.starts_with_percent {
            // s%
            let mut cand = forward_pin(inner, slice);
            cand.and_into(&inner.lengths.at_least(slice.len()));
            return (cand, Verify::None);
        }
        if !plan.ends_with_percent {
            // %s
            let mut cand = reverse_pin(inner, slice);
            cand.and_into(&inner.lengths.at_least(slice.len()));
            return (cand, Verify::None);
        }
        // %s%
        let literal_bytes = plan.unique_literal_bytes();
        let mut cand = inner
            .charcache
            .intersect_unique(None, literal_bytes.iter())
            .unwrap_or_else(|| inner.lengths.at_least(plan.min_length));
        cand.and_into(&inner.lengths.at_least(plan.min_length));
        return (cand, Verify::Substring(slice.clone()));
    }

    if n == 2 && !plan.starts_with_percent && !plan.ends_with_percent {
        // s1%s2, exactly one '%': both ends pinned, no scan needed.
        let mut cand = forward_pin(inner, &plan.slices[0]);
        if !cand.is_empty() {
            cand.and_into(&reverse_pin(inner, &plan.slices[1]));
        }
        cand.and_into(&inner.lengths.at_least(plan.min_length));
        return (cand, Verify::None);
    }

    // General multi-slice: character filter across every slice, pin
    // whichever end is anchored, verify the rest in order.
    let mut cand = inner
        .charcache
        .intersect_unique(None, plan.unique_literal_bytes().iter())
        .unwrap_or_else(|| inner.lengths.at_least(0));
    cand.and_into(&inner.lengths.at_least(plan.min_length));
    if !cand.is_empty() && !plan.starts_with_percent {
        cand.and_into(&forward_pin(inner, &plan.slices[0]));
    }
    if !cand.is_empty() && !plan.ends_with_percent {
        cand.and_into(&reverse_pin(inner, plan.slices.last().unwrap()));
    }
    (cand, Verify::Plan(plan.clone()))
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
