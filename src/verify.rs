//! Module `verify` implements the exact matchers used to eliminate false
//! positives from the bitmap-algebra candidate filters (spec `§4.5`): a
//! classic two-pointer `%`/`_` backtracking matcher over raw pattern
//! bytes, and an ordered-substring scan over a compiled [PatternPlan]
//! used by the multi-slice evaluator.

use crate::pattern::{find_slice, slice_matches_at, PatternPlan};

/// Reference matcher: total, never errors (spec `§7`: "`MatchError` kinds
/// do not exist; `matches` is total"). Saves the position of the last `%`
/// seen and the value offset it was tried against, retrying one byte
/// later whenever the literal path fails and a prior `%` exists.
pub fn matches(value: &[u8], pattern: &[u8]) -> bool {
    let (mut vi, mut pi) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None; // (pattern_idx_after_percent, value_idx_tried)

    while vi < value.len() {
        let literal_ok = pi < pattern.len()
            && (pattern[pi] == b'_' || pattern[pi] == value[vi]);
        if literal_ok {
            vi += 1;
            pi += 1;
        } else if pi < pattern.len() && pattern[pi] == b'%' {
            star = Some((pi + 1, vi));
            pi += 1;
        } else if let Some((spi, svi)) = star {
            star = Some((spi, svi + 1));
            pi = spi;
            vi = svi + 1;
        } else {
            return false;
        }
    }

    while pi < pattern.len() && pattern[pi] == b'%' {
        pi += 1;
    }
    pi == pattern.len()
}

/// Ordered-substring verifier for a compiled multi-slice pattern: walks
/// the slices left to right, anchoring the first slice at position 0
/// when `!starts_with_percent` and the last slice flush-right when
/// `!ends_with_percent`, and otherwise searching forward for the next
/// occurrence (spec `§4.5`).
pub fn matches_plan(value: &[u8], plan: &PatternPlan) -> bool {
    if plan.slices.is_empty() {
        return if plan.starts_with_percent || plan.ends_with_percent {
            true
        } else {
            value.is_empty()
        };
    }

    let n = plan.slices.len();
    let mut pos = 0usize;

    for (i, slice) in plan.slices.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i == n - 1;

        if is_first && !plan.starts_with_percent {
            if !slice_matches_at(value, pos, slice) {
                return false;
            }
            pos += slice.len();
        } else if is_last && !plan.ends_with_percent {
            if slice.len() > value.len() {
                return false;
            }
            let start = value.len() - slice.len();
            if start < pos || !slice_matches_at(value, start, slice) {
                return false;
            }
            pos = value.len();
        } else {
            match find_slice(value, pos, slice) {
                Some(found) => pos = found + slice.len(),
                None => return false,
            }
        }
    }

    if plan.ends_with_percent {
        true
    } else {
        pos == value.len()
    }
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;
