// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded binary search over candidate sizes.

use kurbo::Size;
use textfit_metrics::TextMeasurer;

use crate::oracle::{FitOracle, FitResult, FitSample};

/// Finds a size in `[start, end)` via binary search over the fit predicate.
///
/// The probe range is inclusive of `start` and exclusive of `end`: the upper
/// bound itself is never tested, so the largest reachable result is
/// `end - 1`.
///
/// Behavior preserved exactly from the long-standing auto-resize loop this
/// module descends from, including its bound-tracking asymmetry:
/// - when a probe fits, the running result records the *pre-advance* lower
///   bound rather than the probed midpoint;
/// - when a probe overflows, the running result records the decremented
///   upper bound;
/// - when no candidate fits at all, the result walks below the range and
///   comes out as `start - 1`.
///
/// An [`FitResult::ExactFit`] answer short-circuits and returns the probed
/// midpoint as-is. The loop performs at most `ceil(log2(end - start + 1))`
/// probes and always terminates; an empty range falls straight through to
/// `start`.
pub fn fit_size_search(
    start: i32,
    end: i32,
    oracle: &dyn FitOracle,
    sample: &FitSample<'_>,
    available: Size,
    measurer: &dyn TextMeasurer,
) -> i32 {
    let mut last_best = start;
    let mut lo = start;
    let mut hi = end - 1;
    while lo <= hi {
        let mid = midpoint(lo, hi);
        match oracle.test_size(mid, sample, available, measurer) {
            FitResult::TooSmall => {
                last_best = lo;
                lo = mid + 1;
            }
            FitResult::TooLarge => {
                hi = mid - 1;
                last_best = hi;
            }
            FitResult::ExactFit => return mid,
        }
    }
    last_best
}

/// Midpoint via unsigned shift of the sum, so `lo + hi` cannot overflow into
/// the sign bit for any non-negative bounds.
fn midpoint(lo: i32, hi: i32) -> i32 {
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        reason = "Bounds are non-negative whenever the loop runs"
    )]
    {
        ((lo as u32).wrapping_add(hi as u32) >> 1) as i32
    }
}
