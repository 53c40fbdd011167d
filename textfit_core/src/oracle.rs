// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fit predicate: does text at a candidate size fit the available box?

use core::cell::Cell;

use kurbo::Size;
use textfit_metrics::{TextMeasurer, TextStyle};

/// Outcome of probing one candidate size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitResult {
    /// The rendered text fits; there is room to try a bigger size.
    TooSmall,
    /// The rendered text does not fit; a smaller size must be tried.
    TooLarge,
    /// The candidate is an exact fit; the search stops immediately.
    ///
    /// Measurement-based oracles never produce this (equality on continuous
    /// measurements is not attempted); it exists for custom strategies that
    /// can recognize an exact hit.
    ExactFit,
}

/// The text and style inputs a fit probe runs against.
///
/// Borrowed from the host and the controller configuration for the duration
/// of one search; oracles must not retain it.
#[derive(Clone, Copy, Debug)]
pub struct FitSample<'a> {
    /// The real text content (possibly empty).
    pub content: &'a str,
    /// Placeholder text shown while `content` is empty.
    pub hint: &'a str,
    /// Base style; probes override only its font size.
    pub style: &'a TextStyle,
    /// Line-count limit, `None` for unlimited. Ignored by single-line fitting.
    pub max_lines: Option<u32>,
    /// Line spacing multiplier, for strategies that stack lines.
    pub line_spacing_mult: f64,
    /// Line spacing addend, for strategies that stack lines.
    pub line_spacing_add: f64,
}

impl FitSample<'_> {
    /// The text a probe should measure: the hint when the content is empty,
    /// otherwise the content itself.
    #[must_use]
    pub fn probe_text(&self) -> &str {
        if self.content.is_empty() {
            self.hint
        } else {
            self.content
        }
    }
}

/// The pluggable fit predicate driving the size search.
///
/// [`crate::FitSizeSearch`] depends only on this abstraction, so alternate
/// strategies (e.g. wrapped multi-line fitting) can replace the default
/// single-line one without touching the search itself.
pub trait FitOracle {
    /// Tests whether text rendered at `candidate` fits inside `available`.
    ///
    /// `available` has non-negative width and height; degenerate inputs
    /// (empty probe text, zero-sized box) must yield a deterministic answer
    /// rather than an error.
    fn test_size(
        &self,
        candidate: i32,
        sample: &FitSample<'_>,
        available: Size,
        measurer: &dyn TextMeasurer,
    ) -> FitResult;
}

/// The default fit predicate: measure the probe text as one unwrapped line.
///
/// The measured box is one line tall (`font_spacing`) and as wide as the full
/// advance width. It fits when both axes fit simultaneously. This oracle
/// never returns [`FitResult::ExactFit`]; search termination relies on the
/// bounds crossing instead.
#[derive(Debug, Default)]
pub struct SingleLineOracle {
    // Rewritten on every probe, never accumulated across calls.
    scratch: Cell<Size>,
}

impl SingleLineOracle {
    /// Creates the single-line oracle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scratch: Cell::new(Size::ZERO),
        }
    }

    /// The box measured by the most recent probe, for diagnostics.
    #[must_use]
    pub fn last_measured(&self) -> Size {
        self.scratch.get()
    }
}

impl FitOracle for SingleLineOracle {
    fn test_size(
        &self,
        candidate: i32,
        sample: &FitSample<'_>,
        available: Size,
        measurer: &dyn TextMeasurer,
    ) -> FitResult {
        let style = sample.style.with_font_size(f64::from(candidate.max(0)));
        let metrics = measurer.measure(sample.probe_text(), style);
        let measured = Size::new(metrics.advance_width, metrics.font_spacing());
        self.scratch.set(measured);

        if measured.width <= available.width && measured.height <= available.height {
            FitResult::TooSmall
        } else {
            FitResult::TooLarge
        }
    }
}
