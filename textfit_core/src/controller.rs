// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fitting controller: change handling, caching, and size application.

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Size;
use textfit_metrics::{TextMeasurer, TextStyle};

use crate::cache::SizeCache;
use crate::config::FitConfig;
use crate::host::TextHost;
use crate::oracle::{FitOracle, FitSample, SingleLineOracle};
use crate::search::fit_size_search;

/// Finds the largest text size that fits the host's usable box and applies it.
///
/// The controller owns the configuration, the memoized results, and the fit
/// predicate. The host is passed into each entry point rather than stored, so
/// content and padding are always read fresh at evaluation time. Widget
/// bounds are tracked from [`Self::on_geometry_changed`] notifications.
///
/// Everything here runs synchronously on whatever thread delivers the host's
/// change events; nothing suspends or spawns.
pub struct FitSizeSearch<M> {
    measurer: M,
    oracle: Box<dyn FitOracle>,
    config: FitConfig,
    cache: SizeCache,
    bounds: Size,
    // Set once by the first geometry report; evaluation is a no-op before
    // then, so nothing is computed against a bogus zero-sized box.
    initialized: bool,
}

impl<M> core::fmt::Debug for FitSizeSearch<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FitSizeSearch")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("initialized", &self.initialized)
            .field("cached_lengths", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl<M: TextMeasurer> FitSizeSearch<M> {
    /// Creates a controller with the default single-line fit predicate.
    #[must_use]
    pub fn new(measurer: M, config: FitConfig) -> Self {
        Self {
            measurer,
            oracle: Box::new(SingleLineOracle::new()),
            config,
            cache: SizeCache::new(),
            bounds: Size::ZERO,
            initialized: false,
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Whether a geometry report has been received yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The widget bounds from the most recent geometry report.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Handles a widget resize.
    ///
    /// Marks the controller initialized, invalidates all memoized sizes
    /// (they were computed for the old box), and re-evaluates if the
    /// dimensions actually changed.
    pub fn on_geometry_changed(
        &mut self,
        width: f64,
        height: f64,
        old_width: f64,
        old_height: f64,
        host: &mut dyn TextHost,
    ) {
        self.initialized = true;
        self.cache.clear();
        self.bounds = Size::new(width.max(0.0), height.max(0.0));
        if width != old_width || height != old_height {
            self.recompute_and_apply(host);
        }
    }

    /// Handles an edit to the host's text content.
    ///
    /// Does not invalidate the cache: entries are keyed by length, so an
    /// equal-length edit reuses the previous answer by design.
    pub fn on_content_changed(&mut self, host: &mut dyn TextHost) {
        self.recompute_and_apply(host);
    }

    /// Sets the size ceiling to `size` (absolute pixels).
    ///
    /// Every memoized size could change under a new ceiling, so the cache is
    /// cleared before re-evaluating.
    pub fn set_max_text_size(&mut self, size: f64, host: &mut dyn TextHost) {
        self.config.max_text_size = size;
        self.cache.clear();
        self.recompute_and_apply(host);
    }

    /// Lowers or raises the size floor.
    pub fn set_min_text_size(&mut self, size: f64, host: &mut dyn TextHost) {
        self.config.min_text_size = size;
        self.recompute_and_apply(host);
    }

    /// Sets the line-count limit (`None` for unlimited).
    pub fn set_max_lines(&mut self, max_lines: Option<u32>, host: &mut dyn TextHost) {
        self.config.max_lines = max_lines;
        self.recompute_and_apply(host);
    }

    /// Switches between single-line and unlimited-line mode.
    pub fn set_single_line(&mut self, single_line: bool, host: &mut dyn TextHost) {
        self.config.max_lines = if single_line { Some(1) } else { None };
        self.recompute_and_apply(host);
    }

    /// Sets an exact line count.
    pub fn set_lines(&mut self, lines: u32, host: &mut dyn TextHost) {
        self.config.max_lines = Some(lines);
        self.recompute_and_apply(host);
    }

    /// Sets the line spacing parameters forwarded to multi-line predicates.
    pub fn set_line_spacing(&mut self, add: f64, mult: f64, host: &mut dyn TextHost) {
        self.config.line_spacing_add = add;
        self.config.line_spacing_mult = mult;
        self.recompute_and_apply(host);
    }

    /// Sets the base text style probes are measured with.
    ///
    /// Style changes alter every measurement, so the cache is cleared.
    pub fn set_text_style(&mut self, style: TextStyle, host: &mut dyn TextHost) {
        self.config.style = style;
        self.cache.clear();
        self.recompute_and_apply(host);
    }

    /// Enables or disables memoization. Disabling drops existing entries.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.config.cache_enabled = enabled;
        if !enabled {
            self.cache.clear();
        }
    }

    /// Replaces the fit predicate.
    ///
    /// Memoized sizes were produced by the old predicate, so the cache is
    /// cleared before re-evaluating.
    pub fn set_oracle(&mut self, oracle: Box<dyn FitOracle>, host: &mut dyn TextHost) {
        self.oracle = oracle;
        self.cache.clear();
        self.recompute_and_apply(host);
    }

    /// Recomputes the fitted size for the host's current content and applies
    /// it via [`TextHost::apply_font_size`].
    ///
    /// A no-op until the first geometry report. Repeated calls with
    /// unchanged content length, bounds, and configuration are answered from
    /// the cache without probing.
    pub fn recompute_and_apply(&mut self, host: &mut dyn TextHost) {
        if !self.initialized {
            return;
        }

        let insets = host.padding();
        let available = Size::new(
            (self.bounds.width - insets.x_value()).max(0.0),
            (self.bounds.height - insets.y_value()).max(0.0),
        );

        #[allow(
            clippy::cast_possible_truncation,
            reason = "Candidate sizes are small integers; truncation toward zero is the intended floor"
        )]
        let (start, end) = (
            self.config.min_text_size as i32,
            self.config.max_text_size as i32,
        );

        let style = self.config.style.clone();
        let size = {
            let sample = FitSample {
                content: host.content(),
                hint: host.hint(),
                style: &style,
                max_lines: self.config.max_lines,
                line_spacing_mult: self.config.line_spacing_mult,
                line_spacing_add: self.config.line_spacing_add,
            };
            if self.config.cache_enabled {
                let key = sample.content.chars().count();
                match self.cache.get(key) {
                    Some(size) => size,
                    None => {
                        let size = fit_size_search(
                            start,
                            end,
                            self.oracle.as_ref(),
                            &sample,
                            available,
                            &self.measurer,
                        );
                        self.cache.insert(key, size);
                        size
                    }
                }
            } else {
                fit_size_search(
                    start,
                    end,
                    self.oracle.as_ref(),
                    &sample,
                    available,
                    &self.measurer,
                )
            }
        };

        host.apply_font_size(f64::from(size));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    use kurbo::Insets;
    use textfit_metrics::HeuristicTextMeasurer;

    use super::*;
    use crate::oracle::FitResult;

    struct MockHost {
        content: String,
        hint: String,
        padding: Insets,
        applied: Option<f64>,
    }

    impl MockHost {
        fn new(content: &str) -> Self {
            Self {
                content: content.to_string(),
                hint: String::new(),
                padding: Insets::ZERO,
                applied: None,
            }
        }

        fn applied(&self) -> f64 {
            self.applied.expect("no size was applied")
        }
    }

    impl TextHost for MockHost {
        fn content(&self) -> &str {
            &self.content
        }

        fn hint(&self) -> &str {
            &self.hint
        }

        fn padding(&self) -> Insets {
            self.padding
        }

        fn apply_font_size(&mut self, size_px: f64) {
            self.applied = Some(size_px);
        }
    }

    /// Delegates to the single-line predicate while counting probes.
    struct CountingOracle {
        inner: SingleLineOracle,
        probes: Rc<Cell<usize>>,
    }

    impl FitOracle for CountingOracle {
        fn test_size(
            &self,
            candidate: i32,
            sample: &FitSample<'_>,
            available: Size,
            measurer: &dyn TextMeasurer,
        ) -> FitResult {
            self.probes.set(self.probes.get() + 1);
            self.inner.test_size(candidate, sample, available, measurer)
        }
    }

    fn counting_fitter(
        config: FitConfig,
    ) -> (FitSizeSearch<HeuristicTextMeasurer>, Rc<Cell<usize>>) {
        let probes = Rc::new(Cell::new(0));
        let mut fitter = FitSizeSearch::new(HeuristicTextMeasurer, config);
        fitter.oracle = Box::new(CountingOracle {
            inner: SingleLineOracle::new(),
            probes: Rc::clone(&probes),
        });
        (fitter, probes)
    }

    #[test]
    fn short_text_lands_on_the_top_probed_slot() {
        // "Hi" fits at every probe in [16, 40) inside 200x50, so the search
        // climbs to the highest slot below the ceiling.
        let mut host = MockHost::new("Hi");
        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        assert_eq!(host.applied(), 39.0);
    }

    #[test]
    fn long_text_converges_on_its_threshold() {
        // 16 chars at 0.6em each: fits inside 200px iff size <= 20.
        let mut host = MockHost::new("abcdefghijklmnop");
        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        assert_eq!(host.applied(), 20.0);
    }

    #[test]
    fn nothing_before_the_first_geometry_report() {
        let mut host = MockHost::new("Hi");
        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        assert!(!fitter.is_initialized());
        fitter.recompute_and_apply(&mut host);
        fitter.on_content_changed(&mut host);
        assert_eq!(host.applied, None);
    }

    #[test]
    fn repeated_evaluation_is_answered_from_cache() {
        let mut host = MockHost::new("Hello");
        let (mut fitter, probes) = counting_fitter(FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        let first = host.applied();
        let after_first = probes.get();
        assert!(after_first > 0);

        fitter.recompute_and_apply(&mut host);
        assert_eq!(host.applied(), first);
        assert_eq!(probes.get(), after_first, "cache hit must not probe");
    }

    #[test]
    fn disabling_the_cache_probes_every_time() {
        let mut host = MockHost::new("Hello");
        let (mut fitter, probes) =
            counting_fitter(FitConfig::new(40.0).with_cache_enabled(false));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        let after_first = probes.get();
        fitter.recompute_and_apply(&mut host);
        assert_eq!(probes.get(), 2 * after_first);
    }

    #[test]
    fn resize_invalidates_and_shrinks() {
        // 14 chars fit inside 200px up to size 23, inside 150px up to 17.
        let mut host = MockHost::new("Hello, world!!");
        let (mut fitter, probes) = counting_fitter(FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        let before = host.applied();
        assert_eq!(before, 23.0);
        let probes_before = probes.get();

        fitter.on_geometry_changed(150.0, 50.0, 200.0, 50.0, &mut host);
        let after = host.applied();
        assert!(probes.get() > probes_before, "stale cache entry was reused");
        assert_eq!(after, 17.0);
        assert!(after <= before);
    }

    #[test]
    fn equal_length_texts_share_one_cache_entry() {
        let mut host = MockHost::new("aaaaaaaa");
        let (mut fitter, probes) = counting_fitter(FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        let first = host.applied();
        let after_first = probes.get();

        host.content = "bbbbbbbb".to_string();
        fitter.on_content_changed(&mut host);
        assert_eq!(host.applied(), first);
        assert_eq!(probes.get(), after_first);
    }

    #[test]
    fn empty_content_fits_against_the_hint() {
        let mut host = MockHost::new("");
        host.hint = "Search here".to_string(); // 11 chars
        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        // 11 chars fit inside 200px iff size <= 30: probes 27, 33, 30, 31
        // land on 30. An empty probe string would have fit everywhere.
        assert_eq!(host.applied(), 30.0);
    }

    #[test]
    fn raising_the_ceiling_invalidates_the_cache() {
        let mut host = MockHost::new("Hi");
        let (mut fitter, probes) = counting_fitter(FitConfig::new(40.0));
        fitter.on_geometry_changed(400.0, 100.0, 0.0, 0.0, &mut host);
        assert_eq!(host.applied(), 39.0);
        let probes_before = probes.get();

        fitter.set_max_text_size(60.0, &mut host);
        assert!(probes.get() > probes_before);
        assert_eq!(host.applied(), 59.0);
    }

    #[test]
    fn padding_shrinks_the_usable_box() {
        let mut bare = MockHost::new("Hello, world!!");
        let mut padded = MockHost::new("Hello, world!!");
        padded.padding = Insets::uniform(10.0);

        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut bare);
        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut padded);

        // 180px of usable width caps 14 chars at size 21 instead of 23.
        assert_eq!(bare.applied(), 23.0);
        assert_eq!(padded.applied(), 21.0);
    }

    #[test]
    fn applied_sizes_stay_inside_the_probe_range() {
        for len in 1..60 {
            let mut host = MockHost::new(&"x".repeat(len));
            let mut fitter = FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
            fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
            let applied = host.applied();
            assert!(
                (16.0..=39.0).contains(&applied) || applied == 15.0,
                "len {len} applied {applied}"
            );
        }
    }

    #[test]
    fn overlong_text_falls_back_below_the_floor() {
        // Nothing in [16, 40) fits 60 chars into 200px; the search walks
        // below the range and reports one under the floor.
        let mut host = MockHost::new(&"x".repeat(60));
        let mut fitter =
            FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 0.0, 0.0, &mut host);
        assert_eq!(host.applied(), 15.0);
    }

    #[test]
    fn unchanged_geometry_report_skips_reevaluation() {
        let mut host = MockHost::new("Hi");
        let (mut fitter, probes) = counting_fitter(FitConfig::new(40.0));
        fitter.on_geometry_changed(200.0, 50.0, 200.0, 50.0, &mut host);
        // Initialized and invalidated, but dimensions did not change.
        assert!(fitter.is_initialized());
        assert_eq!(probes.get(), 0);
        assert_eq!(host.applied, None);
    }
}
