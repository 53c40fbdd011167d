// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting configuration.

use textfit_metrics::TextStyle;

/// Default lower bound for fitted sizes, in device-independent pixels.
pub const DEFAULT_MIN_TEXT_SIZE: f64 = 16.0;

/// The knobs that shape a fit search.
///
/// Constructed once with the host's natural text size as the ceiling, then
/// adjusted through the setters on [`crate::FitSizeSearch`], which take care
/// of cache invalidation and re-evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    /// Smallest size the search may return (floor of the probe range).
    pub min_text_size: f64,
    /// Largest size the search may approach; the top probe slot is one below.
    pub max_text_size: f64,
    /// Line-count limit, `None` for unlimited.
    pub max_lines: Option<u32>,
    /// Line spacing multiplier applied by the host when wrapping.
    pub line_spacing_mult: f64,
    /// Line spacing addend applied by the host when wrapping.
    pub line_spacing_add: f64,
    /// Whether fitted sizes are memoized per content length.
    pub cache_enabled: bool,
    /// Base style probes are measured with; only its size varies per probe.
    pub style: TextStyle,
}

impl FitConfig {
    /// Creates a configuration with the given size ceiling.
    ///
    /// `max_text_size` is typically the host's natural (configured) text
    /// size. Everything else starts at its default: a floor of
    /// [`DEFAULT_MIN_TEXT_SIZE`], unlimited lines, neutral line spacing,
    /// caching on.
    #[must_use]
    pub fn new(max_text_size: f64) -> Self {
        Self {
            min_text_size: DEFAULT_MIN_TEXT_SIZE,
            max_text_size,
            max_lines: None,
            line_spacing_mult: 1.0,
            line_spacing_add: 0.0,
            cache_enabled: true,
            style: TextStyle::default(),
        }
    }

    /// Sets the size floor.
    #[must_use]
    pub fn with_min_text_size(mut self, min_text_size: f64) -> Self {
        self.min_text_size = min_text_size;
        self
    }

    /// Sets the line-count limit (`None` for unlimited).
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: Option<u32>) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Sets the line spacing parameters.
    #[must_use]
    pub fn with_line_spacing(mut self, add: f64, mult: f64) -> Self {
        self.line_spacing_add = add;
        self.line_spacing_mult = mult;
        self
    }

    /// Enables or disables memoization.
    #[must_use]
    pub fn with_cache_enabled(mut self, cache_enabled: bool) -> Self {
        self.cache_enabled = cache_enabled;
        self
    }

    /// Sets the base text style probes are measured with.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}
