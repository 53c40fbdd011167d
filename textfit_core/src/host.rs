// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow capability a hosting widget exposes to the fitter.

use kurbo::Insets;

/// What the fitter needs from the widget that owns the text.
///
/// The controller holds no reference to the host; each entry point takes it
/// by `&mut` and queries content and padding at evaluation time, so the host
/// remains the single source of truth for both. Geometry arrives separately
/// through [`crate::FitSizeSearch::on_geometry_changed`].
pub trait TextHost {
    /// The current text content. May be empty.
    fn content(&self) -> &str;

    /// Placeholder text shown while the content is empty.
    fn hint(&self) -> &str {
        ""
    }

    /// Padding subtracted from the widget bounds to form the usable box.
    /// All four sides are non-negative.
    fn padding(&self) -> Insets {
        Insets::ZERO
    }

    /// Applies the fitted size to the host's rendering configuration, in
    /// absolute device-independent pixels.
    fn apply_font_size(&mut self, size_px: f64);
}
