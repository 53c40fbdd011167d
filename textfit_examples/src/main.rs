// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `textfit_core`.
//!
//! Simulates a host widget going through a typical life: first layout,
//! typing, a resize, and a configuration change, printing the size the
//! fitter applies after each event.

use kurbo::Insets;
use textfit_core::{FitConfig, FitSizeSearch, TextHost};
use textfit_metrics::HeuristicTextMeasurer;

/// A stand-in for a real text widget.
struct EditBox {
    content: String,
    hint: String,
    padding: Insets,
    font_size: f64,
}

impl TextHost for EditBox {
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
        self.font_size = size_px;
    }
}

fn main() {
    let mut edit = EditBox {
        content: String::new(),
        hint: "Type here".to_string(),
        padding: Insets::uniform(4.0),
        font_size: 40.0,
    };

    let mut fitter = FitSizeSearch::new(HeuristicTextMeasurer, FitConfig::new(edit.font_size));

    // First layout pass reports the widget bounds.
    fitter.on_geometry_changed(320.0, 64.0, 0.0, 0.0, &mut edit);
    println!("after layout (hint only): {}px", edit.font_size);

    // The user types; each edit re-fits.
    for text in ["H", "Hello", "Hello, fitted", "Hello, fitted world!"] {
        edit.content = text.to_string();
        fitter.on_content_changed(&mut edit);
        println!("typed {text:?}: {}px", edit.font_size);
    }

    // The window shrinks.
    fitter.on_geometry_changed(200.0, 64.0, 320.0, 64.0, &mut edit);
    println!("after shrink to 200px: {}px", edit.font_size);

    // The app lowers the ceiling.
    fitter.set_max_text_size(24.0, &mut edit);
    println!("with a 24px ceiling: {}px", edit.font_size);
}
