// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fitting text sizes for fixed boxes.
//!
//! Given a rectangle and a variable-length string, this crate finds the
//! largest font size at which the string still fits, without being smaller
//! than necessary:
//! - a [`FitOracle`] answers "does the text at this size fit?" for one probe
//!   (the default [`SingleLineOracle`] measures one unwrapped line via a
//!   [`textfit_metrics::TextMeasurer`]);
//! - [`fit_size_search`] runs a bounded binary search over the probe range;
//! - [`FitSizeSearch`] wires both to a hosting widget's change events,
//!   memoizing results per content length in a [`SizeCache`].
//!
//! Hosts implement the narrow [`TextHost`] capability; rendering, wrapping,
//! and shaping all stay on their side of that seam.

#![no_std]

extern crate alloc;

mod cache;
mod config;
mod controller;
mod host;
mod oracle;
mod search;

pub use cache::SizeCache;
pub use config::{DEFAULT_MIN_TEXT_SIZE, FitConfig};
pub use controller::FitSizeSearch;
pub use host::TextHost;
pub use oracle::{FitOracle, FitResult, FitSample, SingleLineOracle};
pub use search::fit_size_search;
