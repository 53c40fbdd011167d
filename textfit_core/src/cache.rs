// Copyright 2026 the Textfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized search results, keyed by content length.

use hashbrown::HashMap;

/// Fitted sizes memoized per content length.
///
/// The key is the content's `char` count, a deliberate proxy: two different
/// texts of the same length share one entry, trading exactness for skipping
/// the search on every keystroke that preserves length.
///
/// Entries are only valid for the available space, size bounds, and text
/// style they were computed under; the controller clears the map whenever
/// one of those changes. Absence of a key is the only "unset" state, so a
/// legitimately computed small size is never confused with a miss.
#[derive(Clone, Debug, Default)]
pub struct SizeCache {
    entries: HashMap<usize, i32>,
}

impl SizeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Looks up the fitted size for a content length.
    #[must_use]
    pub fn get(&self, key: usize) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Records the fitted size for a content length.
    pub fn insert(&mut self, key: usize, size: i32) {
        self.entries.insert(key, size);
    }

    /// Drops all entries. Called on every change that can alter fit results.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of distinct content lengths currently memoized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
