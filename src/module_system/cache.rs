// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Settled-outcome cache for module resolution

use crate::runtime::Value;
use dashmap::DashMap;

/// Terminal outcome of a module resolution.
#[derive(Debug, Clone)]
pub enum Settled {
    /// Resolution finished; the value is final
    Resolved(Value),
    /// The factory or a dependency failed; the reason is replayed on every
    /// later resolution attempt
    Failed(String),
}

/// Thread-safe cache of settled resolutions.
///
/// Entries are written only while the registry lock is held and read
/// without it. A settled module stays settled for the registry's lifetime,
/// so entries are never removed or replaced.
pub struct ResolutionCache {
    settled: DashMap<String, Settled>,
}

impl ResolutionCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            settled: DashMap::new(),
        }
    }

    /// Get the settled outcome for an id
    pub fn get(&self, id: &str) -> Option<Settled> {
        self.settled.get(id).map(|entry| entry.clone())
    }

    /// Check if an id has settled
    pub fn has(&self, id: &str) -> bool {
        self.settled.contains_key(id)
    }

    /// Record a settled outcome
    pub(crate) fn set(&self, id: String, outcome: Settled) {
        self.settled.insert(id, outcome);
    }

    /// Get all settled ids
    pub fn keys(&self) -> Vec<String> {
        self.settled.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get the number of settled modules
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_and_read_back() {
        let cache = ResolutionCache::new();
        assert!(cache.is_empty());
        assert!(!cache.has("m"));

        cache.set("m".to_string(), Settled::Resolved(Value::Number(7.0)));
        assert!(cache.has("m"));
        assert_eq!(cache.len(), 1);
        assert!(matches!(cache.get("m"), Some(Settled::Resolved(Value::Number(n))) if n == 7.0));
    }

    #[test]
    fn test_failures_are_settled_too() {
        let cache = ResolutionCache::new();
        cache.set("broken".to_string(), Settled::Failed("boom".to_string()));
        assert!(matches!(cache.get("broken"), Some(Settled::Failed(reason)) if reason == "boom"));
    }
}
