// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumerations of permutations, memoized by length.
//!
//! # Sharing
//!
//! A cache is `Send + Sync`. Several [`crate::RefactorContext`] instances may
//! share one through an `Arc`, each on its own thread.
//!
//! # Population
//!
//! On a miss the enumeration is computed without holding the lock, then
//! inserted with `entry().or_insert`. When two threads miss on the same
//! length, both compute, the first insert wins, and both receive the winning
//! `Arc`. Entries are never replaced or evicted.

use crate::permutation::{enumerate, Permutation};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Enumerations shared behind an `Arc`.
pub type Enumeration = Arc<[Permutation]>;

/// Result of [`PermutationCache::lookup`].
#[derive(Debug, Clone)]
pub struct CacheLookup {
    /// All permutations of the requested length, identity first.
    pub permutations: Enumeration,
    /// True if this call inserted the entry.
    pub populated: bool,
}

/// Memoized enumerations keyed by permutation length.
#[derive(Debug, Default)]
pub struct PermutationCache {
    by_length: RwLock<HashMap<usize, Enumeration>>,
}

impl PermutationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached enumeration for `length`, if present.
    pub fn get(&self, length: usize) -> Option<Enumeration> {
        self.by_length
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&length)
            .cloned()
    }

    /// All permutations of `length`, enumerating them on first use.
    pub fn permutations(&self, length: usize) -> Enumeration {
        self.lookup(length).permutations
    }

    /// Like [`permutations`](Self::permutations), also reporting whether this
    /// call populated the entry.
    pub fn lookup(&self, length: usize) -> CacheLookup {
        if let Some(permutations) = self.get(length) {
            return CacheLookup {
                permutations,
                populated: false,
            };
        }

        debug!(length, "enumerating permutations");
        let computed: Enumeration = enumerate(length).into();

        let mut by_length = self
            .by_length
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut populated = false;
        let permutations = by_length
            .entry(length)
            .or_insert_with(|| {
                populated = true;
                computed
            })
            .clone();

        if populated {
            debug!(
                length,
                count = permutations.len(),
                "populated permutation cache"
            );
        }
        CacheLookup {
            permutations,
            populated,
        }
    }

    /// Lengths currently cached, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .by_length
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of cached lengths.
    pub fn len(&self) -> usize {
        self.by_length
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
