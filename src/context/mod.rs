// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Refactor context combining MEMO data, configuration, and statistics.
//!
//! The RefactorContext is the value passed through the refactor operations:
//! - MEMO: the [`PermutationCache`], immutable once an entry exists
//! - Configuration: [`RefactorConfig`]
//! - Statistics: counters owned by this context
//!
//! Several contexts may share one cache, which allows refactoring on
//! several threads without enumerating the same permutations twice.

pub mod config;
pub mod statistics;

pub use config::{RefactorConfig, DEFAULT_MAX_FACTOR_DIGITS};
pub use statistics::{Counters, Statistics};

use crate::errors::Result;
use crate::memo::{Enumeration, PermutationCache};
use crate::refactor::{self, RefactorResult};
use std::sync::Arc;

/// State for a sequence of refactor operations.
///
/// # Memory Model
///
/// ```text
/// RefactorContext {
///     cache: Arc<PermutationCache>,  // MEMO: shared, append-only
///     config: RefactorConfig,        // Copy, owned
///     statistics: Statistics,        // Mutable, owned
/// }
/// ```
///
/// # Example
///
/// ```
/// use integer_refactor::RefactorContext;
/// use std::sync::Arc;
///
/// // Single-threaded
/// let mut ctx = RefactorContext::new();
/// assert_eq!(ctx.refactor(26).unwrap().refactors, vec![26, 62]);
///
/// // A second context reusing the enumerations of the first
/// let other = RefactorContext::with_cache(Arc::clone(ctx.cache()));
/// assert_eq!(other.cache().lengths(), vec![2]);
/// ```
#[derive(Debug)]
pub struct RefactorContext {
    cache: Arc<PermutationCache>,
    /// Options for this context.
    pub config: RefactorConfig,
    /// Counters updated by every operation.
    pub statistics: Statistics,
}

impl RefactorContext {
    /// Create a context with an empty cache and the default configuration.
    pub fn new() -> Self {
        Self::with_config(RefactorConfig::default())
    }

    pub fn with_config(config: RefactorConfig) -> Self {
        Self {
            cache: Arc::new(PermutationCache::new()),
            config,
            statistics: Statistics::new(),
        }
    }

    /// Create a context reusing an existing cache.
    ///
    /// This is useful for parallel refactoring that shares enumerations.
    pub fn with_cache(cache: Arc<PermutationCache>) -> Self {
        Self {
            cache,
            config: RefactorConfig::default(),
            statistics: Statistics::new(),
        }
    }

    pub fn cache(&self) -> &Arc<PermutationCache> {
        &self.cache
    }

    /// All permutations of `length`, recording a cache hit or miss.
    pub fn digit_permutations(&mut self, length: usize) -> Enumeration {
        let lookup = self.cache.lookup(length);
        self.statistics.increment(if lookup.populated {
            Counters::CacheMisses
        } else {
            Counters::CacheHits
        });
        lookup.permutations
    }

    /// Refactor `n` and compute its aggregates.
    ///
    /// See [`refactor::aggregate_integer_refactors`].
    pub fn refactor(&mut self, n: u64) -> Result<RefactorResult> {
        refactor::aggregate_integer_refactors(self, n)
    }

    /// Refactor `n`, optionally with a caller-supplied factor list.
    ///
    /// See [`refactor::refactor_integer`].
    pub fn refactor_integer(&mut self, n: u64, factors: Option<&[u64]>) -> Result<Vec<u64>> {
        refactor::refactor_integer(self, n, factors)
    }
}

impl Default for RefactorContext {
    fn default() -> Self {
        Self::new()
    }
}
