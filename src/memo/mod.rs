// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data: enumerations computed once and then only read.
//!
//! Enumerating all permutations of a length is the expensive step of a
//! refactor, and factors sharing a digit count share the same index
//! permutations. The [`PermutationCache`] keeps every enumeration it has
//! produced for the life of the cache.

pub mod permutations;

pub use permutations::{CacheLookup, Enumeration, PermutationCache};
