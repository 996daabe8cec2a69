// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation enumeration and integer refactoring.
//!
//! A refactor of a positive integer `n` is obtained by permuting the decimal
//! digits of each of `n`'s distinct prime factors and multiplying the results
//! back together. Since permuting digits keeps the digit sum, every refactor
//! has the same digital root (the "aggregate") as `n`.
//!
//! # Architecture
//!
//! ## MEMO Data (Immutable)
//!
//! Enumerations of all permutations of a length, computed on first use and
//! kept in a [`PermutationCache`] shared by any number of contexts.
//!
//! ## Per-call State (Mutable)
//!
//! - The abacus bead vector, owned by one enumeration
//! - [`Statistics`] counters, owned by one [`RefactorContext`]
//!
//! # Algorithm
//!
//! 1. **Successor**: the next permutation of `0..n` in lexicographic order,
//!    computed by a scan-and-fill rule (`permutation::successor`)
//! 2. **Enumeration**: identity, then successors until none remain
//! 3. **Digit permutations**: an enumeration applied to a factor's digits
//! 4. **Abacus**: a mixed-radix counter over one wheel per distinct factor,
//!    multiplying out every combination
//!
//! # Example
//!
//! ```
//! use integer_refactor::RefactorContext;
//!
//! let mut ctx = RefactorContext::new();
//! let result = ctx.refactor(26).unwrap();
//! assert_eq!(result.refactors, vec![26, 62]);
//! assert_eq!(result.aggregate, 8);
//! ```

pub mod abacus;
pub mod arithmetic;
pub mod context;
pub mod errors;
pub mod memo;
pub mod permutation;
pub mod refactor;

// Re-export commonly used types
pub use abacus::{Abacus, Wheel};
pub use context::{Counters, RefactorConfig, RefactorContext, Statistics};
pub use errors::{AlphabetDefect, PermutationDefect, RefactorError, Result};
pub use memo::PermutationCache;
pub use permutation::{apply_permutation, enumerate, enumerate_up_to, next_permutation, Permutation};
pub use refactor::{aggregate_integer_refactors, refactor_integer, RefactorResult};
