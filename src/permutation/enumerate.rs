// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of all permutations of a given length.
//!
//! The walk starts at the identity and applies [`Permutation::successor`]
//! until it returns `None`. Results are not memoized here; callers that reuse
//! enumerations go through [`crate::memo::PermutationCache`].

use super::Permutation;

/// Lazy walk over a permutation and all of its successors.
///
/// # Examples
///
/// ```
/// use integer_refactor::permutation::Permutation;
///
/// let all: Vec<_> = Permutation::identity(3).successors().collect();
/// assert_eq!(all.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Successors {
    next: Option<Permutation>,
}

impl Iterator for Successors {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let current = self.next.take()?;
        self.next = current.successor();
        Some(current)
    }
}

impl Permutation {
    /// Iterate from `self` (inclusive) to the last permutation.
    pub fn successors(self) -> Successors {
        Successors { next: Some(self) }
    }
}

/// All `n!` permutations of `0..n`, identity first.
///
/// `enumerate(0)` is the single empty permutation.
pub fn enumerate(n: usize) -> Vec<Permutation> {
    Permutation::identity(n).successors().collect()
}

/// Enumerations for every length in `0..n`.
pub fn enumerate_up_to(n: usize) -> Vec<Vec<Permutation>> {
    (0..n).map(enumerate).collect()
}
