// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Successor of a permutation.
//!
//! Algorithm, for a permutation `p` of length `n` with `base = n - 1`:
//! 1. Lengths 0 and 1 have no successor
//! 2. If `p[base] == base`, swap the last two positions
//! 3. Otherwise scan `i` from `base` down to 1 for the first `p[i] >= p[i-1]`.
//!    Keep `p[..i-1]`, place the smallest unused value above `p[i-1]`, then
//!    fill the rest with the unused values in ascending order
//! 4. If no such `i` exists the permutation is the last one
//!
//! Starting from the identity this visits all `n!` permutations exactly once,
//! ending at `[n-1, ..., 1, 0]`.

use super::{validate, Permutation};
use crate::errors::Result;

impl Permutation {
    /// The next permutation, or `None` if `self` is the last one.
    ///
    /// # Examples
    ///
    /// ```
    /// use integer_refactor::permutation::Permutation;
    ///
    /// let p = Permutation::identity(3);
    /// assert_eq!(p.successor().unwrap().as_slice(), &[0, 2, 1]);
    /// ```
    pub fn successor(&self) -> Option<Permutation> {
        successor_of(&self.0).map(Permutation::from_trusted)
    }
}

/// Validate `permutation`, then compute its successor.
///
/// Returns `Ok(None)` at the end of the sequence.
pub fn next_permutation(permutation: &[usize]) -> Result<Option<Vec<usize>>> {
    validate(permutation)?;
    Ok(successor_of(permutation))
}

/// Successor on a slice already known to be a permutation.
fn successor_of(current: &[usize]) -> Option<Vec<usize>> {
    let len = current.len();
    if len < 2 {
        return None;
    }
    let base = len - 1;

    // Last digit at home: only the final pair can move.
    if current[base] == base {
        let mut next = Vec::with_capacity(len);
        next.extend_from_slice(&current[..base - 1]);
        next.push(current[base]);
        next.push(current[base - 1]);
        return Some(next);
    }

    for i in (1..=base).rev() {
        let digit = current[i];
        let preceding = current[i - 1];
        if digit < preceding {
            continue;
        }

        let prefix = &current[..i - 1];
        let mut placed = vec![false; len];
        for &value in prefix {
            placed[value] = true;
        }

        // `digit` itself is unused and above `preceding`, so this stops by `digit`.
        let mut pivot = preceding + 1;
        while placed[pivot] {
            pivot += 1;
        }
        placed[pivot] = true;

        let mut next = Vec::with_capacity(len);
        next.extend_from_slice(prefix);
        next.push(pivot);
        next.extend((0..len).filter(|&value| !placed[value]));
        return Some(next);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PermutationDefect, RefactorError};

    fn next(values: &[usize]) -> Option<Vec<usize>> {
        next_permutation(values).unwrap()
    }

    #[test]
    fn test_short_permutations_are_terminal() {
        assert_eq!(next(&[]), None);
        assert_eq!(next(&[0]), None);
    }

    #[test]
    fn test_home_swap() {
        // Last element equals its index: swap the final pair
        assert_eq!(next(&[0, 1, 2]), Some(vec![0, 2, 1]));
        assert_eq!(next(&[1, 0, 2]), Some(vec![1, 2, 0]));
        assert_eq!(next(&[0, 1]), Some(vec![1, 0]));
    }

    #[test]
    fn test_scan_branch() {
        assert_eq!(next(&[0, 2, 1]), Some(vec![1, 0, 2]));
        assert_eq!(next(&[1, 2, 0]), Some(vec![2, 0, 1]));
        assert_eq!(next(&[0, 3, 2, 1]), Some(vec![1, 0, 2, 3]));
        // Pivot skips values already used by the prefix
        assert_eq!(next(&[2, 1, 3, 0]), Some(vec![2, 3, 0, 1]));
    }

    #[test]
    fn test_descending_is_terminal() {
        assert_eq!(next(&[1, 0]), None);
        assert_eq!(next(&[2, 1, 0]), None);
        assert_eq!(next(&[4, 3, 2, 1, 0]), None);
    }

    #[test]
    fn test_successor_does_not_mutate() {
        let p = Permutation::identity(3);
        let q = p.successor().unwrap();
        assert_eq!(p.as_slice(), &[0, 1, 2]);
        assert_eq!(q.as_slice(), &[0, 2, 1]);
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert_eq!(
            next_permutation(&[0, 1, 1]),
            Err(RefactorError::InvalidPermutation(PermutationDefect::Duplicate {
                value: 1,
                first: 1,
                second: 2
            }))
        );
        assert_eq!(
            next_permutation(&[1, 2]),
            Err(RefactorError::InvalidPermutation(PermutationDefect::Missing {
                value: 0
            }))
        );
    }
}
