// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Applying a permutation to an alphabet.
//!
//! An alphabet is any sequence of values addressed by permutation indices:
//! `result[i] = alphabet[permutation[i]]`. Distinctness is checked with
//! `Eq + Hash`.

use super::Permutation;
use crate::errors::{AlphabetDefect, Result};
use std::collections::HashMap;
use std::hash::Hash;

impl Permutation {
    /// Rearrange `alphabet` without checking it for duplicates.
    ///
    /// The alphabet may be longer than the permutation; extra letters are
    /// never selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use integer_refactor::permutation::Permutation;
    ///
    /// let p = Permutation::new(vec![2, 0, 1]).unwrap();
    /// assert_eq!(p.apply(&['a', 'b', 'c']).unwrap(), vec!['c', 'a', 'b']);
    /// ```
    pub fn apply<T: Clone>(&self, alphabet: &[T]) -> Result<Vec<T>, AlphabetDefect> {
        if alphabet.len() < self.len() {
            return Err(AlphabetDefect::TooShort {
                required: self.len(),
                provided: alphabet.len(),
            });
        }
        Ok(self.0.iter().map(|&index| alphabet[index].clone()).collect())
    }
}

/// Check that no two letters are equal, unless `allow_duplicates` is set.
pub fn validate_alphabet<T: Eq + Hash>(
    alphabet: &[T],
    allow_duplicates: bool,
) -> Result<(), AlphabetDefect> {
    if allow_duplicates {
        return Ok(());
    }

    let mut first_seen: HashMap<&T, usize> = HashMap::with_capacity(alphabet.len());
    for (index, letter) in alphabet.iter().enumerate() {
        if let Some(&first) = first_seen.get(letter) {
            return Err(AlphabetDefect::Duplicate {
                first,
                second: index,
            });
        }
        first_seen.insert(letter, index);
    }
    Ok(())
}

/// Validate `alphabet` and rearrange it by `permutation`.
pub fn apply_permutation<T: Clone + Eq + Hash>(
    permutation: &Permutation,
    alphabet: &[T],
    allow_duplicates: bool,
) -> Result<Vec<T>> {
    validate_alphabet(alphabet, allow_duplicates)?;
    Ok(permutation.apply(alphabet)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RefactorError;

    #[test]
    fn test_apply_rotation() {
        let p = Permutation::new(vec![2, 0, 1]).unwrap();
        assert_eq!(
            apply_permutation(&p, &['a', 'b', 'c'], false).unwrap(),
            vec!['c', 'a', 'b']
        );
    }

    #[test]
    fn test_identity_leaves_alphabet_unchanged() {
        let alphabet = vec!["north", "east", "south", "west"];
        let p = Permutation::identity(alphabet.len());
        assert_eq!(apply_permutation(&p, &alphabet, false).unwrap(), alphabet);
    }

    #[test]
    fn test_duplicates_rejected() {
        let p = Permutation::identity(3);
        assert_eq!(
            apply_permutation(&p, &[7, 8, 7], false),
            Err(RefactorError::InvalidAlphabet(AlphabetDefect::Duplicate {
                first: 0,
                second: 2
            }))
        );
    }

    #[test]
    fn test_duplicates_allowed() {
        let p = Permutation::new(vec![1, 2, 0]).unwrap();
        assert_eq!(
            apply_permutation(&p, &[1, 1, 3], true).unwrap(),
            vec![1, 3, 1]
        );
    }

    #[test]
    fn test_short_alphabet_rejected() {
        let p = Permutation::identity(3);
        assert_eq!(
            p.apply(&['a', 'b']),
            Err(AlphabetDefect::TooShort {
                required: 3,
                provided: 2
            })
        );
    }
}
