// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations of `0..n` and the operations built on them.
//!
//! A [`Permutation`] can only be obtained through validation or from the
//! successor/enumeration machinery in this module, so every value of the type
//! holds each of `0..n` exactly once.
//!
//! ## Module Structure
//!
//! - `successor`: the next permutation under this crate's ordering
//! - `enumerate`: all `n!` permutations, starting from the identity
//! - `alphabet`: rearranging arbitrary sequences by a permutation
//! - `random`: uniformly random integers and permutations
//!
//! # Examples
//!
//! ```
//! use integer_refactor::permutation::Permutation;
//!
//! let p: Permutation = "0,2,1".parse().unwrap();
//! assert_eq!(p.successor().unwrap().as_slice(), &[1, 0, 2]);
//! ```

pub mod alphabet;
pub mod enumerate;
pub mod random;
pub mod successor;

pub use alphabet::{apply_permutation, validate_alphabet};
pub use enumerate::{enumerate, enumerate_up_to, Successors};
pub use successor::next_permutation;

use crate::errors::{PermutationDefect, RefactorError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// An ordered arrangement of `0..n` with no repeats and no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Validate `values` and wrap them.
    pub fn new(values: Vec<usize>) -> Result<Self> {
        validate(&values)?;
        Ok(Self(values))
    }

    /// The identity permutation `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Wrap values already known to be a permutation.
    pub(crate) fn from_trusted(values: Vec<usize>) -> Self {
        debug_assert!(validate(&values).is_ok(), "untrusted permutation {:?}", values);
        Self(values)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty permutation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// True if every position holds its own index.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| i == v)
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = RefactorError;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[i64]> for Permutation {
    type Error = RefactorError;

    fn try_from(values: &[i64]) -> Result<Self> {
        let mut converted = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let value = usize::try_from(value).map_err(|_| {
                PermutationDefect::NotANonNegativeInteger {
                    index,
                    value: value.to_string(),
                }
            })?;
            converted.push(value);
        }
        Self::new(converted)
    }
}

/// Parses comma or whitespace separated integers, e.g. `"2,0,1"` or `"[2, 0, 1]"`.
impl FromStr for Permutation {
    type Err = RefactorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        let mut values = Vec::new();
        for (index, token) in trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
        {
            let value = token.parse::<usize>().map_err(|_| {
                PermutationDefect::NotANonNegativeInteger {
                    index,
                    value: token.to_string(),
                }
            })?;
            values.push(value);
        }
        Self::new(values)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Check that `values` contains every integer of `0..values.len()` exactly once.
///
/// Duplicates are reported first, in index order, naming the earlier and the
/// later index. Values out of range leave a gap, reported as the smallest
/// missing value.
pub fn validate(values: &[usize]) -> Result<(), PermutationDefect> {
    let mut first_seen: HashMap<usize, usize> = HashMap::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        if let Some(&first) = first_seen.get(&value) {
            return Err(PermutationDefect::Duplicate {
                value,
                first,
                second: index,
            });
        }
        first_seen.insert(value, index);
    }

    match (0..values.len()).find(|value| !first_seen.contains_key(value)) {
        Some(value) => Err(PermutationDefect::Missing { value }),
        None => Ok(()),
    }
}
