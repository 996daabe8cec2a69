// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for permutation handling and integer refactoring.
//!
//! Every failure is reported to the immediate caller. None of them are
//! transient, so nothing here is retried.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = RefactorError> = std::result::Result<T, E>;

/// Errors raised by the public operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefactorError {
    /// A scalar argument is outside its domain (e.g. `n == 0` for factorization).
    #[error("invalid argument: {name} must be {expected}, {value} was provided")]
    InvalidArgument {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A sequence is not a permutation of `0..n`.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(#[from] PermutationDefect),

    /// An alphabet cannot be addressed by a permutation.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetDefect),

    /// Supplied factors do not multiply back to the integer.
    #[error("invalid factor set: factors {factors:?} multiply to {product}, not {integer}")]
    InvalidFactorSet {
        integer: u64,
        product: u128,
        factors: Vec<u64>,
    },

    /// A refactor's digital root disagrees with the integer's.
    #[error(
        "refactored integer aggregate of {refactor_aggregate} for refactor {refactor} \
         does not equal integer aggregate of {aggregate} for {integer}"
    )]
    AggregateMismatch {
        integer: u64,
        aggregate: u8,
        refactor: u64,
        refactor_aggregate: u8,
    },

    /// A combination of wheel values does not fit in a `u64`.
    #[error("product of {values:?} overflows while refactoring {integer}")]
    ProductOverflow { integer: u64, values: Vec<u64> },
}

impl RefactorError {
    pub(crate) fn invalid_argument(
        name: &'static str,
        expected: &'static str,
        value: impl ToString,
    ) -> Self {
        RefactorError::InvalidArgument {
            name,
            expected,
            value: value.to_string(),
        }
    }
}

/// Why a sequence failed permutation validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationDefect {
    /// Entry that could not be read as a non-negative integer.
    #[error("index {index} has value {value}, which is not a non-negative integer")]
    NotANonNegativeInteger { index: usize, value: String },

    /// The same value appears twice.
    #[error("duplicate value of {value} found at indices {first} and {second}")]
    Duplicate {
        value: usize,
        first: usize,
        second: usize,
    },

    /// A value of `0..n` is absent (usually because another entry is out of range).
    #[error("missing value: {value}")]
    Missing { value: usize },
}

/// Why an alphabet was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetDefect {
    /// Two equal entries while duplicates are disallowed.
    #[error("duplicate value found at indices {first} and {second}")]
    Duplicate { first: usize, second: usize },

    /// Fewer letters than the permutation addresses.
    #[error("permutation of length {required} needs at least {required} letters, {provided} provided")]
    TooShort { required: usize, provided: usize },
}
