// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration for the refactor orchestrator.

/// Largest factor digit count enumerated by default.
///
/// Ten digits covers every factor of a `u32`; `10!` permutations of ten
/// indices are roughly 290 MB, so larger lengths need an explicit opt-in.
pub const DEFAULT_MAX_FACTOR_DIGITS: usize = 10;

/// Options controlling a [`crate::RefactorContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefactorConfig {
    /// Check that every refactor has the integer's digital root.
    pub verify_aggregates: bool,

    /// Factors with more digits than this are rejected instead of enumerated.
    pub max_factor_digits: usize,
}

impl RefactorConfig {
    /// Default configuration with aggregate verification switched off.
    pub fn unverified() -> Self {
        Self {
            verify_aggregates: false,
            ..Self::default()
        }
    }

    pub fn with_max_factor_digits(self, max_factor_digits: usize) -> Self {
        Self {
            max_factor_digits,
            ..self
        }
    }
}

impl Default for RefactorConfig {
    fn default() -> Self {
        Self {
            verify_aggregates: true,
            max_factor_digits: DEFAULT_MAX_FACTOR_DIGITS,
        }
    }
}
