// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer refactoring.
//!
//! A refactor of `n` is a product of digit-permuted arrangements of `n`'s
//! distinct prime factors, each raised to its multiplicity. Permuting digits
//! keeps the digit sum, so every refactor shares `n`'s digital root
//! (its "aggregate").
//!
//! # Algorithm
//!
//! 1. Factorize `n` (or verify caller-supplied factors)
//! 2. Short-circuit to `[n]` when `n < 10` or there is at most one distinct factor
//! 3. Build one wheel per distinct factor from its digit permutations
//! 4. Run the [`Abacus`] over the wheels and keep the distinct products
//!
//! # Examples
//!
//! ```
//! use integer_refactor::RefactorContext;
//!
//! let mut ctx = RefactorContext::new();
//! let result = ctx.refactor(143).unwrap(); // 11 * 13
//! assert_eq!(result.refactors, vec![143, 341]);
//! assert_eq!(result.aggregate, 8);
//! assert_eq!(result.refactor_aggregates, vec![8, 8]);
//! ```

pub mod wheels;

pub use wheels::{build_wheels, digit_permutation_set, group_factors};

use crate::abacus::Abacus;
use crate::arithmetic::{digital_root, factorize, verify_integer_factors};
use crate::context::{Counters, RefactorContext};
use crate::errors::{RefactorError, Result};
use crate::permutation::random::random_integer_between;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An integer, its refactors, and their aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorResult {
    pub integer: u64,
    /// Distinct refactors, ascending. Always contains `integer`.
    pub refactors: Vec<u64>,
    /// Digital root of `integer`.
    pub aggregate: u8,
    /// Digital root of each refactor, in the same order.
    pub refactor_aggregates: Vec<u8>,
}

/// Every distinct refactor of `n`, ascending.
///
/// Supplied `factors` are verified to multiply to `n`; without them `n` is
/// factorized by trial division.
pub fn refactor_integer(
    ctx: &mut RefactorContext,
    n: u64,
    factors: Option<&[u64]>,
) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(RefactorError::invalid_argument("n", "a positive integer", n));
    }
    ctx.statistics.increment(Counters::Refactorings);

    let factors = match factors {
        Some(factors) => {
            verify_integer_factors(n, factors)?;
            factors.to_vec()
        }
        None => factorize(n, false)?,
    };

    let grouped = group_factors(&factors);
    if n < 10 || grouped.len() <= 1 {
        trace!(n, ?factors, "short-circuit");
        ctx.statistics.increment(Counters::ShortCircuits);
        return Ok(vec![n]);
    }

    let abacus = Abacus::new(build_wheels(ctx, &grouped)?)?;
    let products = abacus.products(n)?;
    ctx.statistics
        .add(Counters::ProductEvaluations, products.evaluations as u64);

    trace!(n, ?factors, refactors = products.values.len(), "refactored");
    Ok(products.values.into_iter().collect())
}

/// Check that every refactor aggregate equals `aggregate`.
///
/// Fails on the first mismatch.
pub fn verify_refactor_aggregates(
    n: u64,
    aggregate: u8,
    refactors: &[u64],
    refactor_aggregates: &[u8],
) -> Result<()> {
    for (&refactor, &refactor_aggregate) in refactors.iter().zip(refactor_aggregates) {
        if refactor_aggregate != aggregate {
            return Err(RefactorError::AggregateMismatch {
                integer: n,
                aggregate,
                refactor,
                refactor_aggregate,
            });
        }
    }
    Ok(())
}

/// Refactor `n` and attach digital roots.
///
/// When `ctx.config.verify_aggregates` is set, a refactor whose aggregate
/// differs from `n`'s is an error.
pub fn aggregate_integer_refactors(ctx: &mut RefactorContext, n: u64) -> Result<RefactorResult> {
    if n == 0 {
        return Err(RefactorError::invalid_argument("n", "a positive integer", n));
    }

    let aggregate = digital_root(n);
    let refactors = refactor_integer(ctx, n, None)?;
    let refactor_aggregates: Vec<u8> = refactors.iter().map(|&r| digital_root(r)).collect();

    if ctx.config.verify_aggregates {
        verify_refactor_aggregates(n, aggregate, &refactors, &refactor_aggregates)?;
    }

    Ok(RefactorResult {
        integer: n,
        refactors,
        aggregate,
        refactor_aggregates,
    })
}

/// Refactor a uniformly random integer in `[low, high)`.
pub fn aggregate_random_integer_refactors<R: Rng + ?Sized>(
    ctx: &mut RefactorContext,
    rng: &mut R,
    low: u64,
    high: u64,
) -> Result<RefactorResult> {
    let n = random_integer_between(rng, low, high)?;
    aggregate_integer_refactors(ctx, n)
}
