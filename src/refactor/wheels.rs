// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit-permutation sets: the values a factor may take on the abacus.

use crate::abacus::Wheel;
use crate::arithmetic::{digit_count, digits, from_digits};
use crate::context::RefactorContext;
use crate::errors::{RefactorError, Result};
use crate::permutation::Permutation;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct integers formed by permuting the decimal digits of `factor`.
///
/// `permutations` must be the enumeration for `factor`'s digit count.
/// Leading zeros vanish, so `101` gives `{11, 101, 110}`. Sorted ascending.
pub fn digit_permutation_set(factor: u64, permutations: &[Permutation]) -> Result<Vec<u64>> {
    let factor_digits = digits(factor);
    let mut unique = BTreeSet::new();

    for permutation in permutations {
        let arranged = permutation.apply(&factor_digits)?;
        let value = from_digits(&arranged).ok_or_else(|| RefactorError::ProductOverflow {
            integer: factor,
            values: vec![factor],
        })?;
        unique.insert(value);
    }

    Ok(unique.into_iter().collect())
}

/// Distinct factors (ignoring explicit 1s) and their multiplicities, ascending.
pub fn group_factors(factors: &[u64]) -> BTreeMap<u64, u32> {
    let mut grouped = BTreeMap::new();
    for &factor in factors.iter().filter(|&&factor| factor != 1) {
        *grouped.entry(factor).or_insert(0) += 1;
    }
    grouped
}

/// Build one wheel per distinct factor.
///
/// Single-digit factors are their own only value. Longer factors use the
/// context's cached enumeration for their digit count.
pub fn build_wheels(ctx: &mut RefactorContext, grouped: &BTreeMap<u64, u32>) -> Result<Vec<Wheel>> {
    let mut wheels = Vec::with_capacity(grouped.len());

    for (&factor, &multiplicity) in grouped {
        let values = if factor < 10 {
            vec![factor]
        } else {
            let length = digit_count(factor);
            if length > ctx.config.max_factor_digits {
                return Err(RefactorError::InvalidArgument {
                    name: "factor",
                    expected: "within the configured digit limit",
                    value: format!(
                        "{} ({} digits, limit {})",
                        factor, length, ctx.config.max_factor_digits
                    ),
                });
            }
            let permutations = ctx.digit_permutations(length);
            digit_permutation_set(factor, &permutations)?
        };
        wheels.push(Wheel::new(factor, multiplicity, values));
    }

    Ok(wheels)
}
