// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime factorization by trial division.

use crate::errors::{RefactorError, Result};

/// Prime factors of `n` with multiplicity, in ascending order.
///
/// `factorize(1, false)` is `[1]` so that the product of the result is always
/// `n`. With `include_one`, a leading `1` is added for every `n`.
///
/// # Examples
///
/// ```
/// use integer_refactor::arithmetic::factorize;
///
/// assert_eq!(factorize(12, false).unwrap(), vec![2, 2, 3]);
/// assert_eq!(factorize(12, true).unwrap(), vec![1, 2, 2, 3]);
/// ```
pub fn factorize(n: u64, include_one: bool) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(RefactorError::invalid_argument(
            "n",
            "a positive integer",
            n,
        ));
    }

    let mut factors = Vec::new();
    if include_one {
        factors.push(1);
    }
    if n == 1 {
        if !include_one {
            factors.push(1);
        }
        return Ok(factors);
    }

    let mut remainder = n;
    while remainder % 2 == 0 {
        remainder /= 2;
        factors.push(2);
    }

    let mut divisor = 3;
    // `divisor <= remainder / divisor` avoids overflowing `divisor * divisor`.
    while divisor <= remainder / divisor {
        while remainder % divisor == 0 {
            remainder /= divisor;
            factors.push(divisor);
        }
        divisor += 2;
    }

    if remainder > 1 {
        factors.push(remainder);
    }

    Ok(factors)
}

/// Check that every factor is positive and that the factors multiply to `n`.
pub fn verify_integer_factors(n: u64, factors: &[u64]) -> Result<()> {
    let product = factors
        .iter()
        .fold(1u128, |product, &factor| product.saturating_mul(factor as u128));

    if factors.contains(&0) || product != n as u128 {
        return Err(RefactorError::InvalidFactorSet {
            integer: n,
            product,
            factors: factors.to_vec(),
        });
    }
    Ok(())
}
