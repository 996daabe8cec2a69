// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Random integers and permutations.
//!
//! Both helpers take the generator as a parameter so tests can seed it.

use super::Permutation;
use crate::errors::{RefactorError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly random integer in `[low, high)`.
pub fn random_integer_between<R: Rng + ?Sized>(rng: &mut R, low: u64, high: u64) -> Result<u64> {
    if low >= high {
        return Err(RefactorError::invalid_argument(
            "high",
            "greater than low",
            format!("low {} and high {}", low, high),
        ));
    }
    Ok(rng.gen_range(low..high))
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Permutation {
    let mut values: Vec<usize> = (0..n).collect();
    values.shuffle(rng);
    Permutation::from_trusted(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_integer_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = random_integer_between(&mut rng, 10, 20).unwrap();
            assert!((10..20).contains(&value));
        }
    }

    #[test]
    fn test_random_integer_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_integer_between(&mut rng, 5, 5),
            Err(RefactorError::InvalidArgument { name: "high", .. })
        ));
        assert!(random_integer_between(&mut rng, 6, 5).is_err());
    }

    #[test]
    fn test_random_permutation_is_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..10 {
            let p = random_permutation(&mut rng, n);
            assert_eq!(p.len(), n);
            assert!(super::super::validate(p.as_slice()).is_ok());
        }
    }
}
