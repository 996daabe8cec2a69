// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over random permutations and integers.

mod common;

use common::is_permutation;
use integer_refactor::arithmetic::{digital_root, factorize};
use integer_refactor::{apply_permutation, Permutation, RefactorContext};
use proptest::prelude::*;

/// A random permutation of `0..len` for `len` in `0..10`.
fn permutation_strategy() -> impl Strategy<Value = Permutation> {
    (0usize..10)
        .prop_flat_map(|len| Just((0..len).collect::<Vec<usize>>()).prop_shuffle())
        .prop_map(|values| Permutation::new(values).expect("shuffle keeps a permutation"))
}

proptest! {
    #[test]
    fn proptest_successor_is_greater_permutation(p in permutation_strategy()) {
        if let Some(next) = p.successor() {
            prop_assert!(is_permutation(next.as_slice()));
            prop_assert_eq!(next.len(), p.len());
            prop_assert!(next.as_slice() > p.as_slice());
        } else {
            // Only the descending permutation is terminal
            let descending: Vec<usize> = (0..p.len()).rev().collect();
            prop_assert_eq!(p.as_slice(), descending.as_slice());
        }
    }

    #[test]
    fn proptest_identity_mapping_returns_alphabet(len in 0usize..12) {
        let alphabet: Vec<String> = (0..len).map(|i| format!("letter-{}", i)).collect();
        let arranged = apply_permutation(&Permutation::identity(len), &alphabet, false).unwrap();
        prop_assert_eq!(arranged, alphabet);
    }

    #[test]
    fn proptest_apply_selects_by_index(p in permutation_strategy()) {
        let alphabet: Vec<usize> = (0..p.len()).map(|i| i * 7 + 3).collect();
        let arranged = p.apply(&alphabet).unwrap();
        for (i, &index) in p.as_slice().iter().enumerate() {
            prop_assert_eq!(arranged[i], alphabet[index]);
        }
    }

    #[test]
    fn proptest_factorize_product(n in 1u64..1_000_000_000) {
        let factors = factorize(n, false).unwrap();
        prop_assert_eq!(factors.iter().product::<u64>(), n);
    }

    #[test]
    fn proptest_refactors_share_aggregate(n in 1u64..1_000_000) {
        let mut ctx = RefactorContext::new();
        let result = ctx.refactor(n).unwrap();
        prop_assert!(result.refactors.contains(&n));
        for &refactor in &result.refactors {
            prop_assert_eq!(digital_root(refactor), digital_root(n));
        }
    }
}
