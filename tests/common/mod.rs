// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use integer_refactor::Permutation;

/// `n!`
pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// All permutations of `0..n` in lexicographic order, built recursively.
///
/// Independent of the successor rule, so it can serve as an oracle.
pub fn lexicographic_permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut Vec<bool>, out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for value in 0..used.len() {
            if !used[value] {
                used[value] = true;
                prefix.push(value);
                extend(prefix, used, out);
                prefix.pop();
                used[value] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

/// True if `values` holds each of `0..values.len()` exactly once.
pub fn is_permutation(values: &[usize]) -> bool {
    let mut seen = vec![false; values.len()];
    for &value in values {
        if value >= seen.len() || seen[value] {
            return false;
        }
        seen[value] = true;
    }
    true
}

pub fn as_vectors(permutations: &[Permutation]) -> Vec<Vec<usize>> {
    permutations.iter().map(|p| p.as_slice().to_vec()).collect()
}
