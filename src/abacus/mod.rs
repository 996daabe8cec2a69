// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The abacus: a mixed-radix counter over independent wheels.
//!
//! Each [`Wheel`] holds the values one distinct factor may take. A bead
//! vector picks one position per wheel; walking every bead vector walks the
//! Cartesian product of the wheels.
//!
//! # Odometer
//!
//! The first wheel turns fastest. To advance, find the first wheel whose bead
//! can still move, move it, and reset every wheel before it to 0. When every
//! wheel wraps, the walk is over. The walk is a do/while: the current bead
//! vector is always evaluated before advancing, so wheels that all have
//! length 1 give exactly one combination.
//!
//! # Example
//!
//! ```
//! use integer_refactor::abacus::{Abacus, Wheel};
//!
//! let abacus = Abacus::new(vec![
//!     Wheel::new(2, 1, vec![2]),
//!     Wheel::new(13, 1, vec![13, 31]),
//! ])
//! .unwrap();
//!
//! let products = abacus.products(26).unwrap();
//! assert_eq!(products.values.into_iter().collect::<Vec<_>>(), vec![26, 62]);
//! assert_eq!(products.evaluations, 2);
//! ```

use crate::errors::{RefactorError, Result};
use std::collections::BTreeSet;
use tracing::debug;

/// One radix position of the abacus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    /// The distinct factor this wheel stands for.
    pub factor: u64,
    /// How many times the factor divides the integer.
    pub multiplicity: u32,
    /// Values the factor may take (its digit permutations).
    pub values: Vec<u64>,
}

impl Wheel {
    pub fn new(factor: u64, multiplicity: u32, values: Vec<u64>) -> Self {
        Self {
            factor,
            multiplicity,
            values,
        }
    }

    /// Number of beads on the wheel.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Distinct products and the number of combinations evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Products {
    pub values: BTreeSet<u64>,
    pub evaluations: usize,
}

/// A set of non-empty wheels.
#[derive(Debug, Clone)]
pub struct Abacus {
    wheels: Vec<Wheel>,
}

impl Abacus {
    /// Build an abacus. Every wheel must hold at least one value.
    pub fn new(wheels: Vec<Wheel>) -> Result<Self> {
        if let Some(empty) = wheels.iter().find(|wheel| wheel.is_empty()) {
            return Err(RefactorError::invalid_argument(
                "wheel",
                "a non-empty set of values",
                format!("an empty wheel for factor {}", empty.factor),
            ));
        }
        Ok(Self { wheels })
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    /// Number of bead vectors, `∏ len(wheel)`. `None` if it overflows.
    pub fn combination_count(&self) -> Option<usize> {
        self.wheels
            .iter()
            .try_fold(1usize, |count, wheel| count.checked_mul(wheel.len()))
    }

    /// Iterate over every bead vector in odometer order.
    pub fn beads(&self) -> Beads<'_> {
        Beads {
            wheels: &self.wheels,
            positions: vec![0; self.wheels.len()],
            exhausted: false,
        }
    }

    /// The values selected by a bead vector.
    pub fn selection(&self, positions: &[usize]) -> Vec<u64> {
        self.wheels
            .iter()
            .zip(positions)
            .map(|(wheel, &position)| wheel.values[position])
            .collect()
    }

    /// Multiply out every combination, raising each selected value to its
    /// wheel's multiplicity, and collect the distinct products.
    ///
    /// `integer` is only used to identify the computation in an overflow error.
    pub fn products(&self, integer: u64) -> Result<Products> {
        let mut values = BTreeSet::new();
        let mut evaluations = 0;

        for positions in self.beads() {
            evaluations += 1;
            let product = self
                .wheels
                .iter()
                .zip(&positions)
                .try_fold(1u64, |product, (wheel, &position)| {
                    wheel.values[position]
                        .checked_pow(wheel.multiplicity)
                        .and_then(|power| product.checked_mul(power))
                })
                .ok_or_else(|| RefactorError::ProductOverflow {
                    integer,
                    values: self.selection(&positions),
                })?;
            values.insert(product);
        }

        debug!(
            integer,
            wheels = self.wheels.len(),
            evaluations,
            distinct = values.len(),
            "abacus complete"
        );
        Ok(Products {
            values,
            evaluations,
        })
    }
}

/// Iterator over bead vectors, see [`Abacus::beads`].
#[derive(Debug, Clone)]
pub struct Beads<'a> {
    wheels: &'a [Wheel],
    positions: Vec<usize>,
    exhausted: bool,
}

impl Beads<'_> {
    /// Move to the next bead vector. Returns false once every wheel wrapped.
    fn advance(&mut self) -> bool {
        for (position, wheel) in self.positions.iter_mut().zip(self.wheels) {
            if *position + 1 < wheel.len() {
                *position += 1;
                return true;
            }
            *position = 0;
        }
        false
    }
}

impl Iterator for Beads<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.positions.clone();
        self.exhausted = !self.advance();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(values: &[u64]) -> Wheel {
        Wheel::new(values[0], 1, values.to_vec())
    }

    #[test]
    fn test_single_combination_evaluated_once() {
        let abacus = Abacus::new(vec![wheel(&[2]), wheel(&[3]), wheel(&[5])]).unwrap();
        assert_eq!(abacus.combination_count(), Some(1));
        assert_eq!(abacus.beads().collect::<Vec<_>>(), vec![vec![0, 0, 0]]);

        let products = abacus.products(30).unwrap();
        assert_eq!(products.evaluations, 1);
        assert_eq!(products.values.into_iter().collect::<Vec<_>>(), vec![30]);
    }

    #[test]
    fn test_odometer_order() {
        let abacus = Abacus::new(vec![wheel(&[1, 2]), wheel(&[10, 20, 30])]).unwrap();
        let beads: Vec<_> = abacus.beads().collect();
        assert_eq!(
            beads,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![1, 1],
                vec![0, 2],
                vec![1, 2],
            ]
        );
        assert_eq!(abacus.combination_count(), Some(6));
        assert_eq!(abacus.products(0).unwrap().evaluations, 6);
    }

    #[test]
    fn test_products_deduplicate() {
        // 2*30 == 3*20
        let abacus = Abacus::new(vec![wheel(&[2, 3]), wheel(&[20, 30])]).unwrap();
        let products = abacus.products(0).unwrap();
        assert_eq!(products.evaluations, 4);
        assert_eq!(
            products.values.into_iter().collect::<Vec<_>>(),
            vec![40, 60, 90]
        );
    }

    #[test]
    fn test_multiplicity_raises_power() {
        let abacus = Abacus::new(vec![Wheel::new(13, 2, vec![13, 31])]).unwrap();
        let products = abacus.products(169).unwrap();
        assert_eq!(
            products.values.into_iter().collect::<Vec<_>>(),
            vec![169, 961]
        );
    }

    #[test]
    fn test_no_wheels() {
        // The empty product is a single combination
        let abacus = Abacus::new(Vec::new()).unwrap();
        let products = abacus.products(1).unwrap();
        assert_eq!(products.evaluations, 1);
        assert_eq!(products.values.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_empty_wheel_rejected() {
        let result = Abacus::new(vec![wheel(&[2]), Wheel::new(7, 1, Vec::new())]);
        assert!(matches!(
            result,
            Err(RefactorError::InvalidArgument { name: "wheel", .. })
        ));
    }

    #[test]
    fn test_overflow_reported() {
        let abacus = Abacus::new(vec![Wheel::new(u64::MAX, 2, vec![u64::MAX])]).unwrap();
        assert_eq!(
            abacus.products(7),
            Err(RefactorError::ProductOverflow {
                integer: 7,
                values: vec![u64::MAX]
            })
        );
    }
}
