// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer helpers used by the refactor search.
//!
//! ## Module Structure
//!
//! - `factors`: trial-division factorization and factor-list verification
//! - `digits`: decimal digits and the digital root (aggregate)

pub mod digits;
pub mod factors;

pub use digits::{digit_count, digital_root, digits, from_digits};
pub use factors::{factorize, verify_integer_factors};
