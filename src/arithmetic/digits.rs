// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decimal digits and the digital root.

/// Decimal digits of `n`, most significant first. `digits(0)` is `[0]`.
pub fn digits(n: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(digit_count(n));
    let mut remainder = n;
    loop {
        result.push((remainder % 10) as u8);
        remainder /= 10;
        if remainder == 0 {
            break;
        }
    }
    result.reverse();
    result
}

/// Number of decimal digits in `n`.
pub fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Reassemble digits, most significant first. Leading zeros vanish.
///
/// Returns `None` if the value does not fit in a `u64`.
pub fn from_digits(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |value, &digit| {
        value.checked_mul(10)?.checked_add(digit as u64)
    })
}

/// Repeated digit sum down to a single digit (the "aggregate").
///
/// # Examples
///
/// ```
/// use integer_refactor::arithmetic::digital_root;
///
/// assert_eq!(digital_root(9875), 2); // 9+8+7+5 = 29, 2+9 = 11, 1+1 = 2
/// ```
pub fn digital_root(n: u64) -> u8 {
    let mut aggregate = n;
    while aggregate >= 10 {
        aggregate = digits(aggregate).iter().map(|&d| d as u64).sum();
    }
    aggregate as u8
}
