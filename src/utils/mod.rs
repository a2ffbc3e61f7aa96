//! Combinatorial helpers shared by the enumerators.
//!
//! This module provides binomial coefficients, ordered compositions
//! (stars-and-bars) for splitting a degree budget across generator rows, and
//! a mixed-radix odometer over GF(4) digits.

use crate::gf::Gf4;

/// Compute binomial coefficient C(n, k) = n! / (k! * (n-k)!)
///
/// Returns `None` if the result would overflow `u64`.
///
/// # Examples
///
/// ```
/// use gf4codes::utils::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(10, 5), Some(252));
/// assert_eq!(binomial(5, 0), Some(1));
/// assert_eq!(binomial(3, 5), Some(0)); // k > n
/// ```
#[must_use]
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }

    // Use symmetry: C(n, k) = C(n, n-k)
    let k = k.min(n - k);

    let mut result: u64 = 1;
    for i in 0..k {
        // Divide as we go; each partial product is itself a binomial
        result = result.checked_mul(n - i)?;
        result /= i + 1;
    }

    Some(result)
}

/// All ordered ways to write `total` as a sum of `parts` positive integers.
///
/// Compositions are produced with the first part varying slowest, smallest
/// first. There are `C(total - 1, parts - 1)` of them; zero parts compose
/// only the total 0.
///
/// # Examples
///
/// ```
/// use gf4codes::utils::compositions;
///
/// assert_eq!(
///     compositions(4, 2),
///     vec![vec![1, 3], vec![2, 2], vec![3, 1]]
/// );
/// assert_eq!(compositions(3, 3), vec![vec![1, 1, 1]]);
/// assert!(compositions(2, 3).is_empty());
/// assert_eq!(compositions(0, 0), vec![Vec::<usize>::new()]);
/// ```
#[must_use]
pub fn compositions(total: usize, parts: usize) -> Vec<Vec<usize>> {
    let expected = match (total, parts) {
        (0, 0) => 1,
        (_, 0) | (0, _) => 0,
        _ => binomial(total as u64 - 1, parts as u64 - 1).unwrap_or(0),
    };
    let mut out = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    let mut current = Vec::with_capacity(parts);
    compose(total, parts, &mut current, &mut out);
    out
}

fn compose(rest: usize, parts: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if parts > rest {
        return;
    }
    if rest == 0 {
        out.push(current.clone());
        return;
    }
    if parts == 0 {
        return;
    }
    for first in 1..=(rest - parts + 1) {
        current.push(first);
        compose(rest - first, parts - 1, current, out);
        current.pop();
    }
}

/// Advance a little-endian GF(4) counter by one (digit 0 moves fastest).
///
/// Returns `false` when the counter wraps back to all zeros.
///
/// # Examples
///
/// ```
/// use gf4codes::gf::Gf4;
/// use gf4codes::utils::odometer_step;
///
/// let mut digits = [Gf4::V, Gf4::ZERO];
/// assert!(odometer_step(&mut digits));
/// assert_eq!(digits, [Gf4::ZERO, Gf4::ONE]);
/// ```
pub fn odometer_step(digits: &mut [Gf4]) -> bool {
    step(digits.iter_mut())
}

/// Advance a big-endian GF(4) counter by one (the last digit moves fastest).
///
/// Returns `false` when the counter wraps back to all zeros.
pub fn odometer_step_rev(digits: &mut [Gf4]) -> bool {
    step(digits.iter_mut().rev())
}

fn step<'a>(digits: impl Iterator<Item = &'a mut Gf4>) -> bool {
    for digit in digits {
        *digit = digit.succ();
        if !digit.is_zero() {
            return true;
        }
    }
    false
}
