//! Truncated Laurent series over GF(4).
//!
//! A [`Series`] stores a finite window of a two-sided power series as a flat
//! coefficient vector plus a *zero offset*: the index of the degree-0
//! coefficient inside the vector. The window therefore covers the powers
//! `-offset ..= len - 1 - offset`, and any power outside it reads as zero.
//!
//! ## Normalization
//!
//! [`Series::normalize`] drops redundant zeros on both ends of the window:
//! leading zeros are removed while they sit at negative powers, trailing
//! zeros are removed while they sit at positive powers. The degree-0 slot is
//! always kept, so the zero series is the single coefficient `0` at offset 0.
//! Ring operations always return normalized series.
//!
//! ## Example
//!
//! ```
//! use gf4codes::series::Series;
//!
//! let a: Series = "1u".parse().unwrap();   // 1 + u·x
//! let b: Series = "11".parse().unwrap();   // 1 + x
//!
//! assert_eq!((&a * &b).to_string(), "1vu"); // 1 + v·x + u·x²
//! assert_eq!((&a + &a).to_string(), "0");
//! assert_eq!(a.reciprocal().to_string(), "u(1)"); // u·x⁻¹ + 1
//! ```

use std::fmt;
use std::iter;
use std::ops::{Add, Mul};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gf::Gf4;

/// A finite window of a Laurent series over GF(4).
///
/// The derived ordering compares the zero offset first, then the
/// coefficients lexicographically, then the window length. It carries no
/// algebraic meaning and only provides a deterministic key order for the
/// equivalence-class maps of the self-orthogonal search.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Series {
    offset: usize,
    coeffs: Vec<Gf4>,
}

impl Series {
    /// The zero series: a single `0` coefficient at power 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            offset: 0,
            coeffs: vec![Gf4::ZERO],
        }
    }

    /// The constant series `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Gf4::ONE)
    }

    /// The constant series `c`.
    #[must_use]
    pub fn constant(c: Gf4) -> Self {
        Self {
            offset: 0,
            coeffs: vec![c],
        }
    }

    /// Create a causal series (offset 0) from explicit coefficients,
    /// lowest power first.
    ///
    /// # Errors
    ///
    /// Returns an error if `coeffs` is empty.
    pub fn new(coeffs: Vec<Gf4>) -> Result<Self> {
        Self::with_offset(coeffs, 0)
    }

    /// Create a series from explicit coefficients and a zero offset.
    ///
    /// The window is stored as given; call [`Series::normalize`] to drop
    /// redundant zeros.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset is negative, if `coeffs` is empty, or
    /// if the offset does not point inside the window.
    pub fn with_offset(coeffs: Vec<Gf4>, offset: isize) -> Result<Self> {
        let offset = usize::try_from(offset).map_err(|_| Error::NegativeOffset(offset))?;
        if coeffs.is_empty() {
            return Err(Error::invalid_series("a series needs at least one coefficient"));
        }
        if offset >= coeffs.len() {
            return Err(Error::invalid_series(format!(
                "offset {} is outside a window of {} coefficients",
                offset,
                coeffs.len()
            )));
        }
        Ok(Self { offset, coeffs })
    }

    /// Create an all-zero window of `len` coefficients with the given offset.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Series::with_offset`].
    pub fn zeroed(len: usize, offset: isize) -> Result<Self> {
        Self::with_offset(vec![Gf4::ZERO; len], offset)
    }

    /// Parse a plain symbol string (`0`, `1`, `u`, `v` per coefficient,
    /// lowest power first) with an explicit zero offset.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown symbol or an invalid offset.
    pub fn from_symbols(symbols: &str, offset: isize) -> Result<Self> {
        let coeffs = symbols
            .chars()
            .map(Gf4::from_symbol)
            .collect::<Result<Vec<_>>>()?;
        Self::with_offset(coeffs, offset)
    }

    /// The coefficient window, lowest power first.
    #[must_use]
    pub fn coeffs(&self) -> &[Gf4] {
        &self.coeffs
    }

    /// Index of the degree-0 coefficient inside the window.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always `false`: a series keeps at least one coefficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Lowest stored power.
    #[must_use]
    pub fn min_power(&self) -> isize {
        -(self.offset as isize)
    }

    /// Highest stored power.
    #[must_use]
    pub fn max_power(&self) -> isize {
        self.coeffs.len() as isize - self.offset as isize - 1
    }

    /// Check if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    fn index_of(&self, power: isize) -> Option<usize> {
        let idx = self.offset as isize + power;
        if idx >= 0 && (idx as usize) < self.coeffs.len() {
            Some(idx as usize)
        } else {
            None
        }
    }

    /// Coefficient at `power`, or zero outside the stored window.
    #[must_use]
    pub fn at(&self, power: isize) -> Gf4 {
        self.index_of(power)
            .map_or(Gf4::ZERO, |idx| self.coeffs[idx])
    }

    /// Checked coefficient access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PowerOutOfRange`] outside the stored window.
    pub fn get(&self, power: isize) -> Result<Gf4> {
        self.index_of(power)
            .map(|idx| self.coeffs[idx])
            .ok_or_else(|| self.out_of_range(power))
    }

    /// Overwrite the coefficient at `power`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PowerOutOfRange`] outside the stored window; the
    /// series is left untouched.
    pub fn set(&mut self, power: isize, value: Gf4) -> Result<()> {
        let idx = self.index_of(power).ok_or_else(|| self.out_of_range(power))?;
        self.coeffs[idx] = value;
        Ok(())
    }

    fn out_of_range(&self, power: isize) -> Error {
        Error::PowerOutOfRange {
            power,
            min: self.min_power(),
            max: self.max_power(),
        }
    }

    /// Drop redundant zeros at both ends of the window. Idempotent.
    pub fn normalize(&mut self) -> &mut Self {
        if self.coeffs.len() == 1 {
            return self;
        }

        let leading = self
            .coeffs
            .iter()
            .take(self.offset)
            .take_while(|c| c.is_zero())
            .count();
        if leading > 0 {
            self.coeffs.drain(..leading);
            self.offset -= leading;
        }

        while self.coeffs.len() > self.offset + 1 && self.coeffs.last().is_some_and(|c| c.is_zero())
        {
            self.coeffs.pop();
        }
        self
    }

    /// Consuming form of [`Series::normalize`].
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// The formal reciprocal `s(x⁻¹)`: the window is mirrored around power 0.
    ///
    /// This is not a multiplicative inverse.
    #[must_use]
    pub fn reciprocal(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self {
            offset: self.coeffs.len() - 1 - self.offset,
            coeffs,
        }
        .normalized()
    }

    /// Coefficientwise Frobenius conjugation; the offset is unchanged.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            offset: self.offset,
            coeffs: self.coeffs.iter().map(|c| c.conj()).collect(),
        }
    }

    /// Evaluate the series as encoder taps over a shift-register content.
    ///
    /// `state` holds the register with the most recent symbol last; the
    /// newest symbol is weighted by the degree-0 coefficient, the one before
    /// it by the degree-1 coefficient, and so on.
    #[must_use]
    pub fn inner_product(&self, state: &[Gf4]) -> Gf4 {
        state
            .iter()
            .rev()
            .enumerate()
            .map(|(power, &x)| x * self.at(power as isize))
            .sum()
    }

    /// The conjugate-reciprocal product `conj(s(x⁻¹))·other(x)`.
    ///
    /// Summed over the output positions of two codes this is the
    /// orthogonality form; with `other == self` it is the self-orthogonality
    /// signature.
    #[must_use]
    pub fn dual_product(&self, other: &Series) -> Series {
        &self.reciprocal().conjugate() * other
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Gf4> for Series {
    fn from(c: Gf4) -> Self {
        Self::constant(c)
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Series({self})")
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if i == self.offset && self.offset != 0 {
                write!(f, "({c})")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Series {
    type Err = Error;

    /// Parse the [`Display`](fmt::Display) form: one symbol per coefficient,
    /// with the degree-0 coefficient optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self> {
        let mut coeffs = Vec::with_capacity(s.len());
        let mut offset = None;
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '(' {
                let marked = chars.next().ok_or_else(|| Error::InvalidSymbol(s.to_string()))?;
                if chars.next() != Some(')') || offset.is_some() {
                    return Err(Error::InvalidSymbol(s.to_string()));
                }
                offset = Some(coeffs.len());
                coeffs.push(Gf4::from_symbol(marked)?);
            } else {
                coeffs.push(Gf4::from_symbol(c)?);
            }
        }
        Self::with_offset(coeffs, offset.unwrap_or(0) as isize)
    }
}

impl TryFrom<String> for Series {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Series> for String {
    fn from(s: Series) -> String {
        s.to_string()
    }
}

impl Add<&Series> for &Series {
    type Output = Series;

    fn add(self, rhs: &Series) -> Series {
        let lo = self.min_power().min(rhs.min_power());
        let hi = self.max_power().max(rhs.max_power());
        Series {
            offset: (-lo) as usize,
            coeffs: (lo..=hi).map(|p| self.at(p) + rhs.at(p)).collect(),
        }
        .normalized()
    }
}

impl Add for Series {
    type Output = Series;

    fn add(self, rhs: Series) -> Series {
        &self + &rhs
    }
}

impl Mul<&Series> for &Series {
    type Output = Series;

    fn mul(self, rhs: &Series) -> Series {
        let mut coeffs = vec![Gf4::ZERO; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Series {
            offset: self.offset + rhs.offset,
            coeffs,
        }
        .normalized()
    }
}

impl Mul for Series {
    type Output = Series;

    fn mul(self, rhs: Series) -> Series {
        &self * &rhs
    }
}

impl iter::Sum for Series {
    fn sum<I: Iterator<Item = Series>>(iter: I) -> Series {
        iter.fold(Series::zero(), |acc, s| &acc + &s)
    }
}
