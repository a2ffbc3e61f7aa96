//! The GF(4) element type.
//!
//! `Gf4` is a plain `Copy` value wrapping a `u8` in `0..4`. All arithmetic is
//! performed through the lookup tables in [`super::tables`], so no operation
//! can produce a value outside the field.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::tables::{ADD, CONJ, MUL, ORDER, SYMBOLS, TRACE};
use crate::error::{Error, Result};

/// An element of GF(4) = {0, 1, u, v}.
///
/// # Example
///
/// ```
/// use gf4codes::gf::Gf4;
///
/// let u: Gf4 = "u".parse().unwrap();
/// assert_eq!(u * u, Gf4::V);
/// assert_eq!(u + Gf4::ONE, Gf4::V);
/// assert_eq!(u.conj(), Gf4::V);
/// assert_eq!(u.trace(), 1);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "u8"))]
#[repr(transparent)]
pub struct Gf4(u8);

impl Gf4 {
    /// The additive identity.
    pub const ZERO: Self = Self(0);
    /// The multiplicative identity.
    pub const ONE: Self = Self(1);
    /// A primitive element, root of `x² + x + 1`.
    pub const U: Self = Self(2);
    /// `u² = u + 1`, the conjugate of `u`.
    pub const V: Self = Self(3);

    /// Create an element from its raw code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `value` is not in `0..4`.
    pub fn new(value: u8) -> Result<Self> {
        if (value as usize) < ORDER {
            Ok(Self(value))
        } else {
            Err(Error::InvalidValue(i64::from(value)))
        }
    }

    /// Parse a single-character symbol (`0`, `1`, `u` or `v`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] for any other character.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|i| Self(i as u8))
            .ok_or_else(|| Error::InvalidSymbol(symbol.to_string()))
    }

    /// Get the raw code of this element.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the canonical symbol of this element.
    #[must_use]
    pub const fn symbol(self) -> char {
        SYMBOLS[self.0 as usize]
    }

    /// Check if this element is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if this element is one.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }

    /// Field addition. Every element is its own additive inverse.
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self(ADD[self.0 as usize][rhs.0 as usize])
    }

    /// Field multiplication.
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        Self(MUL[self.0 as usize][rhs.0 as usize])
    }

    /// Absolute trace to GF(2): 0 for {0, 1}, 1 for {u, v}.
    #[must_use]
    pub const fn trace(self) -> u8 {
        TRACE[self.0 as usize]
    }

    /// Frobenius conjugation `x ↦ x²`, swapping `u` and `v`.
    #[must_use]
    pub const fn conj(self) -> Self {
        Self(CONJ[self.0 as usize])
    }

    /// Checked multiplicative inverse.
    ///
    /// In GF(4) every unit satisfies `x³ = 1`, so the inverse is the
    /// conjugate. Returns `None` for zero.
    #[must_use]
    pub const fn checked_inv(self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.conj())
        }
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if called on zero.
    #[must_use]
    pub fn inv(self) -> Self {
        assert!(!self.is_zero(), "cannot compute inverse of zero");
        self.conj()
    }

    /// The next element in code order, wrapping `v` back to `0`.
    ///
    /// This is the digit step of the mixed-radix counters used by the
    /// enumerators.
    #[must_use]
    pub const fn succ(self) -> Self {
        Self((self.0 + 1) % ORDER as u8)
    }

    /// Iterate over all elements in code order.
    pub fn elements() -> impl Iterator<Item = Self> {
        (0..ORDER as u8).map(Self)
    }

    /// Iterate over all non-zero elements in code order.
    pub fn units() -> impl Iterator<Item = Self> {
        (1..ORDER as u8).map(Self)
    }
}

impl fmt::Debug for Gf4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(4)[{}]", self.symbol())
    }
}

impl fmt::Display for Gf4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Gf4 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c).map_err(|_| Error::InvalidSymbol(s.to_string())),
            _ => Err(Error::InvalidSymbol(s.to_string())),
        }
    }
}

impl TryFrom<char> for Gf4 {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Self::from_symbol(symbol)
    }
}

impl TryFrom<i32> for Gf4 {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|&v| (v as usize) < ORDER)
            .map(Self)
            .ok_or(Error::InvalidValue(i64::from(value)))
    }
}

impl From<Gf4> for u8 {
    fn from(x: Gf4) -> Self {
        x.0
    }
}

impl PartialEq<u8> for Gf4 {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for Gf4 {
    fn eq(&self, other: &str) -> bool {
        other.parse::<Gf4>().map_or(false, |x| x == *self)
    }
}

impl PartialEq<&str> for Gf4 {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

// Implement standard operators
impl std::ops::Add for Gf4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Gf4::add(self, rhs)
    }
}

impl std::ops::Sub for Gf4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Gf4::add(self, rhs)
    }
}

impl std::ops::Mul for Gf4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Gf4::mul(self, rhs)
    }
}

impl std::ops::Neg for Gf4 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self
    }
}

impl std::ops::AddAssign for Gf4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Gf4::add(*self, rhs);
    }
}

impl std::ops::MulAssign for Gf4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Gf4::mul(*self, rhs);
    }
}

impl std::iter::Sum for Gf4 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Gf4::add)
    }
}
