//! Convolutional codes over GF(4).
//!
//! A rate k/n code is described by `k·n` generator series arranged as a
//! k×n matrix, stored row-major by input stream: generator `i·n + j` maps
//! input stream `i` to output stream `j`.
//!
//! ## Overview
//!
//! - [`Code::validate`]: causal generators and a full generator matrix
//! - [`Code::is_self_orthogonal`] / [`Code::is_orthogonal`]: the
//!   conjugate-reciprocal orthogonality tests
//! - [`Code::min_distance`]: free distance via a shortest-path search over
//!   the encoder trellis (see [`distance`])
//! - [`Code::find_orthogonal`] / [`Code::find_orthogonal_brute_force`]:
//!   orthogonal complements (see [`crate::construct`])
//!
//! ## Example
//!
//! ```
//! use gf4codes::Code;
//!
//! let code: Code = "11|1u".parse().unwrap();
//! assert_eq!((code.n(), code.k()), (2, 1));
//! assert!(code.validate());
//! assert_eq!(code.min_distance().unwrap(), 4);
//! assert_eq!(code.to_string(), "11|1u");
//! ```

pub mod distance;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::construct::{BruteForce, Complement, LinearSolve};
use crate::error::{Error, Result};
use crate::series::Series;

/// A rate k/n convolutional encoder over GF(4).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Code {
    n: usize,
    k: usize,
    generators: Vec<Series>,
}

impl Code {
    /// Create a code with no generators yet.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            generators: Vec::with_capacity(n * k),
        }
    }

    /// Create a code from its generators, stored row-major by input stream.
    ///
    /// The generator count is not checked here; see [`Code::validate`].
    #[must_use]
    pub fn from_generators(generators: Vec<Series>, n: usize, k: usize) -> Self {
        Self { n, k, generators }
    }

    /// Number of output streams.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of input streams.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// All generators, row-major by input stream.
    #[must_use]
    pub fn generators(&self) -> &[Series] {
        &self.generators
    }

    /// Consume the code, returning its generators.
    #[must_use]
    pub fn into_generators(self) -> Vec<Series> {
        self.generators
    }

    /// Get the generator at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such generator.
    pub fn get(&self, index: usize) -> Result<&Series> {
        self.generators.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: self.generators.len(),
        })
    }

    /// Replace the generator at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such generator.
    pub fn set(&mut self, index: usize, generator: Series) -> Result<()> {
        let size = self.generators.len();
        let slot = self
            .generators
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, size })?;
        *slot = generator;
        Ok(())
    }

    /// Append a generator.
    pub fn add(&mut self, generator: Series) {
        self.generators.push(generator);
    }

    /// Remove and return the generator at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such generator;
    /// the code is left untouched.
    pub fn remove(&mut self, index: usize) -> Result<Series> {
        if index >= self.generators.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.generators.len(),
            });
        }
        Ok(self.generators.remove(index))
    }

    /// Check that every generator is causal (offset 0) and that there are
    /// exactly `n·k` of them.
    #[must_use]
    pub fn validate(&self) -> bool {
        self.generators
            .iter()
            .all(|g| g.offset() == 0 && !g.is_empty())
            && self.generators.len() == self.n * self.k
    }

    /// The `n` generators driven by input stream `stream`.
    pub(crate) fn row(&self, stream: usize) -> &[Series] {
        let start = (stream * self.n).min(self.generators.len());
        let end = ((stream + 1) * self.n).min(self.generators.len());
        &self.generators[start..end]
    }

    /// Largest coefficient-window length among the generators of one input
    /// stream, i.e. that stream's shift-register length plus one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `stream >= k`.
    pub fn max_size(&self, stream: usize) -> Result<usize> {
        if stream >= self.k {
            return Err(Error::IndexOutOfBounds {
                index: stream,
                size: self.k,
            });
        }
        Ok(self.row(stream).iter().map(Series::len).max().unwrap_or(0))
    }

    /// Largest coefficient-window length over all generators.
    #[must_use]
    pub fn max_size_overall(&self) -> usize {
        self.generators.iter().map(Series::len).max().unwrap_or(0)
    }

    fn check_shape(&self) -> Result<()> {
        if self.generators.len() == self.n * self.k {
            Ok(())
        } else {
            Err(Error::invalid_code(format!(
                "expected {}·{} generators, found {}",
                self.n,
                self.k,
                self.generators.len()
            )))
        }
    }

    /// Check whether `Σᵢ conj(gᵢ(x⁻¹))·gᵢ(x)` vanishes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRate`] unless `k = 1`, and
    /// [`Error::InvalidCode`] if the generator count is not `n`.
    pub fn is_self_orthogonal(&self) -> Result<bool> {
        if self.k != 1 {
            return Err(Error::UnsupportedRate {
                k: self.k,
                operation: "is_self_orthogonal",
            });
        }
        self.check_shape()?;
        Ok(self.signature().is_zero())
    }

    /// The self-orthogonality signature `Σᵢ conj(gᵢ(x⁻¹))·gᵢ(x)`, summed over
    /// every generator.
    #[must_use]
    pub fn signature(&self) -> Series {
        self.generators
            .iter()
            .map(|g| g.dual_product(g))
            .sum()
    }

    /// Check whether every input stream of `self` is orthogonal to every
    /// input stream of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the codes have different `n`,
    /// and [`Error::InvalidCode`] if either generator matrix is incomplete.
    pub fn is_orthogonal(&self, other: &Code) -> Result<bool> {
        if self.n != other.n {
            return Err(Error::LengthMismatch {
                expected: self.n,
                actual: other.n,
            });
        }
        self.check_shape()?;
        other.check_shape()?;

        for i in 0..self.k {
            for j in 0..other.k {
                let cross: Series = self
                    .row(i)
                    .iter()
                    .zip(other.row(j))
                    .map(|(a, b)| a.dual_product(b))
                    .sum();
                if !cross.is_zero() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Free distance of the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCode`] if the code fails [`Code::validate`].
    pub fn min_distance(&self) -> Result<u64> {
        distance::free_distance(self)
    }

    /// Construct an orthogonal complement by exhaustive enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRate`] unless `k = 1`.
    pub fn find_orthogonal_brute_force(&self) -> Result<Code> {
        BruteForce.complement(self)
    }

    /// Construct an orthogonal complement by solving a linear system.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is invalid or has `k >= n`.
    pub fn find_orthogonal(&self) -> Result<Code> {
        LinearSolve.complement(self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                if self.n != 0 && i % self.n == 0 {
                    write!(f, "||")?;
                } else {
                    write!(f, "|")?;
                }
            }
            write!(f, "{g}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    /// Parse the [`Display`](fmt::Display) form; `n` and `k` are inferred
    /// from the `|` and `||` separators.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_params("empty code description"));
        }
        let rows = s
            .split("||")
            .map(|row| row.split('|').map(str::parse).collect::<Result<Vec<Series>>>())
            .collect::<Result<Vec<_>>>()?;

        let n = rows[0].len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(Error::invalid_params(format!(
                "every input stream needs {} generators, found {}",
                n,
                bad.len()
            )));
        }
        let k = rows.len();
        Ok(Self::from_generators(rows.into_iter().flatten().collect(), n, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Series {
        text.parse().unwrap()
    }

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_render() {
        let c = code("1u|11||v|0u1");
        assert_eq!(c.n(), 2);
        assert_eq!(c.k(), 2);
        assert_eq!(c.generators()[3], s("0u1"));
        assert_eq!(c.to_string(), "1u|11||v|0u1");

        assert!("1|1||1".parse::<Code>().is_err());
        assert!("".parse::<Code>().is_err());
        assert!("1|x".parse::<Code>().is_err());
    }

    #[test]
    fn test_generator_access() {
        let mut c = Code::new(2, 1);
        c.add(s("1"));
        c.add(s("1u"));
        assert_eq!(c.get(1), Ok(&s("1u")));
        assert_eq!(
            c.get(2),
            Err(Error::IndexOutOfBounds { index: 2, size: 2 })
        );

        c.set(0, s("v")).unwrap();
        assert_eq!(c.get(0), Ok(&s("v")));
        assert!(c.set(5, s("1")).is_err());

        assert!(c.remove(2).is_err());
        assert_eq!(c.generators().len(), 2);
        assert_eq!(c.remove(0), Ok(s("v")));
        assert_eq!(c.generators(), &[s("1u")]);
    }

    #[test]
    fn test_validate() {
        assert!(code("1|1").validate());
        assert!(!code("1|u(1)").validate());

        let mut c = Code::new(2, 1);
        c.add(s("1"));
        assert!(!c.validate());
        c.add(s("11"));
        assert!(c.validate());
    }

    #[test]
    fn test_max_size() {
        let c = code("1|1uv||11|0");
        assert_eq!(c.max_size(0), Ok(3));
        assert_eq!(c.max_size(1), Ok(2));
        assert!(c.max_size(2).is_err());
        assert_eq!(c.max_size_overall(), 3);
    }

    #[test]
    fn test_self_orthogonal() {
        assert!(code("1|1").is_self_orthogonal().unwrap());
        assert!(!code("1|1|1").is_self_orthogonal().unwrap());
        assert!(code("0|0|0").is_self_orthogonal().unwrap());
        // (1 + x, 1 + x): x⁻¹ + 1 + x twice cancels
        assert!(code("11|11").is_self_orthogonal().unwrap());
        assert!(!code("11|1u").is_self_orthogonal().unwrap());
    }

    #[test]
    fn test_self_orthogonal_requires_rate_one_over_n() {
        assert_eq!(
            code("1|1||1|u").is_self_orthogonal(),
            Err(Error::UnsupportedRate {
                k: 2,
                operation: "is_self_orthogonal"
            })
        );
    }

    #[test]
    fn test_orthogonal() {
        let a = code("1|1");
        assert!(a.is_orthogonal(&a).unwrap());
        assert!(a.is_orthogonal(&code("u|u")).unwrap());
        assert!(!a.is_orthogonal(&code("1|u")).unwrap());
        assert!(!code("1|u").is_orthogonal(&code("1|v")).unwrap());
        assert!(code("0|0").is_orthogonal(&code("1u|v1")).unwrap());
    }

    #[test]
    fn test_orthogonal_rejects_mismatched_n() {
        assert_eq!(
            code("1|1").is_orthogonal(&code("1|1|1")),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_orthogonal_symmetric() {
        let a = code("1u|v1|11");
        let b = code("uv|1|0v");
        assert_eq!(a.is_orthogonal(&b).unwrap(), b.is_orthogonal(&a).unwrap());
    }
}
