//! Builder for orthogonal complements.
//!
//! The builder picks a construction strategy and optionally re-checks the
//! result, so callers do not have to know which algorithm applies to which
//! rate.
//!
//! # Example
//!
//! ```
//! use gf4codes::{Code, ComplementBuilder, Strategy};
//!
//! let code: Code = "11|1u".parse().unwrap();
//!
//! // Linear solve, verified (the default)
//! let dual = ComplementBuilder::new().build(&code).unwrap();
//! assert!(code.is_orthogonal(&dual).unwrap());
//!
//! // First complement in enumeration order
//! let dual = ComplementBuilder::new()
//!     .strategy(Strategy::BruteForce)
//!     .build(&code)
//!     .unwrap();
//! assert_eq!(dual.to_string(), "1u|uu");
//! ```
//!
//! # Strategy Selection
//!
//! - **`LinearSolve`**: any valid code with k < n
//! - **`BruteForce`**: rate 1/n only, exponential in the code memory
//! - **`Auto`**: `LinearSolve`, falling back to `BruteForce` for rate 1/n
//!   codes when the solved complement does not verify

use std::fmt;

use tracing::{debug, warn};

use crate::code::Code;
use crate::construct::{BruteForce, Complement, LinearSolve};
use crate::error::{Error, Result};

/// Complement construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Solve, then fall back to enumeration if needed.
    #[default]
    Auto,
    /// Gaussian elimination over GF(4).
    LinearSolve,
    /// Exhaustive enumeration.
    BruteForce,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "Auto",
            Self::LinearSolve => LinearSolve.name(),
            Self::BruteForce => BruteForce.name(),
        };
        f.pad(name)
    }
}

/// Builder for orthogonal complements.
#[derive(Debug, Clone)]
pub struct ComplementBuilder {
    strategy: Strategy,
    verify: bool,
}

impl Default for ComplementBuilder {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            verify: true,
        }
    }
}

impl ComplementBuilder {
    /// Create a builder with the `Auto` strategy and verification on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the construction strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Re-check orthogonality of the result before returning it.
    #[must_use]
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Construct the orthogonal complement of `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` fails validation or has `k >= n`
    /// - `BruteForce` is requested for a code with `k != 1`
    /// - verification is on and the result is not orthogonal to `code`
    pub fn build(&self, code: &Code) -> Result<Code> {
        match self.strategy {
            Strategy::LinearSolve => self.run(&LinearSolve, code),
            Strategy::BruteForce => self.run(&BruteForce, code),
            Strategy::Auto => match self.run(&LinearSolve, code) {
                Err(Error::VerificationFailed { message }) if code.k() == 1 => {
                    warn!(%message, "linear solve did not verify, enumerating instead");
                    self.run(&BruteForce, code)
                }
                other => other,
            },
        }
    }

    fn run(&self, algorithm: &dyn Complement, code: &Code) -> Result<Code> {
        let dual = algorithm.complement(code)?;
        debug!(strategy = algorithm.name(), %code, %dual, "complement constructed");

        if self.verify && !code.is_orthogonal(&dual)? {
            return Err(Error::verification_failed(format!(
                "{} produced {dual}, which is not orthogonal to {code}",
                algorithm.name()
            )));
        }
        Ok(dual)
    }
}

/// Convenience function: the verified complement with the `Auto` strategy.
///
/// # Example
///
/// ```
/// use gf4codes::{complement, Code};
///
/// let code: Code = "1|1".parse().unwrap();
/// assert_eq!(complement(&code).unwrap().to_string(), "1|1");
/// ```
///
/// # Errors
///
/// Same conditions as [`ComplementBuilder::build`].
pub fn complement(code: &Code) -> Result<Code> {
    ComplementBuilder::new().build(code)
}

/// Strategies that accept `code`.
///
/// # Example
///
/// ```
/// use gf4codes::{available_strategies, Code, Strategy};
///
/// let code: Code = "1|0|1||0|1|1".parse().unwrap();
/// assert_eq!(available_strategies(&code), vec![Strategy::Auto, Strategy::LinearSolve]);
/// ```
#[must_use]
pub fn available_strategies(code: &Code) -> Vec<Strategy> {
    if !code.validate() || code.k() == 0 || code.k() >= code.n() {
        return Vec::new();
    }
    let mut options = vec![Strategy::Auto, Strategy::LinearSolve];
    if code.k() == 1 {
        options.push(Strategy::BruteForce);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    #[test]
    fn test_builder_default() {
        let builder = ComplementBuilder::new();
        assert_eq!(builder.strategy, Strategy::Auto);
        assert!(builder.verify);
    }

    #[test]
    fn test_builder_auto_uses_solver() {
        let c = code("11|1u");
        let auto = ComplementBuilder::new().build(&c).unwrap();
        let solved = c.find_orthogonal().unwrap();
        assert_eq!(auto, solved);
        assert!(c.is_orthogonal(&auto).unwrap());
    }

    #[test]
    fn test_builder_brute_force() {
        let dual = ComplementBuilder::new()
            .strategy(Strategy::BruteForce)
            .build(&code("11|1u"))
            .unwrap();
        assert_eq!(dual.to_string(), "1u|uu");
    }

    #[test]
    fn test_builder_unverified() {
        let dual = ComplementBuilder::new()
            .strategy(Strategy::LinearSolve)
            .verify(false)
            .build(&code("1|1"))
            .unwrap();
        assert_eq!(dual.to_string(), "1|1");
    }

    #[test]
    fn test_builder_higher_rate() {
        let c = code("1u|0|11||0|1v|u");
        let dual = ComplementBuilder::new().build(&c).unwrap();
        assert_eq!(dual.k(), 1);

        let result = ComplementBuilder::new()
            .strategy(Strategy::BruteForce)
            .build(&c);
        assert!(matches!(result, Err(Error::UnsupportedRate { k: 2, .. })));
    }

    #[test]
    fn test_builder_invalid_code() {
        assert!(ComplementBuilder::new().build(&code("u(1)|1")).is_err());
        assert!(ComplementBuilder::new().build(&code("1")).is_err());
    }

    #[test]
    fn test_complement_convenience() {
        let c = code("11|11|1u");
        let dual = complement(&c).unwrap();
        assert_eq!((dual.n(), dual.k()), (3, 2));
        assert!(c.is_orthogonal(&dual).unwrap());
    }

    #[test]
    fn test_available_strategies() {
        assert_eq!(
            available_strategies(&code("1|1")),
            vec![Strategy::Auto, Strategy::LinearSolve, Strategy::BruteForce]
        );
        assert!(available_strategies(&code("1")).is_empty());
        assert!(available_strategies(&code("u(1)|1")).is_empty());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Auto.to_string(), "Auto");
        assert_eq!(Strategy::LinearSolve.to_string(), "LinearSolve");
        assert_eq!(Strategy::BruteForce.to_string(), "BruteForce");
    }
}
