//! Orthogonal complement construction strategies.
//!
//! Given a rate k/n code, these strategies produce a rate (n−k)/n code whose
//! every input stream is orthogonal to every input stream of the original.
//!
//! ## Available Strategies
//!
//! | Strategy | Method | Requirements |
//! |-------------|------------|--------------|
//! | [`LinearSolve`] | Gaussian elimination over GF(4) | valid code, k < n |
//! | [`BruteForce`] | enumerate candidates with [`CodeGenerator`] | valid code, k = 1, k < n |
//!
//! ## Usage
//!
//! All strategies implement the [`Complement`] trait:
//!
//! ```
//! use gf4codes::construct::{Complement, LinearSolve};
//! use gf4codes::Code;
//!
//! let code: Code = "1|1".parse().unwrap();
//! let dual = LinearSolve.complement(&code).expect("construction failed");
//!
//! assert_eq!(dual.k(), 1);
//! assert!(code.is_orthogonal(&dual).unwrap());
//! ```
//!
//! ## Choosing a Strategy
//!
//! - [`LinearSolve`] runs in polynomial time and handles any k < n
//! - [`BruteForce`] is exponential in `n·(ν+1)` but returns the first
//!   complement in enumeration order, which is useful as a reference

mod brute_force;
mod solver;

pub use brute_force::{BruteForce, CodeGenerator};
pub use solver::{LinearSolve, OrthogonalSolver};

use crate::code::Code;
use crate::error::{Error, Result};

/// Trait for orthogonal complement strategies.
pub trait Complement: Send + Sync {
    /// Get the name of this strategy.
    fn name(&self) -> &'static str;

    /// Construct a rate (n−k)/n code orthogonal to `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` fails validation or has `k >= n`
    /// - the strategy does not support the code's rate
    /// - no complement is found
    fn complement(&self, code: &Code) -> Result<Code>;
}

/// Checks shared by every strategy.
pub(crate) fn check_complementable(code: &Code, algorithm: &'static str) -> Result<()> {
    if !code.validate() {
        return Err(Error::invalid_code(format!(
            "{algorithm} needs causal generators numbering exactly n·k"
        )));
    }
    if code.k() == 0 || code.k() >= code.n() {
        return Err(Error::invalid_params(format!(
            "{algorithm} needs 0 < k < n, got k = {} and n = {}",
            code.k(),
            code.n()
        )));
    }
    Ok(())
}
