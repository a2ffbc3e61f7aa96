//! Brute-force complement search.
//!
//! [`CodeGenerator`] enumerates every candidate rate k/n code whose rows use
//! a total degree budget ν:
//!
//! 1. **Degree split**: every ordered k-tuple of row window lengths summing
//!    to ν + k (a composition of ν + k into k positive parts).
//! 2. **Coefficients**: for a fixed split, a GF(4) counter over the
//!    `n·(ν + k)` coefficient slots, laid out row by row and, within a row,
//!    output stream by output stream.
//!
//! A candidate is skipped when one of its rows has a zero top coefficient in
//! every output stream: that row's true degree is below its split, and the
//! same code is produced again under a smaller split.
//!
//! [`BruteForce`] pulls candidates in order and returns the first one that
//! is orthogonal to the input code.

use tracing::debug;

use super::{check_complementable, Complement};
use crate::code::Code;
use crate::error::{Error, Result};
use crate::gf::Gf4;
use crate::series::Series;
use crate::utils::{compositions, odometer_step_rev};

/// Enumerator over candidate rate k/n codes with degree budget ν.
///
/// # Example
///
/// ```
/// use gf4codes::construct::CodeGenerator;
///
/// // rate 1/2, constant generators: the 15 non-zero pairs over GF(4)
/// let candidates: Vec<_> = CodeGenerator::new(2, 1, 0).collect();
/// assert_eq!(candidates.len(), 15);
/// assert_eq!(candidates[0].to_string(), "0|1");
/// ```
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    n: usize,
    k: usize,
    splits: Vec<Vec<usize>>,
    split: usize,
    counter: Vec<Gf4>,
}

impl CodeGenerator {
    /// Create an enumerator for rate k/n codes with degree budget `nu`.
    #[must_use]
    pub fn new(n: usize, k: usize, nu: usize) -> Self {
        Self {
            n,
            k,
            splits: compositions(nu + k, k),
            split: 0,
            counter: vec![Gf4::ZERO; n * (nu + k)],
        }
    }

    /// Create an enumerator restricted to one degree split: row `i` gets a
    /// window of `split[i]` coefficients, and k is `split.len()`.
    #[must_use]
    pub fn with_split(n: usize, split: Vec<usize>) -> Self {
        let width: usize = split.iter().sum();
        Self {
            n,
            k: split.len(),
            splits: vec![split],
            split: 0,
            counter: vec![Gf4::ZERO; n * width],
        }
    }

    /// The degree splits (row window lengths) this enumerator walks through.
    #[must_use]
    pub fn splits(&self) -> &[Vec<usize>] {
        &self.splits
    }

    fn is_finished(&self) -> bool {
        self.split >= self.splits.len()
    }

    /// Whether every row of the current candidate reaches its assigned
    /// degree in at least one output stream.
    fn degree_is_exact(&self) -> bool {
        let mut start = 0;
        self.splits[self.split].iter().all(|&len| {
            let row = &self.counter[start..start + self.n * len];
            start += self.n * len;
            row.chunks(len).any(|window| window.last().is_some_and(|c| !c.is_zero()))
        })
    }

    fn candidate(&self) -> Result<Code> {
        let mut generators = Vec::with_capacity(self.n * self.k);
        let mut start = 0;
        for &len in &self.splits[self.split] {
            for _ in 0..self.n {
                let window = self.counter[start..start + len].to_vec();
                start += len;
                generators.push(Series::new(window)?.normalized());
            }
        }
        Ok(Code::from_generators(generators, self.n, self.k))
    }

    fn advance(&mut self) {
        if !odometer_step_rev(&mut self.counter) {
            self.split += 1;
        }
    }
}

impl Iterator for CodeGenerator {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        while !self.is_finished() {
            let candidate = if self.degree_is_exact() {
                self.candidate().ok()
            } else {
                None
            };
            self.advance();
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}

/// Exhaustive complement search for rate 1/n codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Complement for BruteForce {
    fn name(&self) -> &'static str {
        "BruteForce"
    }

    fn complement(&self, code: &Code) -> Result<Code> {
        if code.k() != 1 {
            return Err(Error::UnsupportedRate {
                k: code.k(),
                operation: "find_orthogonal_brute_force",
            });
        }
        check_complementable(code, self.name())?;

        let nu = code.max_size(0)?.saturating_sub(1);
        let mut examined = 0usize;
        for candidate in CodeGenerator::new(code.n(), code.n() - code.k(), nu) {
            examined += 1;
            if code.is_orthogonal(&candidate)? {
                debug!(examined, nu, "brute-force complement found");
                return Ok(candidate);
            }
        }

        Err(Error::construction_failed(format!(
            "no orthogonal code with degree budget {nu} among {examined} candidates"
        )))
    }
}
