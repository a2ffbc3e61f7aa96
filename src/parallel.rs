//! Parallel search support.
//!
//! This module provides rayon-backed versions of the exhaustive searches.
//! Enable with the `parallel` feature flag.
//!
//! Work is sharded by independent ranges, never by shared mutable maps:
//!
//! - [`ParBruteForce`] runs one [`CodeGenerator`] per degree split and keeps
//!   the first orthogonal candidate in enumeration order, so it returns the
//!   same code as [`BruteForce`].
//! - [`SelfOrthogonalSearch::par_find`] builds the signature classes once,
//!   then searches every first-position signature on its own task.
//!
//! # Usage
//!
//! ```
//! use gf4codes::construct::{BruteForce, Complement};
//! use gf4codes::parallel::ParBruteForce;
//! use gf4codes::Code;
//!
//! let code: Code = "11|1u|1v".parse().unwrap();
//! let dual = ParBruteForce.complement(&code).unwrap();
//! assert_eq!(dual, BruteForce.complement(&code).unwrap());
//! ```
//!
//! # Performance
//!
//! Splitting only helps once there are several degree splits or signature
//! classes; for tiny searches the sequential versions may be faster.

use rayon::prelude::*;
use tracing::debug;

use crate::code::Code;
use crate::construct::{BruteForce, CodeGenerator, Complement};
use crate::error::{Error, Result};
use crate::search::SelfOrthogonalSearch;
use crate::series::Series;
use crate::utils::compositions;

/// Parallel exhaustive complement search for rate 1/n codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParBruteForce;

impl Complement for ParBruteForce {
    fn name(&self) -> &'static str {
        "ParBruteForce"
    }

    fn complement(&self, code: &Code) -> Result<Code> {
        if code.k() != 1 {
            return Err(Error::UnsupportedRate {
                k: code.k(),
                operation: "find_orthogonal_brute_force",
            });
        }
        if !code.validate() || code.n() < 2 {
            // same diagnostics as the sequential search
            return BruteForce.complement(code);
        }

        let n = code.n();
        let other_k = n - 1;
        let nu = code.max_size(0)?.saturating_sub(1);
        let splits = compositions(nu + other_k, other_k);
        let shards = splits.len();

        let found = splits.into_par_iter().find_map_first(|split| {
            CodeGenerator::with_split(n, split)
                .find(|candidate| matches!(code.is_orthogonal(candidate), Ok(true)))
        });
        debug!(shards, nu, found = found.is_some(), "parallel brute-force complement");

        found.ok_or_else(|| {
            Error::construction_failed(format!(
                "no orthogonal code with degree budget {nu} in {shards} degree splits"
            ))
        })
    }
}

impl SelfOrthogonalSearch {
    /// Parallel form of [`SelfOrthogonalSearch::find`], returning the same
    /// codes in the same order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SelfOrthogonalSearch::initialize`].
    pub fn par_find(&mut self) -> Result<Vec<Code>> {
        self.initialize()?;
        if self.n() == 1 {
            return self.find();
        }

        let search = &*self;
        let firsts: Vec<&Series> = search.classes().keys().collect();
        let codes: Vec<Code> = firsts
            .into_par_iter()
            .flat_map_iter(|first| search.shard(first))
            .collect();

        debug!(
            n = search.n(),
            degree = search.degree(),
            found = codes.len(),
            "parallel self-orthogonal search"
        );
        Ok(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        text.parse().unwrap()
    }

    #[test]
    fn test_par_brute_force_matches_sequential() {
        for text in ["1|1", "11|1u", "11|1u|1v", "1|u|v"] {
            let c = code(text);
            let par = ParBruteForce.complement(&c).unwrap();
            let seq = BruteForce.complement(&c).unwrap();
            assert_eq!(par, seq, "{text}");
            assert!(c.is_orthogonal(&par).unwrap());
        }
    }

    #[test]
    fn test_par_brute_force_errors() {
        assert!(matches!(
            ParBruteForce.complement(&code("1|0|1||0|1|1")),
            Err(Error::UnsupportedRate { k: 2, .. })
        ));
        assert!(ParBruteForce.complement(&code("u(1)|1")).is_err());
        assert!(ParBruteForce.complement(&code("1")).is_err());
    }

    #[test]
    fn test_par_find_matches_sequential() {
        for (n, degree) in [(1, 1), (2, 1), (3, 1), (2, 2), (3, 2)] {
            let mut seq = SelfOrthogonalSearch::new(n, degree, 1).unwrap();
            let mut par = SelfOrthogonalSearch::new(n, degree, 1).unwrap();
            assert_eq!(par.par_find().unwrap(), seq.find().unwrap(), "n={n} degree={degree}");
        }
    }
}
