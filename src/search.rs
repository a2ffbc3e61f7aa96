//! Discovery of self-orthogonal rate 1/n codes.
//!
//! Every generator `g` of a rate 1/n code contributes its signature
//! `conj(g(x⁻¹))·g(x)` to the self-orthogonality sum, so the search works on
//! signatures rather than on generators:
//!
//! 1. [`SelfOrthogonalSearch::initialize`] enumerates the monic series of
//!    the requested degree (constant term 1, every other coefficient free)
//!    and groups them by signature.
//! 2. [`SelfOrthogonalSearch::find`] picks a signature for each of the first
//!    n−1 positions. Over GF(4) the last signature must then equal the
//!    running sum, so it only needs a lookup.
//! 3. Each signature tuple that closes is expanded into every combination of
//!    class members.
//!
//! ## Example
//!
//! ```
//! use gf4codes::SelfOrthogonalSearch;
//!
//! let mut search = SelfOrthogonalSearch::new(3, 1, 1).unwrap();
//! let codes = search.find().unwrap();
//!
//! assert_eq!(codes.len(), 6);
//! assert!(codes.iter().all(|c| c.is_self_orthogonal().unwrap()));
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::code::Code;
use crate::error::{Error, Result};
use crate::gf::Gf4;
use crate::series::Series;
use crate::utils::odometer_step_rev;

/// Exhaustive search for self-orthogonal rate 1/n codes of a fixed degree.
#[derive(Debug, Clone)]
pub struct SelfOrthogonalSearch {
    n: usize,
    degree: usize,
    k: usize,
    classes: BTreeMap<Series, Vec<Series>>,
    warm: bool,
}

impl SelfOrthogonalSearch {
    /// Create a search for rate k/n codes whose generators have degree
    /// `degree`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRate`] unless `k = 1`, and
    /// [`Error::InvalidParams`] if `n = 0`.
    pub fn new(n: usize, degree: usize, k: usize) -> Result<Self> {
        if k != 1 {
            return Err(Error::UnsupportedRate {
                k,
                operation: "SelfOrthogonalSearch",
            });
        }
        if n == 0 {
            return Err(Error::invalid_params("a code needs at least one output stream"));
        }
        Ok(Self {
            n,
            degree,
            k,
            classes: BTreeMap::new(),
            warm: false,
        })
    }

    /// Number of output streams.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of input streams (always 1).
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Generator degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Signature classes: each key maps to the series sharing it. Empty
    /// until [`SelfOrthogonalSearch::initialize`] has run.
    #[must_use]
    pub fn classes(&self) -> &BTreeMap<Series, Vec<Series>> {
        &self.classes
    }

    /// Build the signature classes. Does nothing when already built.
    ///
    /// # Errors
    ///
    /// Propagates series construction errors; none occur for the windows
    /// built here.
    pub fn initialize(&mut self) -> Result<()> {
        if self.warm {
            return Ok(());
        }

        let mut coeffs = vec![Gf4::ZERO; self.degree + 1];
        coeffs[0] = Gf4::ONE;
        let mut members = 0usize;
        loop {
            let series = Series::new(coeffs.clone())?.normalized();
            let key = series.dual_product(&series);
            self.classes.entry(key).or_default().push(series);
            members += 1;
            if !odometer_step_rev(&mut coeffs[1..]) {
                break;
            }
        }

        debug!(
            degree = self.degree,
            series = members,
            classes = self.classes.len(),
            "signature classes built"
        );
        self.warm = true;
        Ok(())
    }

    /// Every self-orthogonal rate 1/n code whose generators are monic of
    /// the configured degree, in signature order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SelfOrthogonalSearch::initialize`].
    pub fn find(&mut self) -> Result<Vec<Code>> {
        self.initialize()?;

        let codes = if self.n == 1 {
            let mut out = Vec::new();
            self.generate(&mut Vec::new(), &Series::zero(), &mut out);
            out
        } else {
            self.classes
                .keys()
                .flat_map(|first| self.shard(first))
                .collect()
        };

        debug!(n = self.n, degree = self.degree, found = codes.len(), "self-orthogonal search");
        Ok(codes)
    }

    /// All codes whose first signature is `first`. Needs `n >= 2` and the
    /// classes built.
    pub(crate) fn shard(&self, first: &Series) -> Vec<Code> {
        let mut out = Vec::new();
        let mut keys = vec![first];
        self.generate(&mut keys, first, &mut out);
        out
    }

    fn generate<'a>(&'a self, keys: &mut Vec<&'a Series>, sum: &Series, out: &mut Vec<Code>) {
        if keys.len() + 1 == self.n {
            // the closing signature must cancel the running sum
            if let Some((last, _)) = self.classes.get_key_value(sum) {
                keys.push(last);
                self.expand(keys, &mut Vec::with_capacity(self.n), out);
                keys.pop();
            }
            return;
        }

        for key in self.classes.keys() {
            keys.push(key);
            self.generate(keys, &(sum + key), out);
            keys.pop();
        }
    }

    fn expand(&self, keys: &[&Series], members: &mut Vec<Series>, out: &mut Vec<Code>) {
        let Some(key) = keys.get(members.len()) else {
            out.push(Code::from_generators(members.clone(), self.n, self.k));
            return;
        };
        for member in self.classes.get(*key).into_iter().flatten() {
            members.push(member.clone());
            self.expand(keys, members, out);
            members.pop();
        }
    }
}
