//! # gf4codes
//!
//! Convolutional codes over GF(4): construction, verification and search
//! of self-orthogonal and mutually orthogonal codes, the classical building
//! blocks of quantum convolutional codes.
//!
//! ## Overview
//!
//! A rate k/n convolutional code maps k input streams of GF(4) symbols to n
//! output streams. Each input/output pair is connected by a generator, a
//! polynomial over GF(4). This library provides:
//! - GF(4) arithmetic ([`Gf4`]) and truncated Laurent series ([`Series`])
//! - Codes with validation, conjugate-reciprocal orthogonality tests and
//!   free distance ([`Code`])
//! - Orthogonal complement construction by linear solve or exhaustive
//!   enumeration ([`construct`], [`ComplementBuilder`])
//! - Discovery of every self-orthogonal rate 1/n code of a given degree
//!   ([`SelfOrthogonalSearch`])
//!
//! ## Quick Start
//!
//! ```rust
//! use gf4codes::{Code, ComplementBuilder};
//!
//! let code: Code = "11|1u".parse().unwrap();
//! assert!(code.validate());
//! assert_eq!(code.min_distance().unwrap(), 4);
//! assert!(!code.is_self_orthogonal().unwrap());
//!
//! let dual = ComplementBuilder::new().build(&code).unwrap();
//! assert!(code.is_orthogonal(&dual).unwrap());
//! ```
//!
//! Search for self-orthogonal codes directly:
//!
//! ```rust
//! use gf4codes::SelfOrthogonalSearch;
//!
//! let mut search = SelfOrthogonalSearch::new(2, 1, 1).unwrap();
//! for code in search.find().unwrap() {
//!     assert!(code.is_self_orthogonal().unwrap());
//! }
//! ```
//!
//! ## Notation
//!
//! GF(4) = {0, 1, u, v} with u² = v, u·v = 1 and 1 + u = v. Series and codes
//! use a compact text form:
//! - a series lists its coefficients lowest power first, e.g. `1u` is
//!   1 + u·x; the degree-0 coefficient is wrapped in parentheses when
//!   negative powers are present, e.g. `u(1)` is u·x⁻¹ + 1
//! - a code separates the generators of one input stream with `|` and the
//!   input streams with `||`, e.g. `1|0||0|1`
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of `Gf4`, `Series` and `Code`
//! - `parallel`: Enable parallel searches using rayon
//!
//! ## Logging
//!
//! Heavy computations emit [`tracing`] events (`debug` for summaries,
//! `trace` for the solver's matrices). Install a subscriber to see them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod code;
pub mod construct;
pub mod error;
pub mod gf;
pub mod search;
pub mod series;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{available_strategies, complement, ComplementBuilder, Strategy};
    pub use crate::code::Code;
    pub use crate::construct::{BruteForce, CodeGenerator, Complement, LinearSolve, OrthogonalSolver};
    pub use crate::error::{Error, Result};
    pub use crate::gf::Gf4;
    pub use crate::search::SelfOrthogonalSearch;
    pub use crate::series::Series;

    #[cfg(feature = "parallel")]
    pub use crate::parallel::ParBruteForce;
}

// Re-export commonly used items at crate root
pub use builder::{available_strategies, complement, ComplementBuilder, Strategy};
pub use code::Code;
pub use error::{Error, Result};
pub use gf::Gf4;
pub use search::SelfOrthogonalSearch;
pub use series::Series;

#[cfg(feature = "parallel")]
pub use parallel::ParBruteForce;
