//! Error types for the gf4codes library.
//!
//! This module provides error handling using the `thiserror` crate. The
//! variants fall into three groups: out-of-range access, invalid arguments
//! (malformed symbols, bad offsets) and precondition violations (unsupported
//! rates, mismatched codes, invalid codes).

use thiserror::Error;

/// The main error type for the gf4codes library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Out-of-range Errors ============
    /// Generator index is out of bounds.
    #[error("index {index} is out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// The number of available items.
        size: usize,
    },

    /// Series power lies outside the stored coefficient window.
    #[error("power {power} is outside the coefficient window [{min}, {max}]")]
    PowerOutOfRange {
        /// The requested power.
        power: isize,
        /// Lowest stored power.
        min: isize,
        /// Highest stored power.
        max: isize,
    },

    // ============ Invalid Argument Errors ============
    /// A symbol that is not one of `0`, `1`, `u`, `v`.
    #[error("unrecognized GF(4) symbol {0:?}")]
    InvalidSymbol(String),

    /// A raw element code outside `0..=3`.
    #[error("value {0} is out of range for GF(4), must be in 0..4")]
    InvalidValue(i64),

    /// A series was given a negative zero offset.
    #[error("negative zero offset {0}")]
    NegativeOffset(isize),

    /// A series could not be built from the given window.
    #[error("invalid series: {message}")]
    InvalidSeries {
        /// Description of what is invalid.
        message: String,
    },

    /// Invalid parameters for a code, enumerator or search.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Precondition Errors ============
    /// The operation is only implemented for rate 1/n codes.
    #[error("{operation} is not implemented for k = {k} (requires k = 1)")]
    UnsupportedRate {
        /// The number of input streams of the offending code.
        k: usize,
        /// Name of the operation.
        operation: &'static str,
    },

    /// Two codes disagree on the number of output streams.
    #[error("codes have different n: expected {expected}, got {actual}")]
    LengthMismatch {
        /// n of the receiving code.
        expected: usize,
        /// n of the other code.
        actual: usize,
    },

    /// The code does not pass validation.
    #[error("invalid code: {message}")]
    InvalidCode {
        /// Description of why the code is invalid.
        message: String,
    },

    /// Construction of a complementary code failed.
    #[error("construction failed: {message}")]
    ConstructionFailed {
        /// Description of why construction failed.
        message: String,
    },

    /// A constructed code did not have the claimed property.
    #[error("verification failed: {message}")]
    VerificationFailed {
        /// Description of what verification failed.
        message: String,
    },
}

/// A specialized `Result` type for gf4codes operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a new `InvalidSeries` error.
    #[must_use]
    pub fn invalid_series(message: impl Into<String>) -> Self {
        Self::InvalidSeries {
            message: message.into(),
        }
    }

    /// Create a new `InvalidCode` error.
    #[must_use]
    pub fn invalid_code(message: impl Into<String>) -> Self {
        Self::InvalidCode {
            message: message.into(),
        }
    }

    /// Create a new `ConstructionFailed` error.
    #[must_use]
    pub fn construction_failed(message: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            message: message.into(),
        }
    }

    /// Create a new `VerificationFailed` error.
    #[must_use]
    pub fn verification_failed(message: impl Into<String>) -> Self {
        Self::VerificationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSymbol("x".to_string());
        assert!(err.to_string().contains("\"x\""));

        let err = Error::PowerOutOfRange {
            power: 5,
            min: -1,
            max: 2,
        };
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains("[-1, 2]"));

        let err = Error::UnsupportedRate {
            k: 2,
            operation: "is_self_orthogonal",
        };
        assert!(err.to_string().contains("k = 2"));
        assert!(err.to_string().contains("is_self_orthogonal"));

        let err = Error::LengthMismatch {
            expected: 3,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 3, got 4"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::NegativeOffset(-1);
        let err2 = Error::NegativeOffset(-1);
        let err3 = Error::NegativeOffset(-2);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
        assert_eq!(
            Error::invalid_code("bad"),
            Error::InvalidCode {
                message: "bad".into()
            }
        );
    }
}
