//! Error types raised by function values.
//!
//! Absence is not an error: a missing path or an unsuccessful search is
//! reported in-band as [`Value::Absent`](crate::value::Value::Absent). The
//! variants below describe inputs a combinator cannot handle at all.

use thiserror::Error;

/// Errors that can occur while evaluating a function value.
///
/// # Examples
///
/// ```rust
/// use pointfree::Error;
///
/// let error = Error::DivisionByZero { combinator: "Div" };
/// assert_eq!(format!("{error}"), "Div: division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument had a shape the combinator does not accept.
    #[error("{combinator}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the combinator that rejected the argument.
        combinator: &'static str,
        /// Description of the accepted shape.
        expected: &'static str,
        /// Kind of the value that was supplied.
        found: &'static str,
    },

    /// A division or modulo by zero.
    #[error("{combinator}: division by zero")]
    DivisionByZero {
        /// Name of the combinator that divided.
        combinator: &'static str,
    },

    /// Integer arithmetic left the representable range.
    #[error("{combinator}: integer overflow")]
    Overflow {
        /// Name of the combinator that overflowed.
        combinator: &'static str,
    },

    /// A key function produced a value that cannot be used as a record key.
    #[error("{combinator}: cannot use {found} as a record key at `{path}`")]
    InvalidKey {
        /// Name of the combinator that computed the key.
        combinator: &'static str,
        /// Location of the offending record, as a path string.
        path: String,
        /// Kind of the value that was produced.
        found: &'static str,
    },
}

/// Result alias used by every function value.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a [`Error::TypeMismatch`] for `found`.
    pub(crate) fn type_mismatch(
        combinator: &'static str,
        expected: &'static str,
        found: &crate::value::Value,
    ) -> Self {
        Self::TypeMismatch {
            combinator,
            expected,
            found: found.kind(),
        }
    }
}
