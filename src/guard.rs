//! Argument validation shared by every function in [`query`](crate::query).
//!
//! A Rust reference can never be null, so an *absent* argument is modeled as
//! [`None`]. [`require`] turns it into an [`ArgumentMissing`] error carrying the
//! parameter's name, before any work is done.

use std::fmt::{self, Display};

/// The error returned when a required argument is absent.
///
/// # Examples
///
/// ```
/// use myquery::guard::{ArgumentMissing, require};
///
/// let err = require(None::<&[i32]>, "source").unwrap_err();
///
/// assert_eq!(err, ArgumentMissing::new("source"));
/// assert_eq!(err.parameter(), "source");
/// assert_eq!(err.to_string(), "required argument `source` is missing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentMissing {
    parameter: &'static str,
}

impl ArgumentMissing {
    /// Creates an error for the parameter named `parameter`.
    #[inline]
    pub const fn new(parameter: &'static str) -> Self {
        Self { parameter }
    }

    /// Returns the name of the missing parameter.
    #[inline]
    pub const fn parameter(&self) -> &'static str {
        self.parameter
    }
}

impl Display for ArgumentMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required argument `{}` is missing", self.parameter)
    }
}

impl std::error::Error for ArgumentMissing {}

/// Returns the argument if present, or fails with [`ArgumentMissing`] naming `parameter`.
///
/// Has no side effect in either case.
#[inline]
pub fn require<V>(value: Option<V>, parameter: &'static str) -> Result<V, ArgumentMissing> {
    value.ok_or(ArgumentMissing::new(parameter))
}
