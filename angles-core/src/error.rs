//! Error types for angle construction, arithmetic, and parsing.

use crate::variant::Notation;
use core::num::ParseFloatError;
use thiserror::Error;

/// Result type for fallible angle operations.
pub type Result<T> = core::result::Result<T, AngleError>;

/// Errors raised by the angle family.
///
/// Each variant maps onto one [`ErrorKind`], which is what callers (and any host-language binding) should branch on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    /// A value fell outside the `[minimum, maximum]` range of a range-limited angle.
    #[error("{value} is outside the range [{minimum}, {maximum}]")]
    Range {
        /// The rejected value.
        value: f64,
        /// Lower bound in force.
        minimum: f64,
        /// Upper bound in force.
        maximum: f64,
    },

    /// Division by an angle whose value is exactly zero.
    #[error("division by zero is undefined")]
    DivideByZero,

    /// A textual component could not be read as a number.
    #[error("invalid {component}: {source}")]
    InvalidArgument {
        /// Which component failed (`"degrees"`, `"minutes"`, `"seconds"`, ...).
        component: &'static str,
        /// Underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// A component parsed as NaN or an infinity.
    #[error("{component} is not a finite number")]
    NonFinite {
        /// Which component was not finite.
        component: &'static str,
    },

    /// A rendered angle string did not follow the expected notation.
    #[error("input does not follow {notation} notation")]
    InvalidFormat {
        /// Notation the parser expected.
        notation: Notation,
    },
}

/// Coarse classification of [`AngleError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out-of-range construction, mutation, or arithmetic result.
    Range,
    /// Division by a zero-valued angle.
    DivideByZero,
    /// Non-numeric or malformed input.
    InvalidArgument,
}

impl AngleError {
    /// The kind of failure, independent of its payload.
    ///
    /// ```rust
    /// use angles_core::{Declination, ErrorKind};
    /// let err = Declination::new(91.0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Range);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            AngleError::Range { .. } => ErrorKind::Range,
            AngleError::DivideByZero => ErrorKind::DivideByZero,
            AngleError::InvalidArgument { .. }
            | AngleError::NonFinite { .. }
            | AngleError::InvalidFormat { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn parse_component(component: &'static str, text: &str) -> Result<f64> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|source| AngleError::InvalidArgument { component, source })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(AngleError::NonFinite { component })
        }
    }
}
