//! Errors raised by the arithmetic library.

use thiserror::Error;

/// Errors that can occur while computing or parsing values.
///
/// All variants are raised by the pure functions in [`crate::math`] and
/// surfaced unchanged through the calculator's operations. None of them is
/// fatal: the calculator state is left untouched and remains usable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    /// Binary divide with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A unary function was applied outside its mathematical domain,
    /// e.g. the square root of a negative number.
    #[error("{operation} is undefined for {value}")]
    Domain {
        /// Human-readable name of the offending function
        operation: &'static str,
        /// The input that fell outside the domain
        value: f64,
    },

    /// The display string failed to parse as a finite number.
    ///
    /// Normal operation never produces a malformed display, so this is a
    /// defensive variant.
    #[error("cannot parse {input:?} as a number")]
    Parse {
        /// The string that failed to parse
        input: String,
    },

    /// A computation produced a non-finite result (overflow to infinity
    /// or an indeterminate form). The display only ever holds finite
    /// numbers, so such results are rejected rather than rendered.
    #[error("{operation} produced a result too large to display")]
    Overflow {
        /// Human-readable name of the offending computation
        operation: &'static str,
    },
}
