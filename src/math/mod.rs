//! Pure arithmetic for the calculator.
//!
//! Stateless leaves of the crate: binary and unary operations plus the
//! display formatting/parsing helpers. Everything here is deterministic
//! and side-effect free; errors are reported as [`MathError`] values.

mod error;
mod format;
pub mod ops;

pub use error::MathError;
pub use format::{format_number, parse_number};
pub use ops::Operation;
