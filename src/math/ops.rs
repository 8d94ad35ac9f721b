//! Binary and unary arithmetic operations.
//!
//! All functions here are pure: no state, no side effects. Functions that
//! are total over the reals return `f64` directly; functions with a
//! restricted mathematical domain return `Result` and fail with
//! [`MathError::Domain`] outside it.

use super::error::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary calculator operation.
///
/// # Example
///
/// ```rust
/// use abacus::math::Operation;
///
/// assert_eq!(Operation::Add.apply(5.0, 3.0), Ok(8.0));
/// assert_eq!(Operation::Divide.symbol(), "÷");
/// assert!(Operation::Divide.apply(1.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Display symbol for this operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Fails with [`MathError::DivisionByZero`] when dividing by zero
    /// (division must never silently produce infinity) and with
    /// [`MathError::Overflow`] when the result is not a finite number.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, MathError> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                a / b
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(MathError::Overflow {
                operation: self.symbol(),
            })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `x²`
pub fn square(x: f64) -> f64 {
    x * x
}

/// `x³`
pub fn cube(x: f64) -> f64 {
    x * x * x
}

/// `∛x` (defined for negative inputs as well)
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// `x / 100`
pub fn percentage(x: f64) -> f64 {
    x / 100.0
}

/// `-x`
pub fn toggle_sign(x: f64) -> f64 {
    -x
}

/// `e^x`
pub fn exponential(x: f64) -> f64 {
    x.exp()
}

/// `10^x`
pub fn power_of_ten(x: f64) -> f64 {
    10f64.powf(x)
}

/// `sin(x)`, x in radians
pub fn sin(x: f64) -> f64 {
    x.sin()
}

/// `cos(x)`, x in radians
pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// `tan(x)`, x in radians
pub fn tan(x: f64) -> f64 {
    x.tan()
}

/// `√x`. Fails with [`MathError::Domain`] for negative inputs.
pub fn square_root(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        Err(MathError::Domain {
            operation: "square root",
            value: x,
        })
    } else {
        Ok(x.sqrt())
    }
}

/// `ln(x)`. Fails with [`MathError::Domain`] for non-positive inputs.
pub fn natural_log(x: f64) -> Result<f64, MathError> {
    if x <= 0.0 {
        Err(MathError::Domain {
            operation: "natural log",
            value: x,
        })
    } else {
        Ok(x.ln())
    }
}

/// `log₁₀(x)`. Fails with [`MathError::Domain`] for non-positive inputs.
pub fn log10(x: f64) -> Result<f64, MathError> {
    if x <= 0.0 {
        Err(MathError::Domain {
            operation: "log base 10",
            value: x,
        })
    } else {
        Ok(x.log10())
    }
}

/// `1/x`. Fails with [`MathError::Domain`] for zero.
pub fn reciprocal(x: f64) -> Result<f64, MathError> {
    if x == 0.0 {
        Err(MathError::Domain {
            operation: "reciprocal",
            value: x,
        })
    } else {
        Ok(1.0 / x)
    }
}
