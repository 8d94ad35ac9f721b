//! Abacus: a keypad calculator engine
//!
//! Abacus folds raw input events (digits, the decimal point, binary
//! operators, unary functions, clear and backspace) into a running
//! calculator state, formats results for display, and keeps a bounded
//! history of completed calculations.
//!
//! # Core Concepts
//!
//! - **Arithmetic** ([`math`]): pure binary/unary operations plus the
//!   display formatting and parsing policy
//! - **State machine** ([`engine`]): the [`Calculator`] and its bounded
//!   [`History`]
//! - **Input** ([`input`]): the keyboard mapping table and the
//!   [`Action`] dispatcher used by buttons and keys alike
//!
//! Binary operations chain sequentially, left to right, with no operator
//! precedence; unary functions apply immediately to the displayed value.
//! Fallible operations return a typed [`MathError`] and leave the state
//! untouched on failure, so the calculator stays usable after any error.
//!
//! # Example
//!
//! ```rust
//! use abacus::engine::Calculator;
//! use abacus::input::{dispatch, map_key};
//!
//! let mut calc = Calculator::new();
//! for key in ["5", "+", "3", "Enter"] {
//!     if let Some(action) = map_key(key, false) {
//!         dispatch(&mut calc, action)?;
//!     }
//! }
//!
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history().latest().unwrap().calculation, "5 + 3 = 8");
//! # Ok::<(), abacus::math::MathError>(())
//! ```

pub mod engine;
pub mod input;
pub mod math;

// Re-export commonly used types
pub use engine::{Calculator, History, HistoryEntry};
pub use input::{dispatch, map_key, Action};
pub use math::{MathError, Operation};
