//! Calculator state machine and calculation history.
//!
//! The [`Calculator`] folds raw input events (digits, decimal point,
//! operators, unary functions, clear/backspace) into a running numeric
//! state and records completed calculations in a bounded [`History`].

mod calculator;
mod history;

pub use calculator::Calculator;
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
