//! Mapping from input events to calculator actions.
//!
//! On-screen buttons construct [`Action`] values directly; the keyboard
//! layer goes through [`map_key`] first. Both feed [`dispatch`], the
//! single entry point into the state machine. How a returned error is
//! shown to the user is the caller's concern.

use crate::engine::Calculator;
use crate::math::{MathError, Operation};
use serde::{Deserialize, Serialize};

/// An invocable calculator operation, one variant per state-machine
/// operation a button or key can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Digit(u8),
    Decimal,
    Operation(Operation),
    Calculate,
    Clear,
    ClearAll,
    Backspace,
    Percentage,
    Square,
    SquareRoot,
    Cube,
    CubeRoot,
    Reciprocal,
    Exponential,
    NaturalLog,
    Log10,
    PowerOfTen,
    Sin,
    Cos,
    Tan,
    ToggleSign,
    InsertPi,
    InsertE,
}

/// Map a key press to a calculator action.
///
/// `key` is the key's logical name as delivered by the host input layer
/// (single characters for printable keys, names like `"Enter"` for the
/// rest); `modifier` is whether Ctrl/Cmd was held. Returns `None` for
/// keys the calculator does not handle. A `Some` result means the host
/// should treat the key as consumed and suppress its default behavior.
///
/// # Example
///
/// ```rust
/// use abacus::input::{map_key, Action};
/// use abacus::math::Operation;
///
/// assert_eq!(map_key("7", false), Some(Action::Digit(7)));
/// assert_eq!(map_key("*", false), Some(Action::Operation(Operation::Multiply)));
/// assert_eq!(map_key("r", true), Some(Action::SquareRoot));
/// assert_eq!(map_key("q", false), None);
/// ```
pub fn map_key(key: &str, modifier: bool) -> Option<Action> {
    if modifier {
        return match key {
            "s" => Some(Action::Square),
            "r" => Some(Action::SquareRoot),
            "c" => Some(Action::Cube),
            "t" => Some(Action::CubeRoot),
            "n" => Some(Action::ToggleSign),
            _ => None,
        };
    }
    match key {
        "." => Some(Action::Decimal),
        "+" => Some(Action::Operation(Operation::Add)),
        "-" => Some(Action::Operation(Operation::Subtract)),
        "*" => Some(Action::Operation(Operation::Multiply)),
        "/" => Some(Action::Operation(Operation::Divide)),
        "Enter" | "=" => Some(Action::Calculate),
        "Escape" => Some(Action::ClearAll),
        "Backspace" => Some(Action::Backspace),
        "%" => Some(Action::Percentage),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(digit @ '0'..='9'), None) => {
                    Some(Action::Digit(digit as u8 - b'0'))
                }
                _ => None,
            }
        }
    }
}

/// Route an action to the corresponding calculator operation.
pub fn dispatch(calculator: &mut Calculator, action: Action) -> Result<(), MathError> {
    match action {
        Action::Digit(digit) => calculator.input_digit(digit),
        Action::Decimal => calculator.input_decimal(),
        Action::Operation(op) => return calculator.perform_operation(op),
        Action::Calculate => return calculator.perform_calculation(),
        Action::Clear => calculator.clear(),
        Action::ClearAll => calculator.clear_all(),
        Action::Backspace => calculator.backspace(),
        Action::Percentage => return calculator.percentage(),
        Action::Square => return calculator.square(),
        Action::SquareRoot => return calculator.square_root(),
        Action::Cube => return calculator.cube(),
        Action::CubeRoot => return calculator.cube_root(),
        Action::Reciprocal => return calculator.reciprocal(),
        Action::Exponential => return calculator.exponential(),
        Action::NaturalLog => return calculator.natural_log(),
        Action::Log10 => return calculator.log10(),
        Action::PowerOfTen => return calculator.power_of_ten(),
        Action::Sin => return calculator.sin(),
        Action::Cos => return calculator.cos(),
        Action::Tan => return calculator.tan(),
        Action::ToggleSign => return calculator.toggle_sign(),
        Action::InsertPi => calculator.insert_pi(),
        Action::InsertE => calculator.insert_e(),
    }
    Ok(())
}
