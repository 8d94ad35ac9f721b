//! The calculator state machine.
//!
//! A single mutable [`Calculator`] owns the display text, the cosmetic
//! expression label, the pending binary operation, and the calculation
//! history. Input collaborators call its operations; the presentation
//! layer reads its accessors. Operations that can fail return a typed
//! [`MathError`] and leave every field untouched on failure.

use super::history::History;
use crate::math::{format_number, parse_number, ops, MathError, Operation};
use serde::{Deserialize, Serialize};

/// Calculator state machine.
///
/// The machine chains binary operations sequentially (left to right, no
/// precedence) and applies unary functions immediately to the displayed
/// value. Completed calculations are recorded in a bounded [`History`].
///
/// # Example
///
/// ```rust
/// use abacus::engine::Calculator;
/// use abacus::math::Operation;
///
/// let mut calc = Calculator::new();
/// calc.input_digit(5);
/// calc.perform_operation(Operation::Add)?;
/// calc.input_digit(3);
/// calc.perform_calculation()?;
///
/// assert_eq!(calc.display(), "8");
/// assert_eq!(calc.history().latest().unwrap().calculation, "5 + 3 = 8");
/// # Ok::<(), abacus::math::MathError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    expression: String,
    previous_value: Option<f64>,
    operation: Option<Operation>,
    waiting_for_operand: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default state: display `"0"`, empty
    /// expression, no pending operation, empty history.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            history: History::new(),
        }
    }

    /// The text currently shown on the display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Human-readable trace of the last operation or completed
    /// calculation. Cosmetic only, never parsed back.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Completed calculations, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Append a digit (0-9) to the display.
    ///
    /// After an operator or a completed calculation the digit starts a
    /// fresh number; a lone `"0"` display is replaced rather than
    /// extended, so no leading zeros accumulate. Digits above 9 are
    /// ignored.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let ch = char::from(b'0' + digit);
        if self.waiting_for_operand {
            self.display = ch.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
    }

    /// Append a decimal point to the display.
    ///
    /// Idempotent: the display never gains a second decimal point.
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Reset everything except the history to its default.
    pub fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.expression.clear();
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = false;
    }

    /// Reset only the display, keeping any pending operation. Lets the
    /// user retype a mistyped second operand mid-chain.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.waiting_for_operand = false;
    }

    /// Remove the last character of the display; a single-character
    /// display resets to `"0"` instead of going empty.
    pub fn backspace(&mut self) {
        if self.display.len() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Stage a binary operation.
    ///
    /// If an operand and operation are already pending, they are resolved
    /// against the displayed value first, so `5 + 3 +` shows the chained
    /// result `8` and keeps it as the left operand of the next `+`. The
    /// next digit input starts a fresh number.
    pub fn perform_operation(&mut self, op: Operation) -> Result<(), MathError> {
        let input = parse_number(&self.display)?;
        match (self.previous_value, self.operation) {
            (Some(previous), Some(pending)) => {
                let result = pending.apply(previous, input)?;
                let rendered = format_number(result);
                self.expression = format!("{} {}", rendered, op.symbol());
                self.display = rendered;
                self.previous_value = Some(result);
            }
            (None, _) => {
                self.expression = format!("{} {}", self.display, op.symbol());
                self.previous_value = Some(input);
            }
            // Operand staged but no operation pending: keep it as-is.
            (Some(_), None) => {}
        }
        self.waiting_for_operand = true;
        self.operation = Some(op);
        Ok(())
    }

    /// Resolve the pending binary operation against the displayed value.
    ///
    /// No-op when no operand/operation pair is pending. On success the
    /// result is shown, the rendered calculation is recorded in history,
    /// and the pending pair is cleared; a following digit starts a fresh
    /// number.
    pub fn perform_calculation(&mut self) -> Result<(), MathError> {
        let (Some(previous), Some(op)) = (self.previous_value, self.operation) else {
            return Ok(());
        };
        let input = parse_number(&self.display)?;
        let result = op.apply(previous, input)?;

        let calculation = format!(
            "{} {} {} = {}",
            format_number(previous),
            op.symbol(),
            format_number(input),
            format_number(result)
        );
        self.history.record(calculation.clone());
        self.display = format_number(result);
        self.expression = calculation;
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = true;
        Ok(())
    }

    /// `x%`: divide the displayed value by 100.
    pub fn percentage(&mut self) -> Result<(), MathError> {
        self.apply_unary("percentage", |x| Ok(ops::percentage(x)), |v, r| {
            format!("{v}% = {r}")
        })
    }

    /// `x²`
    pub fn square(&mut self) -> Result<(), MathError> {
        self.apply_unary("square", |x| Ok(ops::square(x)), |v, r| {
            format!("{v}² = {r}")
        })
    }

    /// `√x`
    pub fn square_root(&mut self) -> Result<(), MathError> {
        self.apply_unary("square root", ops::square_root, |v, r| {
            format!("√{v} = {r}")
        })
    }

    /// `x³`
    pub fn cube(&mut self) -> Result<(), MathError> {
        self.apply_unary("cube", |x| Ok(ops::cube(x)), |v, r| {
            format!("{v}³ = {r}")
        })
    }

    /// `∛x`
    pub fn cube_root(&mut self) -> Result<(), MathError> {
        self.apply_unary("cube root", |x| Ok(ops::cube_root(x)), |v, r| {
            format!("∛{v} = {r}")
        })
    }

    /// `e^x`
    pub fn exponential(&mut self) -> Result<(), MathError> {
        self.apply_unary("e^x", |x| Ok(ops::exponential(x)), |v, r| {
            format!("e^{v} = {r}")
        })
    }

    /// `ln(x)`
    pub fn natural_log(&mut self) -> Result<(), MathError> {
        self.apply_unary("natural log", ops::natural_log, |v, r| {
            format!("ln({v}) = {r}")
        })
    }

    /// `log₁₀(x)`
    pub fn log10(&mut self) -> Result<(), MathError> {
        self.apply_unary("log base 10", ops::log10, |v, r| {
            format!("log₁₀({v}) = {r}")
        })
    }

    /// `1/x`
    pub fn reciprocal(&mut self) -> Result<(), MathError> {
        self.apply_unary("reciprocal", ops::reciprocal, |v, r| {
            format!("1/{v} = {r}")
        })
    }

    /// `10^x`
    pub fn power_of_ten(&mut self) -> Result<(), MathError> {
        self.apply_unary("10^x", |x| Ok(ops::power_of_ten(x)), |v, r| {
            format!("10^{v} = {r}")
        })
    }

    /// `sin(x)`, x in radians
    pub fn sin(&mut self) -> Result<(), MathError> {
        self.apply_unary("sin", |x| Ok(ops::sin(x)), |v, r| format!("sin({v}) = {r}"))
    }

    /// `cos(x)`, x in radians
    pub fn cos(&mut self) -> Result<(), MathError> {
        self.apply_unary("cos", |x| Ok(ops::cos(x)), |v, r| format!("cos({v}) = {r}"))
    }

    /// `tan(x)`, x in radians
    pub fn tan(&mut self) -> Result<(), MathError> {
        self.apply_unary("tan", |x| Ok(ops::tan(x)), |v, r| format!("tan({v}) = {r}"))
    }

    /// Negate the displayed value. Updates the display only; the
    /// expression label is left alone.
    pub fn toggle_sign(&mut self) -> Result<(), MathError> {
        let value = parse_number(&self.display)?;
        self.display = format_number(ops::toggle_sign(value));
        Ok(())
    }

    /// Write π to the display. The next digit starts a fresh number.
    pub fn insert_pi(&mut self) {
        self.insert_constant("π", std::f64::consts::PI);
    }

    /// Write Euler's number to the display. The next digit starts a
    /// fresh number.
    pub fn insert_e(&mut self) {
        self.insert_constant("e", std::f64::consts::E);
    }

    fn insert_constant(&mut self, name: &str, value: f64) {
        let rendered = format_number(value);
        self.expression = format!("{name} = {rendered}");
        self.display = rendered;
        self.waiting_for_operand = true;
    }

    /// Parse the display, apply a unary function, and commit the result
    /// to display and expression. The pending operand/operation pair is
    /// untouched, so unary functions compose mid-chain. Nothing is
    /// mutated when parsing or the function fails, or when the result is
    /// non-finite.
    fn apply_unary<F, R>(&mut self, name: &'static str, op: F, render: R) -> Result<(), MathError>
    where
        F: FnOnce(f64) -> Result<f64, MathError>,
        R: FnOnce(&str, &str) -> String,
    {
        let value = parse_number(&self.display)?;
        let result = op(value)?;
        if !result.is_finite() {
            return Err(MathError::Overflow { operation: name });
        }
        let operand = format_number(value);
        let rendered = format_number(result);
        self.expression = render(&operand, &rendered);
        self.display = rendered;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(calc: &mut Calculator, digits: &[u8]) {
        for &d in digits {
            calc.input_digit(d);
        }
    }

    #[test]
    fn new_calculator_has_default_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn digits_concatenate_on_the_display() {
        let mut calc = Calculator::new();
        enter(&mut calc, &[1, 2, 3]);
        assert_eq!(calc.display(), "123");
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut calc = Calculator::new();
        calc.input_digit(0);
        calc.input_digit(5);
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut calc = Calculator::new();
        calc.input_digit(7);
        calc.input_digit(12);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn decimal_input_is_idempotent() {
        let mut calc = Calculator::new();
        calc.input_digit(3);
        calc.input_decimal();
        calc.input_decimal();
        calc.input_digit(5);
        assert_eq!(calc.display(), "3.5");
    }

    #[test]
    fn decimal_on_fresh_operand_starts_at_zero_point() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_decimal();
        assert_eq!(calc.display(), "0.");
    }

    #[test]
    fn addition_records_history() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_digit(3);
        calc.perform_calculation().unwrap();

        assert_eq!(calc.display(), "8");
        assert_eq!(calc.expression(), "5 + 3 = 8");
        assert_eq!(calc.history().latest().unwrap().calculation, "5 + 3 = 8");
    }

    #[test]
    fn operator_stages_the_displayed_value() {
        let mut calc = Calculator::new();
        enter(&mut calc, &[4, 2]);
        calc.perform_operation(Operation::Multiply).unwrap();
        assert_eq!(calc.expression(), "42 ×");
        // Next digit starts a fresh operand.
        calc.input_digit(2);
        assert_eq!(calc.display(), "2");
    }

    #[test]
    fn chained_operations_resolve_left_to_right() {
        let mut calc = Calculator::new();
        calc.input_digit(2);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_digit(3);
        calc.perform_operation(Operation::Multiply).unwrap();
        // 2 + 3 resolved eagerly, no precedence.
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.expression(), "5 ×");
        calc.input_digit(4);
        calc.perform_calculation().unwrap();
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn calculation_without_pending_operation_is_a_no_op() {
        let mut calc = Calculator::new();
        calc.input_digit(7);
        calc.perform_calculation().unwrap();
        assert_eq!(calc.display(), "7");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn zero_is_a_valid_staged_operand() {
        let mut calc = Calculator::new();
        calc.input_digit(0);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_digit(5);
        calc.perform_calculation().unwrap();
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.history().latest().unwrap().calculation, "0 + 5 = 5");
    }

    #[test]
    fn division_by_zero_leaves_state_untouched() {
        let mut calc = Calculator::new();
        calc.input_digit(8);
        calc.perform_operation(Operation::Divide).unwrap();
        calc.input_digit(0);

        let err = calc.perform_calculation().unwrap_err();
        assert_eq!(err, MathError::DivisionByZero);
        assert_eq!(calc.display(), "0");
        assert!(calc.history().is_empty());
        // Still usable: retype the divisor and finish.
        calc.input_digit(2);
        calc.perform_calculation().unwrap();
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn square_root_annotates_the_expression() {
        let mut calc = Calculator::new();
        calc.input_digit(9);
        calc.square_root().unwrap();
        assert_eq!(calc.display(), "3");
        assert_eq!(calc.expression(), "√9 = 3");
    }

    #[test]
    fn square_root_of_negative_leaves_state_untouched() {
        let mut calc = Calculator::new();
        calc.input_digit(4);
        calc.toggle_sign().unwrap();
        assert_eq!(calc.display(), "-4");

        let err = calc.square_root().unwrap_err();
        assert!(matches!(err, MathError::Domain { .. }));
        assert_eq!(calc.display(), "-4");
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn unary_function_mid_chain_keeps_pending_operation() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_digit(9);
        calc.square_root().unwrap();
        assert_eq!(calc.display(), "3");
        calc.perform_calculation().unwrap();
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.history().latest().unwrap().calculation, "5 + 3 = 8");
    }

    #[test]
    fn unary_expression_labels() {
        let cases: &[(fn(&mut Calculator) -> Result<(), MathError>, &str)] = &[
            (Calculator::square, "4² = 16"),
            (Calculator::cube, "4³ = 64"),
            (Calculator::percentage, "4% = 0.04"),
            (Calculator::reciprocal, "1/4 = 0.25"),
            (Calculator::power_of_ten, "10^4 = 10000"),
        ];
        for (op, expected) in cases {
            let mut calc = Calculator::new();
            calc.input_digit(4);
            op(&mut calc).unwrap();
            assert_eq!(calc.expression(), *expected);
        }
    }

    #[test]
    fn natural_log_of_one_is_zero() {
        let mut calc = Calculator::new();
        calc.input_digit(1);
        calc.natural_log().unwrap();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "ln(1) = 0");
    }

    #[test]
    fn log10_of_non_positive_is_an_error() {
        let mut calc = Calculator::new();
        assert!(matches!(calc.log10(), Err(MathError::Domain { .. })));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn exponential_overflow_is_an_error() {
        let mut calc = Calculator::new();
        enter(&mut calc, &[9, 9, 9]);
        let err = calc.exponential().unwrap_err();
        assert!(matches!(err, MathError::Overflow { .. }));
        assert_eq!(calc.display(), "999");
    }

    #[test]
    fn insert_pi_starts_a_fresh_operand() {
        let mut calc = Calculator::new();
        calc.insert_pi();
        assert_eq!(calc.display(), "3.1415926536");
        assert_eq!(calc.expression(), "π = 3.1415926536");
        calc.input_digit(2);
        assert_eq!(calc.display(), "2");
    }

    #[test]
    fn insert_e_writes_the_constant() {
        let mut calc = Calculator::new();
        calc.insert_e();
        assert_eq!(calc.display(), "2.7182818285");
    }

    #[test]
    fn toggle_sign_flips_back_and_forth() {
        let mut calc = Calculator::new();
        calc.input_digit(6);
        calc.toggle_sign().unwrap();
        assert_eq!(calc.display(), "-6");
        calc.toggle_sign().unwrap();
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn clear_all_keeps_history() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_digit(3);
        calc.perform_calculation().unwrap();

        calc.clear_all();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn clear_keeps_the_pending_operation() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.perform_operation(Operation::Add).unwrap();
        calc.input_digit(9);
        calc.clear();
        assert_eq!(calc.display(), "0");
        calc.input_digit(3);
        calc.perform_calculation().unwrap();
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn backspace_trims_one_character() {
        let mut calc = Calculator::new();
        enter(&mut calc, &[1, 2, 3]);
        calc.backspace();
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn backspace_on_single_character_resets_to_zero() {
        let mut calc = Calculator::new();
        calc.input_digit(7);
        calc.backspace();
        assert_eq!(calc.display(), "0");
        calc.backspace();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn history_is_capped_at_ten_entries() {
        let mut calc = Calculator::new();
        for i in 0..=10u8 {
            calc.clear_all();
            if i >= 10 {
                calc.input_digit(i / 10);
            }
            calc.input_digit(i % 10);
            calc.perform_operation(Operation::Add).unwrap();
            calc.input_digit(1);
            calc.perform_calculation().unwrap();
        }
        assert_eq!(calc.history().len(), 10);
        // The first calculation has been evicted; the newest leads.
        assert!(calc
            .history()
            .entries()
            .all(|entry| entry.calculation != "0 + 1 = 1"));
        assert_eq!(calc.history().latest().unwrap().calculation, "10 + 1 = 11");
    }

    #[test]
    fn calculator_state_serializes_correctly() {
        let mut calc = Calculator::new();
        calc.input_digit(5);
        calc.perform_operation(Operation::Add).unwrap();

        let json = serde_json::to_string(&calc).unwrap();
        let restored: Calculator = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.display(), calc.display());
        assert_eq!(restored.expression(), calc.expression());
    }
}
