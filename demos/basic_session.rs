//! Basic Calculator Session
//!
//! This example demonstrates driving the calculator programmatically.
//!
//! Key concepts:
//! - Chained binary operations (left to right, no precedence)
//! - Unary functions applied mid-chain
//! - The bounded calculation history
//!
//! Run with: cargo run --example basic_session

use abacus::engine::Calculator;
use abacus::math::Operation;

fn main() -> Result<(), abacus::math::MathError> {
    println!("=== Basic Calculator Session ===\n");

    let mut calc = Calculator::new();

    // 5 + 3 =
    calc.input_digit(5);
    calc.perform_operation(Operation::Add)?;
    calc.input_digit(3);
    calc.perform_calculation()?;
    println!("5 + 3          -> {}", calc.display());

    // Chain: result × 2 - 6 =
    calc.perform_operation(Operation::Multiply)?;
    calc.input_digit(2);
    calc.perform_operation(Operation::Subtract)?;
    calc.input_digit(6);
    calc.perform_calculation()?;
    println!("x 2 - 6        -> {}", calc.display());

    // A unary function mid-chain leaves the pending operation alone.
    calc.perform_operation(Operation::Add)?;
    calc.input_digit(8);
    calc.input_digit(1);
    calc.square_root()?;
    println!("sqrt(81)       -> {} ({})", calc.display(), calc.expression());
    calc.perform_calculation()?;
    println!("+ sqrt(81)     -> {}", calc.display());

    // Division by zero is a typed error, not infinity.
    calc.perform_operation(Operation::Divide)?;
    calc.input_digit(0);
    if let Err(err) = calc.perform_calculation() {
        println!("/ 0            -> error: {err}");
    }

    println!("\nHistory (newest first):");
    for entry in calc.history().entries() {
        println!("  {}", entry.calculation);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
