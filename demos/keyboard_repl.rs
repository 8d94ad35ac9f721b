//! Keyboard REPL
//!
//! This example demonstrates the key-to-action mapping table. Each line
//! typed on stdin is treated as a sequence of key presses (digits and
//! operators); type `enter` for the Enter key, `esc` to clear, `back`
//! for backspace, or `quit` to exit.
//!
//! Run with: cargo run --example keyboard_repl

use abacus::engine::Calculator;
use abacus::input::{dispatch, map_key};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    println!("=== Keyboard REPL ===");
    println!("Keys: 0-9 . + - * / = enter esc back quit\n");

    let stdin = io::stdin();
    let mut calc = Calculator::new();

    print_state(&calc)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut quit = false;
        for word in line.split_whitespace() {
            let key = match word {
                "enter" => "Enter",
                "esc" => "Escape",
                "back" => "Backspace",
                "quit" => {
                    quit = true;
                    break;
                }
                other => other,
            };
            // Multi-character words are whole key names; anything else is
            // replayed character by character, like typing.
            let presses: Vec<String> = if key.chars().count() > 1 {
                vec![key.to_string()]
            } else {
                key.chars().map(|c| c.to_string()).collect()
            };
            for press in presses {
                match map_key(&press, false) {
                    Some(action) => {
                        if let Err(err) = dispatch(&mut calc, action) {
                            println!("error: {err}");
                        }
                    }
                    None => println!("unhandled key: {press}"),
                }
            }
        }
        if quit {
            break;
        }
        print_state(&calc)?;
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

fn print_state(calc: &Calculator) -> io::Result<()> {
    println!("[{}]  {}", calc.display(), calc.expression());
    print!("> ");
    io::stdout().flush()
}
