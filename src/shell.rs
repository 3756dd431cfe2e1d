//! The interactive console: a main menu leading to the guided
//! standard mode or to the single expression mode.

use std::io::Write;
use crate::eval::{self, errors::ErrorKind as EvalErrorKind};
use crate::tokens::{self, errors::ErrorKind as TokensErrorKind, Expression, Operator};
use rustyline::error::ReadlineError;
#[allow(unused_imports)]
use log::{debug, info, trace, warn};

pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        foreign_links {
            Io(std::io::Error);
            Readline(rustyline::error::ReadlineError);
        }
    }
}

use errors::*;

const RULE_WIDTH: usize = 50;
const GOODBYE: &str = "👋 Thank you for using Calculator CLI. Goodbye!";

/// One read from the terminal.
#[derive(Debug, PartialEq, Clone)]
pub enum Input {
    Line(String),
    Interrupted,
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Terminal line editor with in-memory history.
pub struct Editor {
    rl: rustyline::DefaultEditor,
}

impl Editor {
    pub fn new() -> Result<Editor> {
        Ok(Editor { rl: rustyline::DefaultEditor::new()? })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Where control goes once a mode is left.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Outcome {
    Menu,
    Exit,
}

enum Prompted<T> {
    Got(T),
    Leave(Outcome),
}

// Unwraps a prompt answer or leaves the current mode.
macro_rules! got {
    ($e:expr) => {
        match $e {
            Prompted::Got(x) => x,
            Prompted::Leave(o) => return Ok(o),
        }
    };
}

pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: LineSource, W: Write> Session<R, W> {

    pub fn new(input: R, out: W) -> Session<R, W> {
        Session { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the main menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "🚀 Starting Calculator CLI Application...")?;
        loop {
            self.banner("CALCULATOR MAIN MENU", &[
                "1. Standard Calculator Mode",
                "2. Single Expression Mode",
                "3. Exit",
            ])?;

            let choice = match self.input.read_line("Select mode (1-3): ")? {
                Input::Line(line) => line,
                Input::Interrupted | Input::Eof => break,
            };
            let outcome = match choice.trim() {
                "1" => self.standard_mode()?,
                "2" => self.expression_mode()?,
                "3" => break,
                other => {
                    debug!("Unknown menu choice {:?}", other);
                    writeln!(self.out, "❌ Invalid choice! Please select 1, 2, or 3.")?;
                    continue;
                }
            };
            if outcome == Outcome::Exit {
                break;
            }
        }
        writeln!(self.out, "{}", GOODBYE)?;
        Ok(())
    }

    fn banner(&mut self, title: &str, lines: &[&str]) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{:^width$}", title, width = RULE_WIDTH)?;
        writeln!(self.out, "{}", rule)?;
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Prompted<String>> {
        match self.input.read_line(prompt)? {
            Input::Line(line) => Ok(Prompted::Got(line.trim().to_owned())),
            Input::Interrupted => {
                writeln!(self.out, "\n⏹️  Interrupted. Returning to main menu...")?;
                Ok(Prompted::Leave(Outcome::Menu))
            }
            Input::Eof => Ok(Prompted::Leave(Outcome::Exit)),
        }
    }

    fn ask_number(&mut self, prompt: &str) -> Result<Prompted<f64>> {
        loop {
            let line = match self.ask(prompt)? {
                Prompted::Got(line) => line,
                Prompted::Leave(o) => return Ok(Prompted::Leave(o)),
            };
            match tokens::parse_operand(&line) {
                Ok(x) => return Ok(Prompted::Got(x)),
                Err(e) => {
                    trace!("Rejected operand: {}", e);
                    writeln!(self.out, "❌ Invalid input! Please enter a valid number.")?;
                }
            }
        }
    }

    fn standard_mode(&mut self) -> Result<Outcome> {
        debug!("Entering standard mode");
        let mut lines = vec!["This calculator supports the following operations:".to_owned()];
        lines.extend(Operator::ALL.iter().map(|op| format!("  {}  {}", op, op.name())));
        lines.push("Enter 'quit' to exit the program".to_owned());
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.banner("WELCOME TO CALCULATOR CLI", &lines)?;

        loop {
            writeln!(self.out)?;
            let a = got!(self.ask_number("Enter the first number: ")?);

            let symbol = got!(self.ask("Enter an operator (+, -, *, /): ")?);
            if symbol.eq_ignore_ascii_case("quit") {
                writeln!(self.out, "{}", GOODBYE)?;
                return Ok(Outcome::Menu);
            }
            let op = match symbol.parse::<Operator>() {
                Ok(op) => op,
                Err(e) => {
                    trace!("Rejected operator: {}", e);
                    writeln!(self.out, "❌ Invalid operator! Please use one of: +, -, *, /")?;
                    continue;
                }
            };

            let b = got!(self.ask_number("Enter the second number: ")?);

            match eval::evaluate(a, op, b) {
                Ok(res) => {
                    writeln!(self.out, "\n✅ {} Result: {} {} {} = {}", op.name(), a, op, b, res)?;
                    if op == Operator::Divide {
                        writeln!(self.out, "   (Division: {} ÷ {} = {})", a, b, res)?;
                    }
                }
                Err(e) => {
                    writeln!(self.out, "❌ Error: {}", e)?;
                    continue;
                }
            }

            writeln!(self.out)?;
            let again = got!(self.ask("Do you want to perform another calculation? (y/n): ")?);
            match again.to_lowercase().as_str() {
                "y" | "yes" => continue,
                _ => {
                    writeln!(self.out, "{}", GOODBYE)?;
                    return Ok(Outcome::Menu);
                }
            }
        }
    }

    fn expression_mode(&mut self) -> Result<Outcome> {
        debug!("Entering single expression mode");
        self.banner("SINGLE EXPRESSION MODE", &[
            "Enter expressions like: 5 + 3, 10 * 2.5, etc.",
            "Enter 'quit' to return to main menu",
        ])?;

        loop {
            writeln!(self.out)?;
            let line = got!(self.ask("Enter expression: ")?);
            if line.eq_ignore_ascii_case("quit") {
                return Ok(Outcome::Menu);
            }

            match solve(&line) {
                Ok((expr, res)) => {
                    writeln!(self.out, "✅ Result: {} {} {} = {}", expr.lhs, expr.op, expr.rhs, res)?;
                }
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn report(&mut self, e: &eval::errors::Error) -> Result<()> {
        match e.kind() {
            EvalErrorKind::Tokens(TokensErrorKind::InvalidFormat(_)) => {
                writeln!(self.out, "❌ Invalid format! Use: number operator number")?;
                writeln!(self.out, "   Example: 5 + 3 or 10.5 * 2")?;
            }
            EvalErrorKind::Tokens(TokensErrorKind::InvalidOperand(_)) => {
                writeln!(self.out, "❌ Invalid numbers! Please enter valid numeric values.")?;
            }
            EvalErrorKind::Tokens(TokensErrorKind::InvalidOperator(_)) => {
                writeln!(self.out, "❌ Invalid operator! Please use one of: +, -, *, /")?;
            }
            EvalErrorKind::DivisionByZero => {
                writeln!(self.out, "❌ Error: {}", e)?;
            }
            _ => {
                warn!("Unexpected evaluation error: {}", e);
                writeln!(self.out, "❌ An error occurred: {}", e)?;
            }
        }
        Ok(())
    }
}

fn solve(line: &str) -> eval::errors::Result<(Expression, f64)> {
    let expr = tokens::parse_expression(line)?;
    let res = expr.evaluate()?;
    Ok((expr, res))
}
