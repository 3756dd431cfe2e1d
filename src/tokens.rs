use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;
use error_chain::bail;
#[allow(unused_imports)]
use log::{debug, trace};

pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        errors {
            InvalidOperand(s: String) {
                description("Invalid operand"),
                display("Invalid operand: {:?} is not a number", s),
            }

            InvalidOperator(s: String) {
                description("Invalid operator"),
                display("Invalid operator: {:?}, expected one of +, -, *, /", s),
            }

            InvalidFormat(count: usize) {
                description("Invalid expression format"),
                display("Invalid format: expected `number operator number`, got {} token(s)", count),
            }
        }
    }
}

use errors::*;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {

    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Human readable name, as shown next to a result.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Operator> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => bail!(ErrorKind::InvalidOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed `operand operator operand` expression.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Expression {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

pub fn parse_operand(text: &str) -> Result<f64> {
    let num = text.trim().parse::<f64>();
    Ok(num.chain_err(|| ErrorKind::InvalidOperand(text.trim().to_owned()))?)
}

/// Splits on runs of whitespace, requiring exactly three tokens.
pub fn split_expression(input: &str) -> Result<[&str; 3]> {
    let parts: Vec<&str> = WHITESPACE
        .split(input.trim())
        .filter(|s| !s.is_empty())
        .collect();
    trace!("Split {:?} into {:?}", input, parts);
    match parts.as_slice() {
        [lhs, op, rhs] => Ok([*lhs, *op, *rhs]),
        _ => bail!(ErrorKind::InvalidFormat(parts.len())),
    }
}

// Operands are checked before the operator, so "abc % 3" is an operand error.
pub fn parse_expression(input: &str) -> Result<Expression> {
    let [lhs, op, rhs] = split_expression(input)?;
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let op = op.parse::<Operator>()?;
    debug!("Parsed expression {} {} {}", lhs, op, rhs);
    Ok(Expression { lhs, op, rhs })
}
