use crate::tokens::{self, Expression, Operator};
use log::debug;

use error_chain::bail;


pub mod errors {
    use error_chain::error_chain;
    error_chain! {
        errors {
            DivisionByZero {
                description("Division by zero"),
                display("Division by zero is not allowed"),
            }
        }

        links {
            Tokens(crate::tokens::errors::Error, crate::tokens::errors::ErrorKind);
        }
    }
}
use errors::*;


/// Applies `op` to the two operands. Dividing by exactly zero is an error,
/// every other input (including NaN and infinities) is plain float arithmetic.
pub fn evaluate(a: f64, op: Operator, b: f64) -> Result<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                bail!(ErrorKind::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

impl Expression {
    pub fn evaluate(&self) -> Result<f64> {
        evaluate(self.lhs, self.op, self.rhs)
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Calculator;

impl Calculator {

    pub fn new() -> Calculator {
        Calculator::default()
    }

    /// Evaluates a free-text `number operator number` expression.
    pub fn eval(&self, input: &str) -> Result<f64> {
        let expr = tokens::parse_expression(input)?;
        let res = expr.evaluate()?;
        debug!("Evaluated {:?} to {}", expr, res);
        Ok(res)
    }

    pub fn calculate(&self, a: f64, symbol: &str, b: f64) -> Result<f64> {
        let op = symbol.parse::<Operator>()?;
        evaluate(a, op, b)
    }
}

/// Like `Calculator::eval`, for callers that only care whether it worked.
pub fn calculate_expression(input: &str) -> Option<f64> {
    Calculator::new().eval(input).ok()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tokens::errors::ErrorKind as TokensErrorKind;
    use error_chain::ChainedError;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SAMPLES: [f64; 9] = [0.0, -0.0, 1.0, -1.0, 2.5, -7.25, 1e10, 3.0e-5, 42.0];

    #[test]
    fn test_arithmetic_identities() {
        init_log();
        for &a in SAMPLES.iter() {
            for &b in SAMPLES.iter() {
                assert_eq!(evaluate(a, Operator::Add, b).unwrap(), a + b);
                assert_eq!(evaluate(a, Operator::Subtract, b).unwrap(), a - b);
                assert_eq!(evaluate(a, Operator::Multiply, b).unwrap(), a * b);
                assert_eq!(
                    evaluate(a, Operator::Add, b).unwrap(),
                    evaluate(b, Operator::Add, a).unwrap()
                );
                assert_eq!(
                    evaluate(a, Operator::Multiply, b).unwrap(),
                    evaluate(b, Operator::Multiply, a).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        init_log();
        for &a in SAMPLES.iter().chain([f64::INFINITY, f64::NAN].iter()) {
            for &zero in &[0.0, -0.0] {
                match evaluate(a, Operator::Divide, zero) {
                    Err(Error(ErrorKind::DivisionByZero, _)) => (),
                    other => panic!("Expected DivisionByZero for {} / {}, got {:?}", a, zero, other),
                }
            }
        }
    }

    #[test]
    fn test_division() {
        init_log();
        for &a in SAMPLES.iter() {
            for &b in SAMPLES.iter().filter(|b| **b != 0.0) {
                let res = evaluate(a, Operator::Divide, b).unwrap();
                assert!((res - a / b).abs() <= f64::EPSILON * (a / b).abs());
            }
        }
        assert_eq!(evaluate(1.0, Operator::Divide, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn test_eval_expressions() {
        init_log();
        let calc = Calculator::new();
        let cases = vec![
            ("5 + 3", 8.0),
            ("10.5 * 2", 21.0),
            ("10 - 12", -2.0),
            ("9 / 2", 4.5),
            ("  -4   *   -2.5 ", 10.0),
        ];
        for (s, expected) in cases.into_iter() {
            match calc.eval(s) {
                Ok(x) => assert_eq!(x, expected),
                Err(e) => panic!("{}", e.display_chain()),
            }
        }
    }

    #[test]
    fn test_eval_error_categories() {
        init_log();
        let calc = Calculator::new();

        match calc.eval("5 +") {
            Err(Error(ErrorKind::Tokens(TokensErrorKind::InvalidFormat(2)), _)) => (),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
        match calc.eval("5 % 3") {
            Err(Error(ErrorKind::Tokens(TokensErrorKind::InvalidOperator(_)), _)) => (),
            other => panic!("Expected InvalidOperator, got {:?}", other),
        }
        match calc.eval("abc + 3") {
            Err(Error(ErrorKind::Tokens(TokensErrorKind::InvalidOperand(_)), _)) => (),
            other => panic!("Expected InvalidOperand, got {:?}", other),
        }
        match calc.eval("8 / 0") {
            Err(Error(ErrorKind::DivisionByZero, _)) => (),
            other => panic!("Expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_symbol() {
        init_log();
        let calc = Calculator::new();
        assert_eq!(calc.calculate(6.0, "*", 7.0).unwrap(), 42.0);
        match calc.calculate(6.0, "x", 7.0) {
            Err(Error(ErrorKind::Tokens(TokensErrorKind::InvalidOperator(s)), _)) => assert_eq!(s, "x"),
            other => panic!("Expected InvalidOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_expression() {
        init_log();
        assert_eq!(calculate_expression("2 * 2.5"), Some(5.0));
        assert_eq!(calculate_expression("2 / 0"), None);
        assert_eq!(calculate_expression("2 ^ 2"), None);
        assert_eq!(calculate_expression("two + 2"), None);
        assert_eq!(calculate_expression("1 + 2 + 3"), None);
    }
}
