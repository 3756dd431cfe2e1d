use clap::Parser;

#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about = "Four-function command-line calculator", long_about = None)]
pub struct CliArgs {
    /// Expression to evaluate once, e.g. `5 + 3`. Starts the interactive
    /// calculator when omitted.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub expression: Vec<String>,
}

impl CliArgs {
    /// The words given on the command line joined into one expression.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::try_parse_from(&["calc"]).unwrap();
        assert!(args.expression.is_empty());
        assert_eq!(args.expression(), None);
    }

    #[test]
    fn test_parse_quoted_expression() {
        let args = CliArgs::try_parse_from(&["calc", "5 + 3"]).unwrap();
        assert_eq!(args.expression(), Some("5 + 3".to_string()));
    }

    #[test]
    fn test_parse_split_expression() {
        let args = CliArgs::try_parse_from(&["calc", "5", "+", "3"]).unwrap();
        assert_eq!(args.expression(), Some("5 + 3".to_string()));
    }

    #[test]
    fn test_parse_negative_operand() {
        let args = CliArgs::try_parse_from(&["calc", "2", "-", "-4"]).unwrap();
        assert_eq!(args.expression(), Some("2 - -4".to_string()));
    }
}
