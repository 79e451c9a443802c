//! Expression validation
//!
//! Expressions are flat chains `Value (Operator Value)*` read left to right.
//! There is no grouping and no precedence; parentheses only appear around
//! `if`/`while` conditions and `for` headers.

use crate::parser::errors::{Expected, SyntaxError};
use crate::parser::parse::Validator;
use crate::parser::token::TokenKind;

impl Validator {
    /// Parse `value (op value)*`
    pub(crate) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.parse_value()?;

        while self.is_expression_operator() {
            self.parse_operator()?;
            self.parse_value()?;
        }

        Ok(())
    }

    /// Identifier or number
    pub(crate) fn parse_value(&mut self) -> Result<(), SyntaxError> {
        if matches!(self.peek().kind, TokenKind::Identifier | TokenKind::Number) {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(Expected::Value))
        }
    }

    pub(crate) fn parse_operator(&mut self) -> Result<(), SyntaxError> {
        if self.is_expression_operator() {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(Expected::Operator))
        }
    }

    /// Operator token whose lexeme is in the accepted set. `!`, `!=`, `++`
    /// and `--` lex as operators but do not qualify.
    pub(crate) fn is_expression_operator(&self) -> bool {
        let current = self.peek();
        current.kind == TokenKind::Operator
            && current.text().is_some_and(|op| self.operators.contains(op))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::errors::{Expected, SyntaxError};
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::{Validator, OPERATORS};
    use crate::parser::token::{SourceLocation, Token, TokenKind};

    fn validator(source: &str) -> Validator {
        Validator::new(Lexer::new(source).tokenize())
    }

    fn validate(source: &str) -> Result<(), SyntaxError> {
        validator(source).validate()
    }

    #[test]
    fn test_every_recognized_operator() {
        for op in OPERATORS {
            let source = format!("a {} b;", op);
            assert_eq!(validate(&source), Ok(()), "operator {}", op);
        }
    }

    #[test]
    fn test_long_chain() {
        assert_eq!(validate("a = b + 1 * c - 2.5 / d % e;"), Ok(()));
        assert_eq!(validate("1 < 2 && 3 >= x || y;"), Ok(()));
    }

    #[test]
    fn test_number_statement() {
        assert_eq!(validate("42;"), Ok(()));
    }

    #[test]
    fn test_rejected_operators_end_expression() {
        for op in ["!=", "++", "--", "!"] {
            let source = format!("a {} b;", op);
            let err = validate(&source).unwrap_err();
            assert!(
                matches!(err, SyntaxError::Mismatch { ref found, .. } if found.text() == Some(op)),
                "operator {} gave {:?}",
                op,
                err
            );
        }
    }

    #[test]
    fn test_dangling_operator() {
        let err = validate("x = ;").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Mismatch {
                expected: Expected::Value,
                found: Token::new(TokenKind::Special, ";", SourceLocation::new(1, 5)),
            }
        );
    }

    #[test]
    fn test_parenthesized_operand_rejected() {
        let err = validate("x = (y);").unwrap_err();
        assert!(matches!(err, SyntaxError::Mismatch { expected: Expected::Value, .. }));
    }

    #[test]
    fn test_parse_operator_on_value() {
        let mut v = validator("a b");
        assert_eq!(v.parse_value(), Ok(()));
        assert!(matches!(
            v.parse_operator(),
            Err(SyntaxError::Mismatch { expected: Expected::Operator, .. })
        ));
    }

    #[test]
    fn test_keyword_is_not_value() {
        let mut v = validator("int");
        assert!(matches!(
            v.parse_value(),
            Err(SyntaxError::Mismatch { expected: Expected::Value, .. })
        ));
    }
}
