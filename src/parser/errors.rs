//! Syntax error types for the validator
//!
//! Every variant is a structural mismatch between the token stream and the
//! grammar; the first one encountered aborts validation. The lexer has no
//! error type of its own.

use super::token::{SourceLocation, Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// What the validator wanted at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A token constrained by kind and/or exact text.
    Token {
        kind: Option<TokenKind>,
        text: Option<String>,
    },
    /// An identifier or a number.
    Value,
    /// One of the recognized expression operators.
    Operator,
    /// One of the recognized datatype keywords.
    Datatype,
}

impl Expected {
    pub fn token(kind: Option<TokenKind>, text: Option<&str>) -> Self {
        Expected::Token {
            kind,
            text: text.map(str::to_string),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token {
                kind: Some(kind),
                text: Some(text),
            } => write!(f, "{} '{}'", kind, text),
            Expected::Token {
                kind: Some(kind),
                text: None,
            } => write!(f, "{}", kind),
            Expected::Token {
                kind: None,
                text: Some(text),
            } => write!(f, "'{}'", text),
            Expected::Token {
                kind: None,
                text: None,
            } => write!(f, "any token"),
            Expected::Value => write!(f, "Value (Identifier or Number)"),
            Expected::Operator => write!(f, "Operator"),
            Expected::Datatype => write!(f, "Datatype (int, float, double or char)"),
        }
    }
}

/// Structural error raised by the validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The current token does not satisfy a required constraint.
    #[error("expected {expected}, but found {found} at {}", .found.location)]
    Mismatch { expected: Expected, found: Token },

    /// No statement production starts with this token.
    #[error("unexpected token {found} at {}", .found.location)]
    UnexpectedToken { found: Token },

    /// Input ended before a block's closing `}`.
    #[error("unexpected end of input inside block at {location}")]
    UnclosedBlock { location: SourceLocation },

    /// Statements nested deeper than the configured limit.
    #[error("statement nesting exceeds {limit} levels at {}", .found.location)]
    NestingTooDeep { limit: usize, found: Token },
}

impl SyntaxError {
    /// Source location the error points at.
    pub fn location(&self) -> SourceLocation {
        match self {
            SyntaxError::Mismatch { found, .. }
            | SyntaxError::UnexpectedToken { found }
            | SyntaxError::NestingTooDeep { found, .. } => found.location,
            SyntaxError::UnclosedBlock { location } => *location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semicolon_at(line: usize, column: usize) -> Token {
        Token::new(TokenKind::Special, ";", SourceLocation::new(line, column))
    }

    #[test]
    fn test_mismatch_display() {
        let err = SyntaxError::Mismatch {
            expected: Expected::token(Some(TokenKind::Identifier), None),
            found: semicolon_at(3, 9),
        };
        assert_eq!(
            err.to_string(),
            "expected Identifier, but found Special:; at line 3, col 9"
        );
        assert_eq!(err.location(), SourceLocation::new(3, 9));
    }

    #[test]
    fn test_expected_display() {
        assert_eq!(
            Expected::token(Some(TokenKind::Special), Some(")")).to_string(),
            "Special ')'"
        );
        assert_eq!(Expected::token(None, Some("main")).to_string(), "'main'");
        assert_eq!(Expected::token(None, None).to_string(), "any token");
        assert_eq!(Expected::Value.to_string(), "Value (Identifier or Number)");
    }

    #[test]
    fn test_unclosed_block_display() {
        let err = SyntaxError::UnclosedBlock {
            location: SourceLocation::new(1, 12),
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input inside block at line 1, col 12"
        );
    }

    #[test]
    fn test_unexpected_end_of_input_token() {
        let err = SyntaxError::UnexpectedToken {
            found: Token::end_of_input(SourceLocation::new(4, 2)),
        };
        assert_eq!(
            err.to_string(),
            "unexpected token EndOfInput:<none> at line 4, col 2"
        );
    }
}
