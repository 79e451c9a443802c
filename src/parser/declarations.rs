//! Declaration validation
//!
//! Handles the `int main() { ... }` function form, variable declarations
//! (`int a, b = 1;`) and the initializer clause of a `for` loop.

use crate::parser::errors::{Expected, SyntaxError};
use crate::parser::parse::Validator;
use crate::parser::token::TokenKind;

/// Tokens that must follow `int` for it to open a function.
const MAIN_SIGNATURE: [(TokenKind, &str); 4] = [
    (TokenKind::Identifier, "main"),
    (TokenKind::Special, "("),
    (TokenKind::Special, ")"),
    (TokenKind::Special, "{"),
];

impl Validator {
    /// True when the tokens after the current one spell `main ( ) {`.
    ///
    /// Reports false rather than failing when fewer than four tokens remain.
    pub(crate) fn is_main_function(&self) -> bool {
        MAIN_SIGNATURE.iter().enumerate().all(|(i, (kind, text))| {
            self.peek_ahead(i + 1)
                .is_some_and(|t| t.matches(Some(*kind), Some(*text)))
        })
    }

    /// Parse `int main ( ) { ... }`
    pub(crate) fn parse_function(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword("int")?;
        self.require(Some(TokenKind::Identifier), Some("main"))?;
        self.expect_special("(")?;
        self.expect_special(")")?;
        self.parse_block()
    }

    /// Parse `datatype id (, id)* [= value] ;`
    pub(crate) fn parse_declaration(&mut self) -> Result<(), SyntaxError> {
        self.parse_datatype()?;
        self.expect_identifier()?;

        while self.try_consume(Some(TokenKind::Special), Some(",")) {
            self.expect_identifier()?;
        }

        // Optional initializer
        if self.try_consume(Some(TokenKind::Operator), Some("=")) {
            self.parse_value()?;
        }

        self.expect_special(";")
    }

    pub(crate) fn parse_datatype(&mut self) -> Result<(), SyntaxError> {
        if self.is_datatype_keyword() {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(Expected::Datatype))
        }
    }

    /// Parse the first clause of a `for`: a typed or bare assignment.
    pub(crate) fn parse_for_init(&mut self) -> Result<(), SyntaxError> {
        if self.is_datatype_keyword() {
            self.parse_datatype()?;
        }

        self.expect_identifier()?;
        self.expect_operator("=")?;
        self.parse_value()
    }
}
