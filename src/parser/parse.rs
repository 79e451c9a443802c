//! Grammar validator coordinator
//!
//! This module provides the [`Validator`] struct and the core token-matching
//! infrastructure, plus the `validate` entry point.
//!
//! # Validator Architecture
//!
//! The Validator is a recursive descent recognizer organised as:
//! - This module: Validator struct, token helpers, and the program loop
//! - `statements`: statement dispatch, blocks and control flow
//! - `declarations`: `int main()`, variable declarations, `for` initializers
//! - `expressions`: flat `Value (Operator Value)*` chains
//!
//! Methods are split across files using `impl Validator` blocks. Nothing is
//! built: each production either consumes its tokens or returns the first
//! [`SyntaxError`].
//!
//! Recursion depth follows the nesting depth of the source and is capped by
//! [`Validator::with_max_depth`].

use crate::parser::errors::{Expected, SyntaxError};
use crate::parser::token::{SourceLocation, Token, TokenKind};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Default limit on nested statements.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Type keywords that may start a declaration.
pub const DATATYPES: [&str; 4] = ["int", "float", "double", "char"];

/// Operators accepted between values in an expression.
pub const OPERATORS: [&str; 22] = [
    "+", "-", "*", "/", "=", "%", "<", ">", "|", "&", ">=", "<=", "==", "&&", "||", "+=", "-=",
    "*=", "/=", "%=", "|=", "&=",
];

/// Recursive descent validator for the C subset
pub struct Validator {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) depth: usize,
    pub(crate) max_depth: usize,
    pub(crate) datatypes: FxHashSet<&'static str>,
    pub(crate) operators: FxHashSet<&'static str>,
}

impl Validator {
    /// Build a validator over a fully materialized token buffer.
    ///
    /// The buffer is cut after its first end-of-input token; if it has none,
    /// one is appended at the last token's location, or (1,1) when empty.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        match tokens.iter().position(Token::is_end_of_input) {
            Some(end) => tokens.truncate(end + 1),
            None => {
                let location = tokens
                    .last()
                    .map(|t| t.location)
                    .unwrap_or_default();
                tokens.push(Token::end_of_input(location));
            }
        }

        Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            datatypes: DATATYPES.into_iter().collect(),
            operators: OPERATORS.into_iter().collect(),
        }
    }

    /// Limit how deeply statements may nest before validation gives up.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate the whole program: statements until end of input.
    pub fn validate(&mut self) -> Result<(), SyntaxError> {
        debug!(tokens = self.tokens.len(), max_depth = self.max_depth, "validating");

        while !self.is_at_end() {
            self.parse_statement()?;
        }

        debug!("token stream accepted");
        Ok(())
    }

    // ===== Helper methods =====

    /// Consume the current token if it satisfies every given constraint.
    pub fn try_consume(&mut self, kind: Option<TokenKind>, text: Option<&str>) -> bool {
        if self.check(kind, text) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Like [`try_consume`](Self::try_consume), but a miss is an error.
    pub fn require(
        &mut self,
        kind: Option<TokenKind>,
        text: Option<&str>,
    ) -> Result<(), SyntaxError> {
        if self.try_consume(kind, text) {
            Ok(())
        } else {
            Err(self.mismatch(Expected::token(kind, text)))
        }
    }

    /// Look `n` tokens past the cursor without consuming anything.
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn check(&self, kind: Option<TokenKind>, text: Option<&str>) -> bool {
        self.peek().matches(kind, text)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_end_of_input()
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    pub(crate) fn mismatch(&self, expected: Expected) -> SyntaxError {
        SyntaxError::Mismatch {
            expected,
            found: self.peek().clone(),
        }
    }

    pub(crate) fn expect_keyword(&mut self, word: &str) -> Result<(), SyntaxError> {
        self.require(Some(TokenKind::Keyword), Some(word))
    }

    pub(crate) fn expect_special(&mut self, symbol: &str) -> Result<(), SyntaxError> {
        self.require(Some(TokenKind::Special), Some(symbol))
    }

    pub(crate) fn expect_operator(&mut self, op: &str) -> Result<(), SyntaxError> {
        self.require(Some(TokenKind::Operator), Some(op))
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<(), SyntaxError> {
        self.require(Some(TokenKind::Identifier), None)
    }

    pub(crate) fn is_datatype_keyword(&self) -> bool {
        let current = self.peek();
        current.kind == TokenKind::Keyword
            && current.text().is_some_and(|word| self.datatypes.contains(word))
    }

    /// Count one more level of statement nesting.
    pub(crate) fn enter_nesting(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                found: self.peek().clone(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
