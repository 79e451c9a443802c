//! Statement validation
//!
//! Statement dispatch, blocks, and the control-flow statements (`if`,
//! `while`, `for`, `return`). Dispatch is a single-token decision except for
//! `int main() {`, which needs four tokens of lookahead.

use crate::parser::errors::SyntaxError;
use crate::parser::parse::Validator;
use crate::parser::token::TokenKind;
use tracing::trace;

/// Statement productions, chosen from the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Production {
    Function,
    Declaration,
    If,
    While,
    For,
    Return,
    Block,
    Expression,
}

impl Validator {
    /// Parse one statement, tracking nesting depth.
    pub(crate) fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        self.enter_nesting()?;
        let result = self.dispatch_statement();
        self.leave_nesting();
        result
    }

    fn dispatch_statement(&mut self) -> Result<(), SyntaxError> {
        let Some(production) = self.select_production() else {
            return Err(SyntaxError::UnexpectedToken {
                found: self.peek().clone(),
            });
        };

        trace!(?production, token = %self.peek(), depth = self.depth, "statement");

        match production {
            Production::Function => self.parse_function(),
            Production::Declaration => self.parse_declaration(),
            Production::If => self.parse_if_statement(),
            Production::While => self.parse_while_statement(),
            Production::For => self.parse_for_statement(),
            Production::Return => self.parse_return_statement(),
            Production::Block => self.parse_block(),
            Production::Expression => {
                self.parse_expression()?;
                self.expect_special(";")
            }
        }
    }

    pub(crate) fn select_production(&self) -> Option<Production> {
        let current = self.peek();

        match (current.kind, current.text()) {
            (TokenKind::Keyword, Some("int")) if self.is_main_function() => {
                Some(Production::Function)
            }
            (TokenKind::Keyword, _) if self.is_datatype_keyword() => Some(Production::Declaration),
            (TokenKind::Keyword, Some("if")) => Some(Production::If),
            (TokenKind::Keyword, Some("while")) => Some(Production::While),
            (TokenKind::Keyword, Some("for")) => Some(Production::For),
            (TokenKind::Keyword, Some("return")) => Some(Production::Return),
            (TokenKind::Special, Some("{")) => Some(Production::Block),
            (TokenKind::Identifier | TokenKind::Number, _) => Some(Production::Expression),
            _ => None,
        }
    }

    /// Parse `{ statements }`
    pub(crate) fn parse_block(&mut self) -> Result<(), SyntaxError> {
        self.expect_special("{")?;

        while !self.check(Some(TokenKind::Special), Some("}")) {
            if self.is_at_end() {
                return Err(SyntaxError::UnclosedBlock {
                    location: self.current_location(),
                });
            }
            self.parse_statement()?;
        }

        self.expect_special("}")
    }

    /// Either a braced block or a single statement.
    pub(crate) fn parse_statement_or_block(&mut self) -> Result<(), SyntaxError> {
        if self.check(Some(TokenKind::Special), Some("{")) {
            self.parse_block()
        } else {
            self.parse_statement()
        }
    }

    /// Parse if statement with optional else branch
    fn parse_if_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword("if")?;
        self.parse_condition()?;
        self.parse_statement_or_block()?;

        if self.try_consume(Some(TokenKind::Keyword), Some("else")) {
            self.parse_statement_or_block()?;
        }

        Ok(())
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword("while")?;
        self.parse_condition()?;
        self.parse_statement_or_block()
    }

    /// Parse `for (init; condition; update) body`
    fn parse_for_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword("for")?;
        self.expect_special("(")?;

        self.parse_for_init()?;
        self.expect_special(";")?;

        self.parse_expression()?;
        self.expect_special(";")?;

        self.parse_expression()?;
        self.expect_special(")")?;

        self.parse_statement_or_block()
    }

    /// Parse `return expression;`
    fn parse_return_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword("return")?;
        self.parse_expression()?;
        self.expect_special(";")
    }

    /// Parenthesized condition shared by `if` and `while`
    fn parse_condition(&mut self) -> Result<(), SyntaxError> {
        self.expect_special("(")?;
        self.parse_expression()?;
        self.expect_special(")")
    }
}
