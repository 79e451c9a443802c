//! C subset tokenizer and syntax validator
//!
//! This module checks C-like source text in two strictly ordered stages:
//! - [`lexer`]: Tokenization (source text → tokens), never fails
//! - [`parse`]: Validation (tokens → accept, or the first [`SyntaxError`])
//! - [`token`]: The token data contract shared by both stages
//! - [`errors`]: Structural error types
//!
//! # Supported C Subset
//!
//! - Types: `int`, `float`, `double`, `char` (declarations only)
//! - A single `int main() { ... }` form, blocks, `if`/`else`, `while`, `for`,
//!   `return`
//! - Expressions: flat `value op value ...` chains over identifiers and numbers
//! - No arrays, pointers, structs, calls, grouping parentheses or preprocessor
//!
//! # Validator Implementation
//!
//! Hand-written recursive descent recognizer. No syntax tree is built and
//! there is no error recovery.

mod declarations;
mod expressions;
mod statements;

pub mod errors;
pub mod lexer;
pub mod parse;
pub mod token;

pub use errors::{Expected, SyntaxError};
pub use lexer::Lexer;
pub use parse::Validator;
pub use token::{SourceLocation, Token, TokenKind};
