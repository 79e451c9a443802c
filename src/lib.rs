//! # Introduction
//!
//! ccheck tokenizes source text written in a small C-like language and
//! checks that it is syntactically well-formed. Analysis stops at the first
//! violation and reports it with a line and column.
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Lexer → Vec<Token> → Validator → Result<(), SyntaxError>
//! ```
//!
//! 1. [`parser`] — the lexer, which never fails, and the recursive descent
//!    validator, which either accepts the whole token buffer or returns a
//!    [`parser::SyntaxError`].
//! 2. [`analysis`] — runs both stages over a string and packages tokens,
//!    verdict and warnings into an [`analysis::Analysis`].
//! 3. [`ui`] — ratatui-based editor with token and result panes; not part of
//!    the stable library API.
//!
//! ## Supported language
//!
//! Declarations of `int`, `float`, `double` and `char`; one `int main()`
//! form; `if/else`, `while`, `for`, `return`; blocks; flat operator chains
//! over identifiers and numbers. No precedence, grouping, calls, arrays,
//! pointers, structs or preprocessor.
//!
//! ```
//! let analysis = ccheck::analysis::analyze("int main(){int x=5;return x;}");
//! assert!(analysis.is_valid());
//! ```

pub mod analysis;
pub mod parser;
pub mod ui;
