//! One-shot analysis of a source string.
//!
//! [`analyze`] runs the lexer and the validator over an input string and
//! returns everything a front end needs to show: the token list, the
//! verdict, and non-fatal warnings. No state survives the call.

use crate::parser::{Lexer, SourceLocation, SyntaxError, Token, Validator};
use crate::parser::parse::DEFAULT_MAX_DEPTH;
use std::fmt;
use tracing::{debug, info};

/// Knobs for a single analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum statement nesting before validation gives up.
    pub max_depth: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Non-fatal findings reported next to the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A `/*` comment ran to end of input and swallowed the rest of the text.
    UnterminatedComment { location: SourceLocation },
}

impl Warning {
    pub fn location(&self) -> SourceLocation {
        match self {
            Warning::UnterminatedComment { location } => *location,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnterminatedComment { location } => write!(
                f,
                "block comment opened at {} is never closed; the rest of the input was ignored",
                location
            ),
        }
    }
}

/// Tokens plus verdict for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Every token in order, without the end-of-input terminator.
    pub tokens: Vec<Token>,
    pub result: Result<(), SyntaxError>,
    pub warnings: Vec<Warning>,
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&SyntaxError> {
        self.result.as_ref().err()
    }

    /// Token listing, one line per token.
    pub fn token_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens.iter().map(token_line)
    }

    /// One-line verdict.
    pub fn verdict(&self) -> String {
        match &self.result {
            Ok(()) => "VALID (no syntax errors)".to_string(),
            Err(e) => format!("INVALID → {}", e),
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tokens:")?;
        for line in self.token_lines() {
            writeln!(f, "  {}", line)?;
        }

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  {}", warning)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Parser result:")?;
        writeln!(f, "  {}", self.verdict())
    }
}

/// Render a token the way the report lists it.
pub fn token_line(token: &Token) -> String {
    format!(
        "Token(type={}, value={}, line={}, col={})",
        token.kind,
        token.text().unwrap_or("<none>"),
        token.line(),
        token.column()
    )
}

/// Analyze `source` with the default configuration.
pub fn analyze(source: &str) -> Analysis {
    analyze_with(source, &AnalyzerConfig::default())
}

/// Tokenize `source` completely, then validate the token buffer.
pub fn analyze_with(source: &str, config: &AnalyzerConfig) -> Analysis {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    debug!(tokens = tokens.len(), chars = source.chars().count(), "tokenized source");

    let warnings: Vec<Warning> = lexer
        .unterminated_comment()
        .map(|location| Warning::UnterminatedComment { location })
        .into_iter()
        .collect();

    let result = Validator::new(tokens.clone())
        .with_max_depth(config.max_depth)
        .validate();

    match &result {
        Ok(()) => info!("source accepted"),
        Err(e) => info!(error = %e, "source rejected"),
    }

    let mut tokens = tokens;
    if tokens.last().is_some_and(Token::is_end_of_input) {
        tokens.pop();
    }

    Analysis {
        tokens,
        result,
        warnings,
    }
}
