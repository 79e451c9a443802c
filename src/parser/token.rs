//! Token data contract shared by the lexer, the validator and the front ends.

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// Closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Special,
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Special => "Special",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// `text` is `None` only for [`TokenKind::EndOfInput`]. The location is the
/// position of the lexeme's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            location,
        }
    }

    pub fn end_of_input(location: SourceLocation) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            text: None,
            location,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Whether this token satisfies every given constraint.
    pub fn matches(&self, kind: Option<TokenKind>, text: Option<&str>) -> bool {
        kind.map_or(true, |k| self.kind == k) && text.map_or(true, |t| self.text() == Some(t))
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.text().unwrap_or("<none>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let tok = Token::new(TokenKind::Identifier, "x", SourceLocation::new(2, 7));
        assert_eq!(tok.to_string(), "Identifier:x");

        let eof = Token::end_of_input(SourceLocation::default());
        assert_eq!(eof.to_string(), "EndOfInput:<none>");
        assert_eq!(eof.text(), None);
    }

    #[test]
    fn test_matches_constraints() {
        let tok = Token::new(TokenKind::Special, ";", SourceLocation::new(1, 4));

        assert!(tok.matches(None, None));
        assert!(tok.matches(Some(TokenKind::Special), None));
        assert!(tok.matches(None, Some(";")));
        assert!(tok.matches(Some(TokenKind::Special), Some(";")));
        assert!(!tok.matches(Some(TokenKind::Operator), Some(";")));
        assert!(!tok.matches(Some(TokenKind::Special), Some("{")));
    }

    #[test]
    fn test_end_of_input_never_matches_text() {
        let eof = Token::end_of_input(SourceLocation::new(3, 1));
        assert!(eof.matches(Some(TokenKind::EndOfInput), None));
        assert!(!eof.matches(None, Some("")));
    }
}
