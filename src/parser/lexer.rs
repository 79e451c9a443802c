//! Lexer (tokenizer) for the C subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! validator. The lexer never fails: every character of input ends up in some
//! token, and anything without a meaning in the language becomes a
//! one-character [`TokenKind::Special`] for the validator to reject.

use super::token::{SourceLocation, Token, TokenKind};
use tracing::trace;

/// Reserved words. Everything else that looks like a word is an identifier.
pub const KEYWORDS: [&str; 9] = [
    "int", "float", "double", "char", "if", "else", "while", "for", "return",
];

/// Characters that start an operator lexeme.
const OPERATOR_CHARS: [char; 11] = ['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|'];

/// Lexer for C subset source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    unterminated_comment: Option<SourceLocation>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            unterminated_comment: None,
        }
    }

    /// Tokenize the entire input, including the trailing end-of-input token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is_end_of_input();
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns an end-of-input token at
    /// the same location.
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(ch) = self.peek() else {
                return Token::end_of_input(self.current_location());
            };

            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch == '/' && matches!(self.peek_ahead(1), Some('/') | Some('*')) {
                self.skip_comment();
                continue;
            }

            let loc = self.current_location();
            let token = if ch.is_alphabetic() || ch == '_' {
                self.identifier_or_keyword(loc)
            } else if ch.is_ascii_digit() || (ch == '.' && self.next_is_digit()) {
                self.number_literal(loc)
            } else if OPERATOR_CHARS.contains(&ch) {
                self.operator(loc)
            } else {
                self.advance();
                Token::new(TokenKind::Special, ch, loc)
            };

            trace!(token = %token, line = loc.line, column = loc.column, "lexed token");
            return token;
        }
    }

    /// Location of a `/*` comment that ran to end of input, if any.
    pub fn unterminated_comment(&self) -> Option<SourceLocation> {
        self.unterminated_comment
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if KEYWORDS.contains(&ident.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, ident, loc)
    }

    /// Parse numeric literal. Digits and at most one `.`; a second dot ends
    /// the literal and is left for the next call.
    fn number_literal(&mut self, loc: SourceLocation) -> Token {
        let mut num_str = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            num_str.push(ch);
            self.advance();
        }

        Token::new(TokenKind::Number, num_str, loc)
    }

    /// Parse an operator of one or two characters.
    fn operator(&mut self, loc: SourceLocation) -> Token {
        let mut op = String::with_capacity(2);
        let Some(first) = self.advance() else {
            return Token::end_of_input(loc);
        };
        op.push(first);

        match self.peek() {
            Some('=') => {
                op.push('=');
                self.advance();
            }
            Some(next) if next == first && matches!(first, '&' | '|' | '+' | '-') => {
                op.push(next);
                self.advance();
            }
            _ => {}
        }

        Token::new(TokenKind::Operator, op, loc)
    }

    /// Skip a `//` or `/*` comment. The caller has already checked the
    /// two-character opener.
    fn skip_comment(&mut self) {
        if self.peek_ahead(1) == Some('/') {
            self.skip_line_comment();
        } else {
            self.skip_block_comment();
        }
    }

    /// Skip single-line comment, stopping before the newline
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip multi-line comment (/* ... */). An unclosed comment swallows the
    /// rest of the input; its start is remembered for diagnostics.
    fn skip_block_comment(&mut self) {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance(); // skip '*'
                self.advance(); // skip '/'
                return;
            }
            self.advance();
        }

        trace!(line = start_loc.line, column = start_loc.column, "unterminated block comment");
        self.unterminated_comment = Some(start_loc);
    }

    fn next_is_digit(&self) -> bool {
        self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit())
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize()
    }

    /// (kind, text) pairs, excluding the terminator.
    fn kinds_and_text(source: &str) -> Vec<(TokenKind, String)> {
        lex(source)
            .into_iter()
            .filter(|t| !t.is_end_of_input())
            .map(|t| (t.kind, t.text.unwrap_or_default()))
            .collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = lex("int main() { return 0; }");

        assert_eq!(tokens.len(), 10);
        assert!(tokens[0].matches(Some(TokenKind::Keyword), Some("int")));
        assert!(tokens[1].matches(Some(TokenKind::Identifier), Some("main")));
        assert!(tokens[2].matches(Some(TokenKind::Special), Some("(")));
        assert!(tokens[3].matches(Some(TokenKind::Special), Some(")")));
        assert!(tokens[4].matches(Some(TokenKind::Special), Some("{")));
        assert!(tokens[5].matches(Some(TokenKind::Keyword), Some("return")));
        assert!(tokens[6].matches(Some(TokenKind::Number), Some("0")));
        assert!(tokens[7].matches(Some(TokenKind::Special), Some(";")));
        assert!(tokens[8].matches(Some(TokenKind::Special), Some("}")));
        assert!(tokens[9].is_end_of_input());
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds_and_text("float double char if else while for return"),
            KEYWORDS[1..]
                .iter()
                .map(|k| tok(TokenKind::Keyword, k))
                .collect::<Vec<_>>()
        );
        assert_eq!(
            kinds_and_text("_tmp x1 Int returns"),
            vec![
                tok(TokenKind::Identifier, "_tmp"),
                tok(TokenKind::Identifier, "x1"),
                tok(TokenKind::Identifier, "Int"),
                tok(TokenKind::Identifier, "returns"),
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds_and_text("++ -- += -= == != && || <= >= *= /= %= |= &="),
            ["++", "--", "+=", "-=", "==", "!=", "&&", "||", "<=", ">=", "*=", "/=", "%=", "|=", "&="]
                .iter()
                .map(|op| tok(TokenKind::Operator, op))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_operators_never_exceed_two_chars() {
        assert_eq!(
            kinds_and_text("+++ &&& ===  **"),
            vec![
                tok(TokenKind::Operator, "++"),
                tok(TokenKind::Operator, "+"),
                tok(TokenKind::Operator, "&&"),
                tok(TokenKind::Operator, "&"),
                tok(TokenKind::Operator, "=="),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Operator, "*"),
                tok(TokenKind::Operator, "*"),
            ]
        );
    }

    #[test]
    fn test_equals_takes_priority_over_doubling() {
        // `+=` wins over `++` only because `=` is checked first
        assert_eq!(
            kinds_and_text("+=+"),
            vec![tok(TokenKind::Operator, "+="), tok(TokenKind::Operator, "+")]
        );
    }

    #[test]
    fn test_lone_bang_is_operator() {
        assert_eq!(
            kinds_and_text("!x"),
            vec![tok(TokenKind::Operator, "!"), tok(TokenKind::Identifier, "x")]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds_and_text("42 3.14 .5 7."),
            vec![
                tok(TokenKind::Number, "42"),
                tok(TokenKind::Number, "3.14"),
                tok(TokenKind::Number, ".5"),
                tok(TokenKind::Number, "7."),
            ]
        );
    }

    #[test]
    fn test_number_truncated_at_second_dot() {
        // The leftover dot is followed by a digit, so it opens a new literal
        assert_eq!(
            kinds_and_text("3.14.15"),
            vec![tok(TokenKind::Number, "3.14"), tok(TokenKind::Number, ".15")]
        );

        assert_eq!(
            kinds_and_text("3.14..5"),
            vec![
                tok(TokenKind::Number, "3.14"),
                tok(TokenKind::Special, "."),
                tok(TokenKind::Number, ".5"),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_become_special() {
        assert_eq!(
            kinds_and_text("@ # ~ $"),
            vec![
                tok(TokenKind::Special, "@"),
                tok(TokenKind::Special, "#"),
                tok(TokenKind::Special, "~"),
                tok(TokenKind::Special, "$"),
            ]
        );
    }

    #[test]
    fn test_comments() {
        let tokens = kinds_and_text("int x; // comment\nint y; /* block\ncomment */ int z;");

        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Keyword, "int"),
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::Special, ";"),
                tok(TokenKind::Keyword, "int"),
                tok(TokenKind::Identifier, "y"),
                tok(TokenKind::Special, ";"),
                tok(TokenKind::Keyword, "int"),
                tok(TokenKind::Identifier, "z"),
                tok(TokenKind::Special, ";"),
            ]
        );
    }

    #[test]
    fn test_line_comment_matches_removed_comment() {
        let with_comment = lex("int main(){int x=5;//comment\nint y=6;}");
        let without_comment = lex("int main(){int x=5;\nint y=6;}");

        assert_eq!(with_comment, without_comment);
    }

    #[test]
    fn test_slash_alone_is_operator() {
        assert_eq!(
            kinds_and_text("a / b"),
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Operator, "/"),
                tok(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let mut lexer = Lexer::new("int x;\n  /* never closed\nint y;");
        let tokens = lexer.tokenize();

        assert_eq!(tokens.len(), 4);
        assert!(tokens[3].is_end_of_input());
        assert_eq!(lexer.unterminated_comment(), Some(SourceLocation::new(2, 3)));
    }

    #[test]
    fn test_closed_block_comment_leaves_no_warning() {
        let mut lexer = Lexer::new("/* ok */ x");
        lexer.tokenize();
        assert_eq!(lexer.unterminated_comment(), None);
    }

    #[test]
    fn test_locations_are_lexeme_starts() {
        let tokens = lex("int  value\n  >= 10");
        let locs: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line(), t.column())).collect();

        assert_eq!(locs, vec![(1, 1), (1, 6), (2, 3), (2, 6), (2, 8)]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = lex("");
        assert_eq!(tokens, vec![Token::end_of_input(SourceLocation::new(1, 1))]);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("x\n");
        assert!(lexer.next_token().matches(Some(TokenKind::Identifier), Some("x")));

        let first = lexer.next_token();
        assert!(first.is_end_of_input());
        assert_eq!(first.location, SourceLocation::new(2, 1));

        for _ in 0..5 {
            assert_eq!(lexer.next_token(), first);
        }
    }

    #[test]
    fn test_deterministic() {
        let source = "int main(){ for (i = 0; i < 3.5; i += 1) { x = y && z; } } @";
        assert_eq!(lex(source), lex(source));
    }

    #[test]
    fn test_terminates_on_malformed_input() {
        let source = "/* /* */ */ /*/ 1..2...3 !!= &|& ''";
        let tokens = lex(source);

        assert!(tokens.len() <= source.chars().count() + 1);
        assert_eq!(tokens.iter().filter(|t| t.is_end_of_input()).count(), 1);
    }

    #[test]
    fn test_positions_strictly_increase() {
        let tokens = lex("if (a<=b)\n{\n\tc = d || e;\n}");
        for pair in tokens.windows(2) {
            assert!(pair[0].location < pair[1].location);
        }
    }
}
