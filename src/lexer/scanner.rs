//! Lexer for STLC source text.
//!
//! Produces one token at a time with a single character of lookahead.
//! The first lexical error aborts the stream; there is no resynchronization.

use crate::errors::LexError;
use crate::lexer::token::{Span, Token, TokenKind};

/// The lexer that tokenizes STLC source text on demand.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,

    // Position of the next unread character.
    current: usize,
    line: usize,
    column: usize,

    // Start of the token being scanned.
    start: usize,
    start_line: usize,
    start_column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current: 0,
            line: 1,
            column: 1,
            start: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Get the next token from the source.
    ///
    /// Once the input is exhausted this keeps returning `Eof` tokens, so a
    /// parser with one token of lookahead never faults at end of stream.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        match c {
            '\\' => Ok(self.make_token(TokenKind::Lambda)),
            '.' => Ok(self.make_token(TokenKind::Dot)),
            ':' => Ok(self.make_token(TokenKind::Colon)),
            '(' => Ok(self.make_token(TokenKind::LParen)),
            ')' => Ok(self.make_token(TokenKind::RParen)),
            '-' => {
                // '-' is only ever the first half of '->'. The error is
                // reported at the character following the dash.
                let span = self.peek_span();
                match self.peek() {
                    Some('>') => {
                        self.advance();
                        Ok(self.make_token(TokenKind::Arrow))
                    }
                    Some(next) => Err(LexError::new(
                        format!("unexpected character after '-': '{}'", next),
                        span,
                    )),
                    None => Err(LexError::new("unexpected eof after '-'", span)),
                }
            }
            '0'..='9' => Ok(self.scan_integer()),
            c if is_ident_start(c) => Ok(self.scan_identifier()),
            _ => Err(LexError::new(
                format!("unexpected character: '{}'", c),
                self.token_span(),
            )),
        }
    }

    /// Tokenize the entire source, stopping at `Eof` or the first error.
    pub fn scan_all(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn scan_integer(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.make_token(TokenKind::Int)
    }

    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];
        match TokenKind::keyword(lexeme) {
            Some(kind) => self.make_token(kind),
            None => self.make_token(TokenKind::Ident),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Span of the next unread character (empty at end of input).
    fn peek_span(&mut self) -> Span {
        let len = self.peek().map_or(0, char::len_utf8);
        Span::new(self.current, self.current + len, self.line, self.column)
    }

    fn token_span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_span(), &self.source[self.start..self.current])
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let scanner = Scanner::new(source);
        scanner
            .scan_all()
            .expect("scan should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn first_error(source: &str) -> LexError {
        let mut scanner = Scanner::new(source);
        loop {
            match scanner.next_token() {
                Ok(t) if t.kind == TokenKind::Eof => panic!("expected an error"),
                Ok(_) => continue,
                Err(e) => return e,
            }
        }
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds(r"\ . : ( ) ->"),
            vec![
                TokenKind::Lambda,
                TokenKind::Dot,
                TokenKind::Colon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Arrow,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("if then else true false Bool Int foo _bar x1"),
            vec![
                TokenKind::If,
                TokenKind::Then,
                TokenKind::Else,
                TokenKind::True,
                TokenKind::False,
                TokenKind::BoolType,
                TokenKind::IntType,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn token_positions() {
        let tokens = Scanner::new("(\\x:Bool. x) true").scan_all().unwrap();
        let positions: Vec<(usize, usize)> =
            tokens.iter().map(|t| (t.span.line, t.span.column)).collect();
        assert_eq!(
            positions,
            vec![
                (1, 1),
                (1, 2),
                (1, 3),
                (1, 4),
                (1, 5),
                (1, 9),
                (1, 11),
                (1, 12),
                (1, 14),
                (1, 18), // EOF sits one past the last character
            ]
        );
    }

    #[test]
    fn newline_resets_column() {
        let tokens = Scanner::new("true\n  42").scan_all().unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Int);
        assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 3));
    }

    #[test]
    fn eof_is_repeatable() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Ident);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn integer_lexeme_is_kept_as_text() {
        let tokens = Scanner::new("0420").scan_all().unwrap();
        assert_eq!(tokens[0].lexeme, "0420");
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(first_error("@").to_string(), "1:1: unexpected character: '@'");
        assert_eq!(
            first_error("true & false").to_string(),
            "1:6: unexpected character: '&'"
        );
        assert_eq!(
            first_error("true\n$").to_string(),
            "2:1: unexpected character: '$'"
        );
        assert_eq!(first_error("λ").to_string(), "1:1: unexpected character: 'λ'");
    }

    #[test]
    fn bare_dash_is_an_error() {
        assert_eq!(
            first_error("- 5").to_string(),
            "1:2: unexpected character after '-': ' '"
        );
        assert_eq!(
            first_error("-a").to_string(),
            "1:2: unexpected character after '-': 'a'"
        );
        assert_eq!(
            first_error(r"(\x:Int. x) -").to_string(),
            "1:14: unexpected eof after '-'"
        );
    }
}
