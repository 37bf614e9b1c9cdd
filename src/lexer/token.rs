//! Token definitions for the STLC lexer.

use std::fmt;

/// A token with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            lexeme: lexeme.into(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Source location information.
///
/// `start`/`end` are byte offsets into the source, used for pretty error
/// reports. `line` and `column` are 1-based and are what every diagnostic
/// message prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Combine two spans, keeping the line/column of the leftmost one.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line.min(other.line),
            column: if self.line <= other.line {
                self.column
            } else {
                other.column
            },
        }
    }
}

/// All token types in the STLC surface syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Ident,
    Int,
    True,
    False,
    If,
    Then,
    Else,
    BoolType,
    IntType,
    Lambda, // \
    Dot,    // .
    Colon,  // :
    Arrow,  // ->
    LParen, // (
    RParen, // )
}

impl TokenKind {
    /// Returns the keyword kind for an identifier run, if it is a keyword.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "then" => Some(TokenKind::Then),
            "else" => Some(TokenKind::Else),
            "Bool" => Some(TokenKind::BoolType),
            "Int" => Some(TokenKind::IntType),
            _ => None,
        }
    }

    /// True for the kinds that can begin a primary expression.
    pub fn starts_expr(self) -> bool {
        matches!(
            self,
            TokenKind::Lambda
                | TokenKind::LParen
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Int
                | TokenKind::Ident
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Ident => write!(f, "Ident"),
            TokenKind::Int => write!(f, "Int"),
            TokenKind::True => write!(f, "True"),
            TokenKind::False => write!(f, "False"),
            TokenKind::If => write!(f, "If"),
            TokenKind::Then => write!(f, "Then"),
            TokenKind::Else => write!(f, "Else"),
            TokenKind::BoolType => write!(f, "BoolType"),
            TokenKind::IntType => write!(f, "IntType"),
            TokenKind::Lambda => write!(f, "Lambda"),
            TokenKind::Dot => write!(f, "Dot"),
            TokenKind::Colon => write!(f, "Colon"),
            TokenKind::Arrow => write!(f, "Arrow"),
            TokenKind::LParen => write!(f, "LParen"),
            TokenKind::RParen => write!(f, "RParen"),
        }
    }
}
