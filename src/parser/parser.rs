//! Recursive descent parser for STLC.
//!
//! Grammar:
//! ```text
//! expr     := primary (primary)*                  -- application, left-assoc
//! primary  := '\' IDENT ':' type '.' expr         -- abstraction
//!           | '(' expr ')'
//!           | 'true' | 'false' | INT | IDENT
//!           | 'if' expr 'then' expr 'else' expr
//! type     := baseType ('->' type)?               -- right-assoc
//! baseType := 'Bool' | 'Int' | '(' type ')'
//! ```

use crate::errors::{Error, ParseError};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::parser::ast::Expr;
use crate::types::Ty;

/// The parser for STLC source text.
///
/// Tokens are pulled from the lexer on demand with one token of lookahead;
/// `cur` and `peek` are both primed before parsing starts.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    cur: Token,
    peek: Token,
}

/// Parse the input string and return the corresponding AST expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(source)?.parse()
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self, Error> {
        let mut scanner = Scanner::new(source);
        let cur = scanner.next_token()?;
        let peek = scanner.next_token()?;
        Ok(Self { scanner, cur, peek })
    }

    pub fn parse(mut self) -> Result<Expr, Error> {
        self.parse_expr()
    }

    fn bump(&mut self) -> Result<(), Error> {
        let next = self.scanner.next_token()?;
        self.cur = std::mem::replace(&mut self.peek, next);
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> Error {
        ParseError::new(message, self.cur.span).into()
    }

    /// Parse an expression, folding juxtaposed primaries into
    /// left-associative applications.
    fn parse_expr(&mut self) -> Result<Expr, Error> {
        let mut expr = self.parse_primary()?;

        while self.cur.kind.starts_expr() {
            let arg = self.parse_primary()?;
            let span = expr.span().merge(arg.span());
            expr = Expr::App {
                func: Box::new(expr),
                arg: Box::new(arg),
                span,
            };
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, Error> {
        match self.cur.kind {
            TokenKind::Lambda => self.parse_abstraction(),
            TokenKind::LParen => self.parse_grouping(),
            TokenKind::If => self.parse_if(),
            TokenKind::True => {
                let span = self.cur.span;
                self.bump()?;
                Ok(Expr::Bool { value: true, span })
            }
            TokenKind::False => {
                let span = self.cur.span;
                self.bump()?;
                Ok(Expr::Bool { value: false, span })
            }
            TokenKind::Int => {
                let span = self.cur.span;
                let text = self.cur.lexeme.clone();
                self.bump()?;
                // The lexer only produces digit runs here, but an
                // out-of-range literal still fails to decode.
                let value = text.parse::<i64>().map_err(|_| {
                    Error::from(ParseError::new(
                        format!("invalid integer literal: {}", text),
                        span,
                    ))
                })?;
                Ok(Expr::Int { value, span })
            }
            TokenKind::Ident => {
                let span = self.cur.span;
                let name = self.cur.lexeme.clone();
                self.bump()?;
                Ok(Expr::Var { name, span })
            }
            kind => Err(self.error(format!("unexpected token: {}", kind))),
        }
    }

    /// Parse a lambda abstraction: `\var:type. expr`
    fn parse_abstraction(&mut self) -> Result<Expr, Error> {
        let lambda_span = self.cur.span;
        self.bump()?;

        if self.cur.kind != TokenKind::Ident {
            return Err(self.error(format!(
                "expected identifier after '\\': {}",
                self.cur.kind
            )));
        }
        let param = self.cur.lexeme.clone();
        self.bump()?;

        if self.cur.kind != TokenKind::Colon {
            return Err(self.error(format!(
                "expected ':' after parameter name: {}",
                self.cur.kind
            )));
        }
        self.bump()?;

        let param_ty = self.parse_type()?;

        if self.cur.kind != TokenKind::Dot {
            return Err(self.error(format!(
                "expected '.' after parameter type: {}",
                self.cur.kind
            )));
        }
        self.bump()?;

        let body = self.parse_expr()?;
        let span = lambda_span.merge(body.span());
        Ok(Expr::Abs {
            param,
            param_ty,
            body: Box::new(body),
            span,
        })
    }

    /// Parse a parenthesized expression. The inner expression is returned
    /// as-is; grouping leaves no trace in the AST.
    fn parse_grouping(&mut self) -> Result<Expr, Error> {
        self.bump()?;
        let expr = self.parse_expr()?;

        if self.cur.kind != TokenKind::RParen {
            return Err(self.error(format!("expected ')': {}", self.cur.kind)));
        }
        self.bump()?;
        Ok(expr)
    }

    /// Parse a conditional: `if expr then expr else expr`
    fn parse_if(&mut self) -> Result<Expr, Error> {
        let if_span = self.cur.span;
        self.bump()?;

        let cond = self.parse_expr()?;

        if self.cur.kind != TokenKind::Then {
            return Err(self.error(format!("expected 'then': {}", self.cur.kind)));
        }
        self.bump()?;

        let then_branch = self.parse_expr()?;

        if self.cur.kind != TokenKind::Else {
            return Err(self.error(format!("expected 'else': {}", self.cur.kind)));
        }
        self.bump()?;

        let else_branch = self.parse_expr()?;
        let span = if_span.merge(else_branch.span());
        Ok(Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            span,
        })
    }

    /// Parse a type with a right-associative arrow.
    fn parse_type(&mut self) -> Result<Ty, Error> {
        let base = self.parse_base_type()?;

        if self.cur.kind == TokenKind::Arrow {
            self.bump()?;
            let to = self.parse_type()?;
            return Ok(Ty::func(base, to));
        }
        Ok(base)
    }

    fn parse_base_type(&mut self) -> Result<Ty, Error> {
        match self.cur.kind {
            TokenKind::BoolType => {
                self.bump()?;
                Ok(Ty::Bool)
            }
            TokenKind::IntType => {
                self.bump()?;
                Ok(Ty::Int)
            }
            TokenKind::LParen => {
                self.bump()?;
                let ty = self.parse_type()?;
                if self.cur.kind != TokenKind::RParen {
                    return Err(self.error(format!("expected ')': {}", self.cur.kind)));
                }
                self.bump()?;
                Ok(ty)
            }
            kind => Err(self.error(format!("unexpected token in type: {}", kind))),
        }
    }
}
