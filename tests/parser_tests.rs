//! Integration tests for the STLC parser.

use stlc::{Expr, Ty};

fn parse(source: &str) -> Expr {
    stlc::parse(source).expect("parse should succeed")
}

fn parse_error(source: &str) -> String {
    stlc::parse(source).expect_err("expected a parse error").to_string()
}

fn var_name(expr: &Expr) -> &str {
    match expr {
        Expr::Var { name, .. } => name,
        other => panic!("expected a variable, got {:?}", other),
    }
}

#[test]
fn literals() {
    assert!(matches!(parse("42"), Expr::Int { value: 42, .. }));
    assert!(matches!(parse("0"), Expr::Int { value: 0, .. }));
    assert!(matches!(parse("true"), Expr::Bool { value: true, .. }));
    assert!(matches!(parse("false"), Expr::Bool { value: false, .. }));
}

#[test]
fn variable() {
    let expr = parse("foo");
    assert_eq!(var_name(&expr), "foo");
    assert_eq!((expr.span().line, expr.span().column), (1, 1));
}

#[test]
fn abstraction() {
    let Expr::Abs {
        param,
        param_ty,
        body,
        span,
    } = parse(r"\x:Int. x")
    else {
        panic!("expected an abstraction");
    };
    assert_eq!(param, "x");
    assert_eq!(param_ty, Ty::Int);
    assert_eq!(var_name(&body), "x");
    assert_eq!((span.line, span.column), (1, 1));
}

#[test]
fn application_is_left_associative() {
    // f x y parses as (f x) y
    let Expr::App { func, arg, .. } = parse("f x y") else {
        panic!("expected an application");
    };
    assert_eq!(var_name(&arg), "y");

    let Expr::App { func, arg, .. } = *func else {
        panic!("expected a nested application");
    };
    assert_eq!(var_name(&func), "f");
    assert_eq!(var_name(&arg), "x");
}

#[test]
fn application_span_is_the_left_operand() {
    let expr = parse("  f x");
    assert_eq!((expr.span().line, expr.span().column), (1, 3));
}

#[test]
fn arrow_type_is_right_associative() {
    // Int->Int->Int is Int->(Int->Int)
    let Expr::Abs { param_ty, .. } = parse(r"\f:Int->Int->Int. f") else {
        panic!("expected an abstraction");
    };
    assert_eq!(
        param_ty,
        Ty::func(Ty::Int, Ty::func(Ty::Int, Ty::Int))
    );
}

#[test]
fn parenthesized_type_overrides_associativity() {
    let Expr::Abs { param_ty, .. } = parse(r"\f:(Int->Int)->Bool. f") else {
        panic!("expected an abstraction");
    };
    assert_eq!(
        param_ty,
        Ty::func(Ty::func(Ty::Int, Ty::Int), Ty::Bool)
    );
}

#[test]
fn grouping_leaves_no_trace() {
    let Expr::App { func, arg, .. } = parse(r"(\x:Bool. x) true") else {
        panic!("expected an application");
    };
    assert!(matches!(*func, Expr::Abs { .. }));
    assert!(matches!(*arg, Expr::Bool { value: true, .. }));
}

#[test]
fn conditional() {
    let Expr::If {
        cond,
        then_branch,
        else_branch,
        span,
    } = parse("if true then 1 else 0")
    else {
        panic!("expected a conditional");
    };
    assert!(matches!(*cond, Expr::Bool { value: true, .. }));
    assert!(matches!(*then_branch, Expr::Int { value: 1, .. }));
    assert!(matches!(*else_branch, Expr::Int { value: 0, .. }));
    assert_eq!((span.line, span.column), (1, 1));
}

#[test]
fn lambda_body_extends_right() {
    // The body of a lambda is everything to the right of the dot.
    let Expr::Abs { body, .. } = parse(r"\x:Int. add x 1") else {
        panic!("expected an abstraction");
    };
    assert!(matches!(*body, Expr::App { .. }));
}

#[test]
fn trailing_tokens_are_left_unconsumed() {
    // The parser stops at the first token that cannot start a primary.
    assert!(matches!(parse("42)"), Expr::Int { value: 42, .. }));
}

#[test]
fn unexpected_token_errors() {
    assert_eq!(parse_error(""), "1:1: unexpected token: EOF");
    assert_eq!(parse_error(")"), "1:1: unexpected token: RParen");
    assert_eq!(parse_error("then"), "1:1: unexpected token: Then");
}

#[test]
fn abstraction_errors() {
    assert_eq!(parse_error("\\"), "1:2: expected identifier after '\\': EOF");
    assert_eq!(
        parse_error(r"\42:Int. x"),
        "1:2: expected identifier after '\\': Int"
    );
    assert_eq!(
        parse_error(r"\x Int. x"),
        "1:4: expected ':' after parameter name: IntType"
    );
    assert_eq!(
        parse_error(r"\x:Int x"),
        "1:8: expected '.' after parameter type: Ident"
    );
}

#[test]
fn grouping_errors() {
    assert_eq!(parse_error("(42"), "1:4: expected ')': EOF");
    assert_eq!(parse_error(r"\x:(Int. x"), "1:8: expected ')': Dot");
}

#[test]
fn conditional_errors() {
    assert_eq!(parse_error("if true 1 else 2"), "1:9: expected 'then': Int");
    assert_eq!(parse_error("if true then 1"), "1:15: expected 'else': EOF");
}

#[test]
fn type_errors() {
    assert_eq!(
        parse_error(r"\x:foo. x"),
        "1:4: unexpected token in type: Ident"
    );
    assert_eq!(
        parse_error(r"\x:. x"),
        "1:4: unexpected token in type: Dot"
    );
}

#[test]
fn lex_errors_surface_through_parse() {
    assert_eq!(parse_error("@"), "1:1: unexpected character: '@'");
    assert_eq!(parse_error("1 + 2"), "1:3: unexpected character: '+'");
    assert_eq!(parse_error("1 - 2"), "1:4: unexpected character after '-': ' '");
}

#[test]
fn out_of_range_integer_literal() {
    // Far past i64::MAX; lexes as a digit run but fails to decode.
    assert_eq!(
        parse_error("99999999999999999999"),
        "1:1: invalid integer literal: 99999999999999999999"
    );
}
