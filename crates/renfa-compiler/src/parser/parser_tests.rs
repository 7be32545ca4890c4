//! Parser tests: precedence, associativity, grouping, and the error
//! taxonomy (validation vs. structural failures).

use insta::assert_snapshot;

use super::lexer::{self, TokenKind};
use crate::{DiagnosticKind, Error, Expr};

fn parse_ok(pattern: &str) -> Expr {
    crate::parse(pattern).expect("pattern should parse")
}

fn parse_err(pattern: &str) -> Error {
    crate::parse(pattern).expect_err("pattern should be rejected")
}

fn error_kinds(pattern: &str) -> Vec<DiagnosticKind> {
    parse_err(pattern)
        .diagnostics()
        .iter()
        .map(|d| d.kind)
        .collect()
}

#[test]
fn lex_spans_cover_the_source() {
    let tokens = lexer::lex("a(b|c)*");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Symbol,
            TokenKind::ParenOpen,
            TokenKind::Symbol,
            TokenKind::Pipe,
            TokenKind::Symbol,
            TokenKind::ParenClose,
            TokenKind::Star,
        ]
    );
    assert_eq!(tokens[0].span.range(), 0..1);
    assert_eq!(tokens[6].span.range(), 6..7);
}

#[test]
fn lex_coalesces_garbage_runs() {
    let tokens = lexer::lex("a%%%b");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Symbol, TokenKind::Garbage, TokenKind::Symbol]
    );
    assert_eq!(tokens[1].span.range(), 1..4);
}

#[test]
fn single_literal() {
    assert_snapshot!(parse_ok("a"), @"a");
}

#[test]
fn epsilon_marker() {
    assert_snapshot!(parse_ok("E"), @"E");
}

#[test]
fn implicit_concatenation_is_left_associative() {
    assert_snapshot!(parse_ok("abc"), @"(concat (concat a b) c)");
}

#[test]
fn union_is_left_associative() {
    assert_snapshot!(parse_ok("a|b|c"), @"(union (union a b) c)");
}

#[test]
fn concatenation_binds_tighter_than_union() {
    assert_snapshot!(parse_ok("ab|cd"), @"(union (concat a b) (concat c d))");
}

#[test]
fn star_binds_tighter_than_concatenation() {
    assert_snapshot!(parse_ok("ab*"), @"(concat a (star b))");
}

#[test]
fn grouping_overrides_precedence() {
    assert_snapshot!(parse_ok("(ab)*"), @"(star (concat a b))");
    assert_snapshot!(parse_ok("a(b|c)*"), @"(concat a (star (union b c)))");
}

#[test]
fn adjacent_groups_concatenate() {
    assert_snapshot!(parse_ok("(a)(b)"), @"(concat a b)");
}

#[test]
fn doubled_star_nests() {
    assert_snapshot!(parse_ok("a**"), @"(star (star a))");
}

#[test]
fn epsilon_participates_in_operators() {
    assert_snapshot!(parse_ok("aE*b"), @"(concat (concat a (star E)) b)");
    assert_snapshot!(parse_ok("a|E"), @"(union a E)");
}

#[test]
fn empty_pattern_is_invalid_input() {
    let err = parse_err("");
    assert!(matches!(err, Error::InvalidPattern(_)));
    assert_eq!(error_kinds(""), vec![DiagnosticKind::EmptyPattern]);
}

#[test]
fn foreign_characters_are_invalid_input() {
    assert!(matches!(parse_err("1"), Error::InvalidPattern(_)));
    assert_eq!(error_kinds("a%b"), vec![DiagnosticKind::InvalidCharacter]);
}

#[test]
fn unclosed_paren_is_a_parse_failure() {
    let err = parse_err("(a");
    assert!(matches!(err, Error::ParseFailed(_)));
    assert_eq!(error_kinds("(a"), vec![DiagnosticKind::UnclosedParen]);
}

#[test]
fn excess_close_paren_is_a_parse_failure() {
    assert_eq!(error_kinds("a)"), vec![DiagnosticKind::UnmatchedCloseParen]);
    assert_eq!(
        error_kinds("(a|b))"),
        vec![DiagnosticKind::UnmatchedCloseParen]
    );
}

#[test]
fn leading_close_paren_is_unbalanced() {
    assert_eq!(error_kinds(")"), vec![DiagnosticKind::UnmatchedCloseParen]);
    assert_eq!(error_kinds(")a"), vec![DiagnosticKind::UnmatchedCloseParen]);
}

#[test]
fn dangling_union_operator() {
    assert_eq!(error_kinds("a|"), vec![DiagnosticKind::ExpectedExpression]);
    assert_eq!(error_kinds("|a"), vec![DiagnosticKind::ExpectedExpression]);
}

#[test]
fn star_with_nothing_to_repeat() {
    assert_eq!(error_kinds("*a"), vec![DiagnosticKind::StarWithoutOperand]);
}

#[test]
fn empty_group_needs_an_operand() {
    assert_eq!(error_kinds("()"), vec![DiagnosticKind::ExpectedExpression]);
}

#[test]
fn open_paren_at_end_of_input() {
    assert_eq!(error_kinds("a("), vec![DiagnosticKind::ExpectedExpression]);
}
