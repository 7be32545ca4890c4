//! Recursive descent over the LL(1) pattern grammar:
//!
//! ```text
//! union   := concat ('|' concat)*
//! concat  := term term*
//! term    := element '*'*
//! element := symbol | 'E' | '(' union ')'
//! ```
//!
//! Implicit concatenation falls out of the `concat` production: adjacent
//! elements with no operator between them compose sequentially. Both folds
//! are left-associative, matching the original left-to-right evaluation.

use renfa_core::Symbol;

use super::ast::Expr;
use super::lexer::{Token, TokenKind, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};

#[derive(Debug)]
pub struct ParseResult {
    /// `None` when the pattern was structurally broken; the diagnostics
    /// say why.
    pub expr: Option<Expr>,
    pub diagnostics: Diagnostics,
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    paren_depth: usize,
    diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            paren_depth: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn parse(mut self) -> ParseResult {
        let mut expr = self.parse_union();

        // A leftover token here can only be a `)` that closed nothing:
        // everything else is consumed by the grammar or already reported.
        if expr.is_some() && !self.at_end() {
            self.report_current(DiagnosticKind::UnmatchedCloseParen);
            expr = None;
        }

        ParseResult {
            expr,
            diagnostics: self.diagnostics,
        }
    }

    fn parse_union(&mut self) -> Option<Expr> {
        let mut lhs = self.parse_concat()?;
        while self.eat(TokenKind::Pipe) {
            let rhs = self.parse_concat()?;
            lhs = Expr::union(lhs, rhs);
        }
        Some(lhs)
    }

    fn parse_concat(&mut self) -> Option<Expr> {
        let mut lhs = self.parse_term()?;
        while self.at_element_start() {
            let rhs = self.parse_term()?;
            lhs = Expr::concat(lhs, rhs);
        }
        Some(lhs)
    }

    fn parse_term(&mut self) -> Option<Expr> {
        let mut expr = self.parse_element()?;
        while self.eat(TokenKind::Star) {
            expr = Expr::star(expr);
        }
        Some(expr)
    }

    fn parse_element(&mut self) -> Option<Expr> {
        match self.current() {
            Some(TokenKind::Symbol) => {
                let text = token_text(self.source, &self.tokens[self.pos]);
                let c = text.chars().next().expect("symbol token is one char");
                self.bump();
                Some(Expr::Literal(Symbol::Char(c)))
            }
            Some(TokenKind::Epsilon) => {
                self.bump();
                Some(Expr::Literal(Symbol::Epsilon))
            }
            Some(TokenKind::ParenOpen) => {
                let open_span = self.current_span();
                self.bump();
                self.paren_depth += 1;
                let inner = self.parse_union();
                self.paren_depth -= 1;
                let inner = inner?;
                if !self.eat(TokenKind::ParenClose) {
                    self.diagnostics
                        .report(DiagnosticKind::UnclosedParen, open_span);
                    return None;
                }
                Some(inner)
            }
            Some(TokenKind::Star) => {
                self.report_current(DiagnosticKind::StarWithoutOperand);
                None
            }
            Some(TokenKind::ParenClose) => {
                // Inside a group this is a missing operand (`()`); at the
                // top level the `)` closes nothing and is a balance error.
                let kind = if self.paren_depth == 0 {
                    DiagnosticKind::UnmatchedCloseParen
                } else {
                    DiagnosticKind::ExpectedExpression
                };
                self.report_current(kind);
                None
            }
            // `|`, garbage, or end of input where an operand belongs: the
            // dangling-operator cases.
            _ => {
                self.report_current(DiagnosticKind::ExpectedExpression);
                None
            }
        }
    }

    fn at_element_start(&self) -> bool {
        matches!(
            self.current(),
            Some(TokenKind::Symbol | TokenKind::Epsilon | TokenKind::ParenOpen)
        )
    }

    fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|t| t.span)
            .unwrap_or_else(|| Span::point(self.source.len() as u32))
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current() == Some(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn report_current(&mut self, kind: DiagnosticKind) {
        let span = self.current_span();
        self.diagnostics.report(kind, span);
    }
}
