//! Pre-parse validation of the pattern's character set.
//!
//! Runs before the parser, which assumes a clean token stream and performs
//! no character-class checks of its own.

use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::parser::lexer::{self, Token, TokenKind};

/// Checks a token stream for characters outside the recognized
/// alphabet/operator set, and rejects the empty pattern.
pub fn validate(source: &str, tokens: &[Token]) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    if source.is_empty() {
        diagnostics.report(DiagnosticKind::EmptyPattern, Span::point(0));
        return diagnostics;
    }

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Garbage) {
        diagnostics.report(DiagnosticKind::InvalidCharacter, token.span);
    }

    diagnostics
}

/// Whether `pattern` passes validation (non-empty and only known
/// characters). Structural errors like unbalanced parentheses are the
/// parser's concern, not this check's.
pub fn is_valid(pattern: &str) -> bool {
    let tokens = lexer::lex(pattern);
    !validate(pattern, &tokens).has_errors()
}
