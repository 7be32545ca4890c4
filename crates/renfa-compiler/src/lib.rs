//! Compiler for regular expressions to Thompson NFAs.
//!
//! This crate provides the compilation pipeline:
//! - `parser` - lexer and recursive-descent parser to an expression tree
//! - `validate` - alphabet/operator pre-checks
//! - `compile` - NFA construction (post-order walk driving the primitives)
//! - `diagnostics` - error reporting
//!
//! The input language is the alphabet `a..z`, `E` for the empty string, `|`
//! for union, adjacency for concatenation, `*` for Kleene star, and `( )`
//! for grouping.

pub mod compile;
pub mod diagnostics;
pub mod parser;
pub mod validate;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity, Span};
pub use parser::ast::Expr;
pub use renfa_core::{Nfa, StateId, Symbol, Transition};
pub use validate::is_valid;

/// Errors that can occur while compiling a pattern.
///
/// Every failure is a value returned to the caller; a bad pattern never
/// terminates the host process. The diagnostics carry spans into the
/// offending pattern for rendering.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The pattern failed validation (empty, or characters outside the
    /// alphabet/operator set). Detected before parsing; no automaton is
    /// built and the caller may continue with further input.
    #[error("invalid pattern: {} errors", .0.error_count())]
    InvalidPattern(Diagnostics),

    /// The pattern failed to parse (unbalanced parentheses, dangling
    /// operators). Fatal for this one compilation.
    #[error("pattern parsing failed with {} errors", .0.error_count())]
    ParseFailed(Diagnostics),
}

impl Error {
    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Error::InvalidPattern(d) | Error::ParseFailed(d) => d,
        }
    }
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse a pattern into its expression tree.
pub fn parse(pattern: &str) -> Result<Expr> {
    let tokens = parser::lexer::lex(pattern);

    let diagnostics = validate::validate(pattern, &tokens);
    if diagnostics.has_errors() {
        return Err(Error::InvalidPattern(diagnostics));
    }

    let result = parser::Parser::new(pattern, tokens).parse();
    match result.expr {
        Some(expr) if !result.diagnostics.has_errors() => Ok(expr),
        _ => Err(Error::ParseFailed(result.diagnostics)),
    }
}

/// Compile a pattern into an NFA accepting exactly its language.
pub fn compile(pattern: &str) -> Result<Nfa> {
    Ok(compile::build(&parse(pattern)?))
}
