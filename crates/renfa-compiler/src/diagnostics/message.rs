//! Diagnostic kinds and messages.

use std::fmt;

use super::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// What went wrong, ordered roughly by pipeline stage: validation kinds
/// first, then parse-structure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Character outside `{a..z, E, (, ), *, |}`.
    InvalidCharacter,
    /// The pattern is the empty string.
    EmptyPattern,
    /// `)` with no matching open `(`.
    UnmatchedCloseParen,
    /// `(` still open at end of input.
    UnclosedParen,
    /// An operand was required but `|`, `)`, or end of input was found.
    ExpectedExpression,
    /// `*` with no expression before it.
    StarWithoutOperand,
}

impl DiagnosticKind {
    pub fn default_severity(self) -> Severity {
        Severity::Error
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "character outside the alphabet `a..z E ( ) * |`",
            Self::EmptyPattern => "empty pattern",
            Self::UnmatchedCloseParen => "`)` without a matching `(`",
            Self::UnclosedParen => "unclosed `(`",
            Self::ExpectedExpression => "expected a symbol, `E`, or `(`",
            Self::StarWithoutOperand => "`*` needs an expression to repeat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub severity: Severity,
    pub message: String,
}

impl DiagnosticMessage {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            span,
            severity: kind.default_severity(),
            message: kind.default_message().to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Plain one-line form, used when no source is attached to the printer.
impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{label}: {}", self.message)
    }
}
