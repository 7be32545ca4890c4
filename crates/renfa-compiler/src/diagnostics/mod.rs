//! Diagnostics: spans, severities, and a collection with a renderer.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use std::ops::Range;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

/// Byte span into the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-width span, used for end-of-input errors.
    pub fn point(at: u32) -> Self {
        Self::new(at, at)
    }

    pub fn range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    pub fn len(self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

/// Collection of diagnostic messages from validation and parsing.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<DiagnosticMessage>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a diagnostic with the kind's default message and severity.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) {
        self.push(DiagnosticMessage::new(kind, span));
    }

    pub fn push(&mut self, msg: DiagnosticMessage) {
        self.0.push(msg);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.0
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}

impl IntoIterator for Diagnostics {
    type Item = DiagnosticMessage;
    type IntoIter = std::vec::IntoIter<DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
