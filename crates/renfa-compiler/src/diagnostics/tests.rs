//! Unit tests for the diagnostics collection and printer.

use super::{DiagnosticKind, Diagnostics, Span};

#[test]
fn empty_collection_has_no_errors() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.error_count(), 0);
}

#[test]
fn report_uses_default_message_and_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnclosedParen, Span::new(0, 1));

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());

    let msg = &diagnostics.as_slice()[0];
    assert_eq!(msg.kind, DiagnosticKind::UnclosedParen);
    assert_eq!(msg.message, "unclosed `(`");
}

#[test]
fn plain_rendering_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyPattern, Span::point(0));
    diagnostics.report(DiagnosticKind::UnclosedParen, Span::new(0, 1));

    let rendered = diagnostics.printer().render();
    assert_eq!(
        rendered,
        "error: empty pattern\nerror: unclosed `(`"
    );
}

#[test]
fn annotated_rendering_mentions_the_span() {
    let source = "a%b";
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::InvalidCharacter, Span::new(1, 2));

    let rendered = diagnostics.printer().source(source).render();
    assert!(rendered.contains("a%b"), "snippet missing: {rendered}");
    assert!(
        rendered.contains("character outside the alphabet"),
        "message missing: {rendered}"
    );
}

#[test]
fn end_of_input_span_is_widened_within_bounds() {
    let source = "a|";
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::ExpectedExpression, Span::point(2));

    // Must not panic on the zero-width span at the end of the source.
    let rendered = diagnostics.printer().source(source).render();
    assert!(rendered.contains("expected a symbol"));
}
