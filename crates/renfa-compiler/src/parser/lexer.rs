//! Lexer for the pattern language.
//!
//! Produces span-based tokens; text is sliced from the source only when
//! needed. Consecutive characters outside the alphabet/operator set are
//! coalesced into single `Garbage` tokens rather than producing one error
//! per character, which keeps the stream manageable for malformed input.

use logos::Logos;

use crate::diagnostics::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One alphabet character, `a..z`.
    #[regex("[a-z]")]
    Symbol,

    /// The empty-string marker.
    #[token("E")]
    Epsilon,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("*")]
    Star,

    #[token("|")]
    Pipe,

    /// Coalesced run of characters the language does not know.
    Garbage,
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes a pattern, coalescing lexer errors into `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, (start..end).into()));
                }
                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, (start..source.len()).into()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
