//! Lexing and parsing: pattern string → expression tree.

pub mod ast;
mod grammar;
pub mod lexer;

#[cfg(test)]
mod parser_tests;

pub use grammar::{ParseResult, Parser};
