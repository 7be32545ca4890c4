//! Interactive host loop: one pattern per line until the quit sentinel.
//!
//! Every failure is recoverable here - a bad pattern prints its
//! diagnostics followed by the empty listing, and the loop keeps serving
//! input. Each compilation owns its own automaton; nothing is shared
//! between iterations.

use std::io::{self, BufRead};
use std::process::ExitCode;

use renfa_compiler::Nfa;

use crate::cli::ReplArgs;

use super::render_error;

const BANNER: &str = "Enter a regular expression over the alphabet a..z (E for the empty string).\n\
                      Operators: * (Kleene star), | (union), adjacency (concatenation), ( ) (grouping).\n\
                      :q to quit.";

pub fn run(args: ReplArgs) -> ExitCode {
    let colored = args.color.should_colorize();

    println!("{BANNER}");
    for line in io::stdin().lock().lines() {
        let pattern = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        };

        if pattern == ":q" || pattern == "QUIT" {
            break;
        }

        let nfa = match renfa_compiler::compile(&pattern) {
            Ok(nfa) => nfa,
            Err(err) => {
                eprintln!("{}", render_error(&err, &pattern, colored));
                // Rejected patterns still get the (empty) listing, so every
                // line of input produces one `NFA:` block.
                Nfa::empty()
            }
        };
        print!("\nNFA:\n{}", listing(&nfa));
    }

    ExitCode::SUCCESS
}

/// Transition listing with a trailing newline, or nothing for the
/// zero-state sentinel.
fn listing(nfa: &Nfa) -> String {
    if nfa.is_empty() {
        String::new()
    } else {
        format!("{nfa}\n")
    }
}
