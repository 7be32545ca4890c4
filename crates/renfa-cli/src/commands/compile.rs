//! One-shot compilation: pattern in, transition listing (or JSON) out.

use std::io::Read;
use std::process::ExitCode;

use crate::cli::CompileArgs;

use super::render_error;

pub fn run(args: CompileArgs) -> ExitCode {
    let pattern = match args.pattern {
        Some(p) => p,
        None => {
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read pattern from stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    match renfa_compiler::compile(&pattern) {
        Ok(nfa) => {
            if args.json {
                let json = serde_json::to_string_pretty(&nfa)
                    .expect("NFA serialization cannot fail");
                println!("{json}");
            } else {
                println!("{nfa}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{}",
                render_error(&err, &pattern, args.color.should_colorize())
            );
            ExitCode::FAILURE
        }
    }
}
