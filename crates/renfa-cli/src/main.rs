mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Compile(args) => commands::compile::run(args),
        Command::Repl(args) => commands::repl::run(args),
    }
}
