use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Parser)]
#[command(name = "renfa", bin_name = "renfa")]
#[command(about = "Compile regular expressions over a..z into Thompson NFAs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile one pattern and print its transition listing
    #[command(after_help = r#"EXAMPLES:
  renfa compile 'a(b|c)*'
  renfa compile --json 'ab|E'
  echo 'a*' | renfa compile"#)]
    Compile(CompileArgs),

    /// Interactive loop: one pattern per line, `:q` to quit
    Repl(ReplArgs),
}

#[derive(Args)]
pub struct CompileArgs {
    /// Pattern over `a..z`, `E`, `( ) * |` (read from stdin when omitted)
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Emit the automaton as JSON instead of the triple listing
    #[arg(long)]
    pub json: bool,

    /// Colorize diagnostics
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,
}

#[derive(Args)]
pub struct ReplArgs {
    /// Colorize diagnostics
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorChoice,
}
