pub mod compile;
pub mod repl;

use renfa_compiler::Error;

/// Render a compilation error against the pattern it came from.
pub fn render_error(err: &Error, pattern: &str, colored: bool) -> String {
    err.diagnostics()
        .printer()
        .source(pattern)
        .colored(colored)
        .render()
}
