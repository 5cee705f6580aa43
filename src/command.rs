//! Command-line template for the external parser.
//!
//! The printed line is meant to be copied and run by hand against the
//! `obparser` binary; this module only formats it. The input string is
//! interpolated verbatim with no quoting or escaping, so an empty input
//! leaves two consecutive spaces between `-i` and `-o`.

/// Grammar file passed to `-g` unless overridden.
pub const DEFAULT_GRAMMAR: &str = "./tests/an_bn_cn";
/// Output file passed to `-o` unless overridden.
pub const DEFAULT_OUTPUT: &str = "tree.dot";

/// Paths interpolated into the parser command line.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub grammar: String,
    pub output: String,
}

impl Default for CommandSpec {
    fn default() -> Self {
        CommandSpec {
            grammar: DEFAULT_GRAMMAR.into(),
            output: DEFAULT_OUTPUT.into(),
        }
    }
}

/// Format the parser invocation with `input` as the `-i` argument.
pub fn format_command(spec: &CommandSpec, input: &str) -> String {
    format!(
        "./obparser -g {} -i {} -o {}",
        spec.grammar, input, spec.output
    )
}
