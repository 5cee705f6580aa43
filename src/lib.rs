//! obgen library crate
//!
//! This crate provides the core functionality for the `obgen` CLI, a
//! test-fixture generator for the `obparser` grammar tester. It is organized
//! into small modules: `generate` (count resolution and a^n b^n c^n pattern
//! construction), `command` (parser command-line formatting), and `clipboard`
//! (cross-platform clipboard helper). The binary `src/main.rs` calls
//! `obgen_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod command;
pub mod generate;

use clap::{ArgAction, Parser};

use crate::clipboard::copy_to_clipboard;
use crate::command::{format_command, CommandSpec, DEFAULT_GRAMMAR, DEFAULT_OUTPUT};
use crate::generate::{pattern, resolve_count};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repetition count for each of the 'a', 'b', 'c' runs. Absent or
    /// unparsable values silently fall back to 1000.
    #[arg(allow_hyphen_values = true)]
    count: Option<String>,

    /// Override the number of 'a' repetitions
    #[arg(long = "a-count")]
    a_count: Option<usize>,

    /// Override the number of 'b' repetitions
    #[arg(long = "b-count")]
    b_count: Option<usize>,

    /// Override the number of 'c' repetitions
    #[arg(long = "c-count")]
    c_count: Option<usize>,

    /// Grammar file interpolated into the printed command
    #[arg(short = 'g', long = "grammar", default_value = DEFAULT_GRAMMAR)]
    grammar: String,

    /// Output file interpolated into the printed command
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Copy the printed command to the clipboard
    #[arg(long = "clipboard", action = ArgAction::SetTrue)]
    clipboard: bool,
}

/// Run the obgen CLI.
///
/// Resolves the repetition count (default 1000 when the argument is absent or
/// unparsable), prints the `TImes <N>` diagnostic line, builds the
/// a^n b^n c^n input string, and prints the `obparser` command line with it
/// interpolated verbatim. The process always exits 0; bad count arguments are
/// absorbed into the default rather than reported.
pub fn run() {
    let cli = Cli::parse();

    let times = resolve_count(cli.count.as_deref());
    println!("TImes {}", times);

    let input = pattern(
        cli.a_count.unwrap_or(times),
        cli.b_count.unwrap_or(times),
        cli.c_count.unwrap_or(times),
    );
    let spec = CommandSpec {
        grammar: cli.grammar,
        output: cli.output,
    };
    let command = format_command(&spec, &input);
    println!("{}", command);

    if cli.clipboard && let Err(e) = copy_to_clipboard(&command) {
        eprintln!("warning: failed to copy to clipboard: {}", e);
    }
}
