#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! swarm-cli — subcommand skeleton with deterministic output.
//!
//! How to add a new subcommand:
//! - Create `src/commands/<name>.rs` with a `registration()` returning the
//!   command name and run handler.
//! - Add a variant (and args struct, if any) to `Command` in `src/cli/args.rs`
//!   and map it in `Command::name`.
//! - Register it in `commands::registry()` alongside the existing commands.
//!
//! Conventions: deterministic stdout, diagnostics to stderr, exit codes
//! 0/2/>2, and the shared flags `--quiet/--verbose/--output-format text|jsonl`.

mod cli;
mod commands;
mod error;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx};

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output_format, cli.quiet, cli.verbose);

    let registry = commands::registry();
    match commands::dispatch(&registry, &cli.command, &ctx) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
