/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};

/// swarm-cli — subcommand skeleton with deterministic output.
#[derive(Debug, Parser)]
#[command(
    name = "swarm-cli",
    about = "Swarm CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress diagnostics.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose diagnostics.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Select output format.
    #[arg(
        short = 'o',
        long,
        global = true,
        value_name = "FORMAT",
        default_value = "text"
    )]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text lines (human-readable).
    #[default]
    Text,
    /// Newline-delimited JSON: one compact object per line.
    Jsonl,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Echo text back deterministically.
    Echo(EchoArgs),
    /// Print 'hello world' with output-format control.
    Hello,
}

impl Command {
    /// The subcommand name as it appears on the command line, used as the
    /// registry key during dispatch.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Echo(_) => "echo",
            Self::Hello => "hello",
        }
    }
}

/// Arguments for `swarm-cli echo`.
#[derive(Debug, Parser)]
pub struct EchoArgs {
    /// Text to echo.
    pub text: String,
}
