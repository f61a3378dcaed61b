/// `echo` command: print the given text back deterministically.
use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::commands::Registration;
use crate::error::CliError;

const NAME: &str = "echo";

/// Registry entry for `swarm-cli echo`.
pub(crate) fn registration() -> Registration {
    Registration { name: NAME, run }
}

/// Run `swarm-cli echo`.
///
/// Writes the text verbatim to stdout with one trailing newline, regardless
/// of the selected output format.
///
/// # Errors
///
/// Returns `CliError::NoRunner` if invoked with a mismatched command
/// variant; unreachable through the registry.
fn run(command: &Command, _ctx: &OutputCtx) -> Result<i32, CliError> {
    let Command::Echo(args) = command else {
        return Err(CliError::NoRunner);
    };
    println!("{}", args.text);
    Ok(0)
}
