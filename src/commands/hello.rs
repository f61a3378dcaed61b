/// `hello` command: print "hello world" honoring the output format.
use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::cli::output::write_message;
use crate::commands::Registration;
use crate::error::CliError;
use crate::types::MessageOutput;

const NAME: &str = "hello";

/// Registry entry for `swarm-cli hello`.
pub(crate) fn registration() -> Registration {
    Registration { name: NAME, run }
}

/// Run `swarm-cli hello`.
///
/// Emits a diagnostic line (visible under `--verbose`), then writes the
/// message to stdout as plain text or as a compact JSON object depending on
/// `--output-format`.
///
/// # Errors
///
/// Returns `CliError::NoRunner` if invoked with a mismatched command
/// variant; unreachable through the registry.
fn run(command: &Command, ctx: &OutputCtx) -> Result<i32, CliError> {
    let Command::Hello = command else {
        return Err(CliError::NoRunner);
    };

    ctx.log("running hello");

    let output = MessageOutput {
        message: "hello world".to_owned(),
    };
    write_message(&output, ctx);
    Ok(0)
}
