/// Command dispatch: an ordered registry of subcommands, resolved by name.
pub mod echo;
pub mod hello;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::error::CliError;

/// Handler signature shared by every subcommand. The returned integer is
/// the process exit code (0 success, >2 reserved for command failures).
pub type Runner = fn(&Command, &OutputCtx) -> Result<i32, CliError>;

/// A registry entry binding a subcommand name to its run handler.
pub struct Registration {
    /// Subcommand name as it appears on the command line.
    pub name: &'static str,
    /// Handler invoked with the parsed invocation.
    pub run: Runner,
}

/// Build the subcommand registry.
///
/// Order matches the `Command` enum and controls help listing only; it has
/// no runtime semantics. The registry is a plain value built once in `main`
/// and threaded through dispatch.
#[must_use]
pub fn registry() -> Vec<Registration> {
    vec![echo::registration(), hello::registration()]
}

/// Dispatch a parsed `Command` to its registered handler.
///
/// # Errors
///
/// Returns `CliError::NoRunner` if the resolved command name has no entry
/// in the registry.
pub fn dispatch(
    registry: &[Registration],
    command: &Command,
    ctx: &OutputCtx,
) -> Result<i32, CliError> {
    let entry = registry
        .iter()
        .find(|r| r.name == command.name())
        .ok_or(CliError::NoRunner)?;
    (entry.run)(command, ctx)
}
