/// Errors from the dispatch layer.
use thiserror::Error;

/// Errors that can occur while dispatching a parsed invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// A recognized command resolved to no registry entry. Defensive;
    /// unreachable as long as every `Command` variant is registered.
    #[error("no runner bound")]
    NoRunner,
}

/// Exit code mapping for `CliError` variants.
impl CliError {
    /// Return the CLI exit code for this error.
    ///
    /// Usage failures and binding failures share code 2; codes above 2 are
    /// reserved for subcommand-specific failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoRunner => 2,
        }
    }
}
