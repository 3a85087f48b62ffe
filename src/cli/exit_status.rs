use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): The file was rewritten (or the command completed)
/// - `Failure` (1): The input could not be parsed, nothing was written
/// - `Error` (2): Command failed due to internal error (I/O error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The file was rewritten (or the command completed).
    Success,
    /// The input could not be parsed, nothing was written.
    Failure,
    /// Command failed due to internal error (I/O error, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
