//! Mapping probe results to the process exit status.

use std::process::ExitCode;

use crate::Result;

/// Print the diagnostic for a failed probe and pick the exit status.
///
/// Success prints nothing. Failure prints exactly one line to stderr.
pub fn exit_code<T>(result: Result<T>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "probe failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
