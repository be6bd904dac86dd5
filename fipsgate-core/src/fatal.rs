//! Process termination for unrecoverable conditions.

use crate::error::CoreError;

/// Reports `err` and aborts the process.
///
/// The message goes to `tracing` and to stderr, so it is visible with or
/// without a subscriber. Never returns and never unwinds.
pub fn terminate(err: &CoreError) -> ! {
    tracing::error!(error = %err, "fatal provider condition, aborting");
    eprintln!("{err}");
    std::process::abort()
}
