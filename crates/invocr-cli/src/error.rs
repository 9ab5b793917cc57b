//! Errors surfaced to the user on stderr.

use thiserror::Error;

use invocr_core::InvocrError;

/// Failure of a CLI invocation. The `Display` form is the exact stderr text.
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong number of arguments.
    #[error("Error: file path not specified\n{usage}")]
    Usage { usage: String },

    /// Building or encoding the record failed.
    #[error("Error: {0}")]
    Processing(#[from] InvocrError),

    /// Writing the record to stdout failed.
    #[error("Error: failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
