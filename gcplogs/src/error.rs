use serde_json::Error as JsonError;
use std::io::Error as IOError;
use std::process::ExitStatus;
use thiserror::Error;

/// Common error type.
///
/// These errors stay inside the discovery steps; [`default_project_id`] and
/// [`Tracer::from_request`] turn them into an empty string.
///
/// [`default_project_id`]: crate::default_project_id
/// [`Tracer::from_request`]: crate::Tracer::from_request
#[derive(Error, Debug)]
pub enum Error {
    /// Missing environment variable.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    /// Missing field in a parsed document.
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// I/O error.
    #[error("IO Error")]
    IO(#[from] IOError),
    /// JSON error.
    #[error("Json Error")]
    Json(#[from] JsonError),
    /// Malformed `X-Cloud-Trace-Context` value.
    #[error("bad trace header: {0}")]
    BadHeader(String),
    /// Program not found on the search path.
    #[error("command not found: {0}")]
    CommandNotFound(String),
    /// Program exited unsuccessfully.
    #[error("command {program} failed: {status}")]
    CommandFailed {
        /// Program name.
        program: String,
        /// Exit status.
        status: ExitStatus,
    },
}

/// Type alias for Results which may return [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
