//! Error types used across launchcheck.
use thiserror::Error;

/// High-level error categories for path validation and file probes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A candidate path resolved outside the base directory.
    #[error("access denied")]
    AccessDenied,
    /// A configuration path was unusable (e.g. a relative base directory).
    #[error("invalid path")]
    InvalidPath,
    /// A filesystem read failed after validation succeeded.
    #[error("io error")]
    Io,
}

/// Structured error with a kind and human message.
///
/// Callers branch on `kind`, never on the message text.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
