//! API errors.

use thiserror::Error;

use crate::types::GistFile;

/// Gist API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum GistError {
    /// Connection, timeout or network failure.
    #[error(transparent)]
    TransportError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// Server answered with 401.
    #[error("Invalid token")]
    AuthenticationError,

    /// A file was submitted without a filename.
    #[error("Filename undefined for file {file:?}")]
    ValidationError { file: GistFile },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `GistError`.
pub type Result<T, E = GistError> = core::result::Result<T, E>;
