//! Authentication error types.

use thiserror::Error;

use crate::services::session::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account matches the username, password and role together.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The session could not be persisted.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}
