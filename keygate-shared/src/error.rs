/// Domain error types
///
/// The service deliberately keeps its error surface tiny: everything a
/// caller can get wrong collapses into one of two kinds. Authentication
/// failures always carry a generic message so that responses never reveal
/// whether a username exists, a password was wrong, or a token merely
/// expired.

/// Error type for the authentication domain
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials are missing, malformed, expired, mismatched, or refer
    /// to a user that no longer exists
    #[error("{0}")]
    Unauthenticated(String),

    /// A record with the same natural key already exists
    #[error("{0}")]
    AlreadyExists(String),
}

impl AuthError {
    /// Creates an authentication failure with the given message
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        AuthError::Unauthenticated(message.into())
    }

    /// Creates a duplicate-record failure with the given message
    pub fn already_exists(message: impl Into<String>) -> Self {
        AuthError::AlreadyExists(message.into())
    }
}
