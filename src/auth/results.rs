//! Authentication result types
//!
//! Defines the outcome returned by an [`Authenticator`](super::Authenticator).

/// A successfully authenticated user, held in memory for the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    /// Opaque session token
    pub token: String,
}

/// Result of an authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success(AuthenticatedUser),
    /// Carries the user-facing failure message.
    Failure(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }
}
