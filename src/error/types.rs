//! Error types
//!
//! Defines the error kinds surfaced by the login flow and the application shell.

use std::fmt;
use std::io;

/// Login flow errors
///
/// Neither kind is fatal: both are shown to the user and editing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Shown inline under the email field.
    InvalidEmailFormat(String),
    /// Shown as the general error message.
    AuthenticationFailed(String),
}

impl LoginError {
    /// The user-facing message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            LoginError::InvalidEmailFormat(msg) | LoginError::AuthenticationFailed(msg) => {
                msg.as_str()
            }
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidEmailFormat(msg) => write!(f, "Invalid email: {}", msg),
            LoginError::AuthenticationFailed(msg) => write!(f, "Authentication failed: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

/// Application-level error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
