//! Authenticated session
//!
//! What the home screen shows once login succeeds.

use crate::auth::AuthenticatedUser;
use crate::resources::{MessageKey, Messages};

/// An active session for an authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: AuthenticatedUser,
    welcome: String,
}

impl Session {
    pub fn new(user: AuthenticatedUser, messages: &Messages) -> Self {
        let welcome = messages.format(MessageKey::Welcome, &user.email);
        Self { user, welcome }
    }

    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    pub fn username(&self) -> &str {
        &self.user.email
    }

    /// Greeting shown on the home screen.
    pub fn welcome_message(&self) -> &str {
        &self.welcome
    }
}
