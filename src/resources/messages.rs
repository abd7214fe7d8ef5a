//! Message catalog
//!
//! Defines the keys for user-facing strings and the catalog that maps them to
//! text, with `{}` substitution for the welcome greeting.

use serde::Deserialize;

/// Placeholder replaced by [`Messages::format`].
const PLACEHOLDER: &str = "{}";

/// Names every string the login flow shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    InvalidCredentials,
    InvalidEmailFormat,
    Welcome,
    LoggedOut,
}

/// Message catalog
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
    pub invalid_credentials: String,
    pub invalid_email_format: String,
    /// `{}` is replaced with the user's email.
    pub welcome: String,
    pub logged_out: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_credentials: "Invalid credentials".to_string(),
            invalid_email_format: "Invalid email format".to_string(),
            welcome: "Welcome, {}!".to_string(),
            logged_out: "Logged out".to_string(),
        }
    }
}

impl Messages {
    /// Returns the raw string for `key`.
    pub fn get(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::InvalidCredentials => self.invalid_credentials.as_str(),
            MessageKey::InvalidEmailFormat => self.invalid_email_format.as_str(),
            MessageKey::Welcome => self.welcome.as_str(),
            MessageKey::LoggedOut => self.logged_out.as_str(),
        }
    }

    /// Returns the string for `key` with the first `{}` replaced by `arg`.
    pub fn format(&self, key: MessageKey, arg: &str) -> String {
        self.get(key).replacen(PLACEHOLDER, arg, 1)
    }
}
