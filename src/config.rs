//! Configuration management for login-flow
//!
//! Loads the accepted credential pair and the user-facing messages from
//! `config.toml` with environment overrides. Credentials have no built-in
//! default and must be supplied by one of the two sources.

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;

use crate::auth::is_valid_email;
use crate::resources::Messages;

/// Environment variable prefix, e.g. `LOGIN_FLOW__AUTH__PASSWORD`
const ENV_PREFIX: &str = "LOGIN_FLOW";
const ENV_SEPARATOR: &str = "__";

/// Configuration file looked up in the working directory (extension optional)
const CONFIG_FILE: &str = "config";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,

    #[serde(default)]
    pub messages: Messages,
}

/// The single credential pair the static authenticator accepts
#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .prefix_separator(ENV_SEPARATOR)
                        .separator(ENV_SEPARATOR),
                ),
        )
    }

    /// Load configuration from a TOML document
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.auth.email.is_empty() {
            return Err(config::ConfigError::Message(
                "auth.email cannot be empty".into(),
            ));
        }

        if !is_valid_email(&self.auth.email) {
            return Err(config::ConfigError::Message(format!(
                "auth.email is not a valid email address: {}",
                self.auth.email
            )));
        }

        if self.auth.password.is_empty() {
            return Err(config::ConfigError::Message(
                "auth.password cannot be empty".into(),
            ));
        }

        if self.messages.invalid_credentials.is_empty()
            || self.messages.invalid_email_format.is_empty()
        {
            return Err(config::ConfigError::Message(
                "error messages cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_default_messages() {
        let config = AppConfig::from_toml(
            r#"
            [auth]
            email = "user@example.com"
            password = "correct-pass"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.email, "user@example.com");
        assert_eq!(config.auth.password, "correct-pass");
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn test_partial_messages_override() {
        let config = AppConfig::from_toml(
            r#"
            [auth]
            email = "user@example.com"
            password = "correct-pass"

            [messages]
            invalid_credentials = "Credenciales inválidas"
            "#,
        )
        .unwrap();

        assert_eq!(config.messages.invalid_credentials, "Credenciales inválidas");
        assert_eq!(config.messages.invalid_email_format, "Invalid email format");
    }

    #[test]
    fn test_missing_credentials_rejected() {
        assert!(AppConfig::from_toml("[messages]\nwelcome = \"Hi {}\"").is_err());
    }

    #[test]
    fn test_invalid_configured_email_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [auth]
            email = "not-an-email"
            password = "correct-pass"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("not a valid email"));
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [auth]
            email = "user@example.com"
            password = ""
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("auth.password"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let auth = AuthConfig {
            email: "user@example.com".into(),
            password: "correct-pass".into(),
        };
        let printed = format!("{:?}", auth);
        assert!(!printed.contains("correct-pass"));
        assert!(printed.contains("user@example.com"));
    }
}
