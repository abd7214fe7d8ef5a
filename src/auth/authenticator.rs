//! Authenticator
//!
//! The boundary that decides whether a credential pair is accepted. The
//! bundled implementation compares against one configured pair; a network
//! backed implementation can be swapped in behind the same trait.

use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::credentials::Credentials;
use super::results::{AuthOutcome, AuthenticatedUser};
use crate::config::AuthConfig;
use crate::resources::{MessageKey, Messages};

/// Decides authentication success or failure. May suspend.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome;
}

/// Accepts exactly one configured email/password pair.
pub struct StaticAuthenticator {
    accepted: AuthConfig,
    invalid_credentials: String,
}

impl StaticAuthenticator {
    pub fn new(accepted: AuthConfig, messages: &Messages) -> Self {
        Self {
            accepted,
            invalid_credentials: messages.get(MessageKey::InvalidCredentials).to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome {
        if credentials.email == self.accepted.email
            && credentials.password == self.accepted.password
        {
            debug!("Credentials accepted for {}", credentials.email);
            AuthOutcome::Success(AuthenticatedUser {
                email: credentials.email.clone(),
                token: Uuid::new_v4().to_string(),
            })
        } else {
            debug!("Credentials rejected for {}", credentials.email);
            AuthOutcome::Failure(self.invalid_credentials.clone())
        }
    }
}

/// Login use case: forwards to the configured authenticator.
#[derive(Clone)]
pub struct LoginUseCase {
    authenticator: Arc<dyn Authenticator>,
}

impl LoginUseCase {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    pub async fn execute(&self, credentials: &Credentials) -> AuthOutcome {
        info!("Login attempt for {}", credentials.email);
        let outcome = self.authenticator.authenticate(credentials).await;
        match &outcome {
            AuthOutcome::Success(user) => info!("Login succeeded for {}", user.email),
            AuthOutcome::Failure(msg) => warn!("Login failed for {}: {}", credentials.email, msg),
        }
        outcome
    }
}
