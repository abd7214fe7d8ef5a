//! Login flow controller
//!
//! Owns the [`LoginState`] and sequences email validation then
//! authentication. The state is published through a `watch` channel so any
//! number of observers see every mutation; the controller is the only writer.

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::watch;

use super::session::Session;
use super::state::LoginState;
use crate::auth::{
    AuthOutcome, AuthenticatedUser, EmailValidator, LoginUseCase, PatternEmailValidator,
    StaticAuthenticator,
};
use crate::config::AppConfig;
use crate::error::LoginError;
use crate::resources::{MessageKey, Messages};

/// Outcome of a call to [`LoginController::login`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAttempt {
    Authenticated(AuthenticatedUser),
    Failed(LoginError),
    /// An attempt was already outstanding or the user is logged in.
    Ignored,
    /// The state was reset by a logout before the outcome arrived.
    Cancelled,
}

pub struct LoginController {
    use_case: LoginUseCase,
    validator: Arc<dyn EmailValidator>,
    messages: Messages,
    state: watch::Sender<LoginState>,
}

impl LoginController {
    pub fn new(
        use_case: LoginUseCase,
        validator: Arc<dyn EmailValidator>,
        messages: Messages,
    ) -> Self {
        let (state, _) = watch::channel(LoginState::default());
        Self {
            use_case,
            validator,
            messages,
            state,
        }
    }

    /// Wires the default validator and the static authenticator from
    /// configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let authenticator = StaticAuthenticator::new(config.auth, &config.messages);
        Self::new(
            LoginUseCase::new(Arc::new(authenticator)),
            Arc::new(PatternEmailValidator),
            config.messages,
        )
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoginState {
        self.state.borrow().clone()
    }

    /// Returns a receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<LoginState> {
        self.state.subscribe()
    }

    /// The active session, once logged in.
    pub fn session(&self) -> Option<Session> {
        self.state
            .borrow()
            .session()
            .map(|user| Session::new(user.clone(), &self.messages))
    }

    pub fn on_email_change(&self, email: impl Into<String>) {
        let email = email.into();
        self.state.send_modify(|state| state.set_email(email));
    }

    pub fn on_password_change(&self, password: impl Into<String>) {
        let password = password.into();
        self.state.send_modify(|state| state.set_password(password));
    }

    /// Validates the email field, as when it loses focus.
    ///
    /// An empty email counts as valid so a pristine form shows no error.
    pub fn validate_email(&self) -> bool {
        let mut valid = true;
        self.state.send_if_modified(|state| {
            let email_error = self.email_error_for(state.email());
            valid = email_error.is_none();
            if state.email_error() == email_error.as_deref() {
                return false;
            }
            state.set_email_error(email_error);
            true
        });
        valid
    }

    /// Submits the form: validates the email, then authenticates.
    ///
    /// Dropping the returned future while the authenticator is pending
    /// abandons the attempt and clears the loading flag.
    pub async fn login(&self) -> LoginAttempt {
        if !self.state.send_if_modified(LoginState::start_validation) {
            debug!("Login ignored: attempt outstanding or already logged in");
            return LoginAttempt::Ignored;
        }

        // Validation and the credential snapshot happen under one write so
        // the submitted email is the one that was checked.
        let mut rejected = None;
        let mut started = None;
        self.state.send_if_modified(|state| {
            let email_error = self.email_error_for(state.email());
            let changed = state.email_error() != email_error.as_deref();
            if let Some(msg) = email_error {
                state.set_email_error(Some(msg.clone()));
                state.abandon_validation();
                rejected = Some(msg);
                return true;
            }
            state.set_email_error(None);
            started = state.begin_attempt();
            changed || started.is_some()
        });

        if let Some(msg) = rejected {
            return LoginAttempt::Failed(LoginError::InvalidEmailFormat(msg));
        }
        let Some((attempt, credentials)) = started else {
            debug!("Login ignored: attempt started concurrently");
            return LoginAttempt::Ignored;
        };

        let mut guard = AttemptGuard {
            state: &self.state,
            attempt,
            armed: true,
        };
        let outcome = self.use_case.execute(&credentials).await;
        guard.armed = false;

        match outcome {
            AuthOutcome::Success(user) => {
                let session = user.clone();
                if self
                    .state
                    .send_if_modified(|state| state.finish_success(attempt, session))
                {
                    info!("Logged in as {}", user.email);
                    LoginAttempt::Authenticated(user)
                } else {
                    warn!("Discarding login result for {}: state was reset", user.email);
                    LoginAttempt::Cancelled
                }
            }
            AuthOutcome::Failure(message) => {
                let error = message.clone();
                if self
                    .state
                    .send_if_modified(|state| state.finish_failure(attempt, error))
                {
                    LoginAttempt::Failed(LoginError::AuthenticationFailed(message))
                } else {
                    LoginAttempt::Cancelled
                }
            }
        }
    }

    /// Ends the session and clears the form. Returns the user that was
    /// logged in, if any.
    pub fn logout(&self) -> Option<AuthenticatedUser> {
        let mut previous = None;
        self.state.send_modify(|state| previous = state.reset());
        if let Some(user) = &previous {
            info!("Logged out {}", user.email);
        }
        previous
    }

    /// Message shown after a logout.
    pub fn logged_out_message(&self) -> &str {
        self.messages.get(MessageKey::LoggedOut)
    }

    fn email_error_for(&self, email: &str) -> Option<String> {
        if email.is_empty() || self.validator.is_valid_email(email) {
            return None;
        }
        debug!("Rejected email format: {}", email);
        Some(self.messages.get(MessageKey::InvalidEmailFormat).to_string())
    }
}

/// Abandons the attempt if `login` is dropped before the outcome arrives.
struct AttemptGuard<'a> {
    state: &'a watch::Sender<LoginState>,
    attempt: u64,
    armed: bool,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let attempt = self.attempt;
        if self
            .state
            .send_if_modified(|state| state.abort_attempt(attempt))
        {
            warn!("Login attempt {} abandoned before completion", attempt);
        }
    }
}
