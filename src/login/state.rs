//! Module `state`
//!
//! Defines `LoginState`, the UI-facing state of the login screen, and the
//! transitions the controller applies to it. Transitions are kept here so the
//! loading and logged-in invariants are enforced in one place.

use std::fmt;

use crate::auth::{AuthenticatedUser, Credentials};

/// Where the login flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Authenticating,
    Authenticated,
    Failed,
}

impl fmt::Display for LoginPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoginPhase::Idle => "idle",
            LoginPhase::Validating => "validating",
            LoginPhase::Authenticating => "authenticating",
            LoginPhase::Authenticated => "authenticated",
            LoginPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Snapshot of the login screen state.
///
/// `is_loading` is true only while an attempt is outstanding, and
/// `is_logged_in` only after a successful outcome, in which case `session`
/// holds the authenticated user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    email: String,
    password: String,
    is_loading: bool,
    error: Option<String>,
    email_error: Option<String>,
    is_logged_in: bool,
    phase: LoginPhase,
    session: Option<AuthenticatedUser>,
    attempt: u64,
}

impl LoginState {
    // --------------------
    // Getter methods
    // --------------------

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// General error message, set after a failed authentication.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Inline error for the email field.
    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&AuthenticatedUser> {
        self.session.as_ref()
    }

    // --------------------
    // Transitions
    // --------------------

    /// Edits of a field drop a stale failure back to idle. An outstanding or
    /// completed login keeps its phase.
    fn settle_after_edit(&mut self) {
        if matches!(self.phase, LoginPhase::Failed | LoginPhase::Validating) {
            self.phase = LoginPhase::Idle;
        }
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
        self.email_error = None;
        self.error = None;
        self.settle_after_edit();
    }

    pub(crate) fn set_password(&mut self, password: String) {
        self.password = password;
        self.error = None;
        self.settle_after_edit();
    }

    pub(crate) fn set_email_error(&mut self, email_error: Option<String>) {
        self.email_error = email_error;
    }

    /// Enters `Validating` unless an attempt is outstanding or the user is
    /// already logged in.
    pub(crate) fn start_validation(&mut self) -> bool {
        if self.is_loading || self.is_logged_in {
            return false;
        }
        self.phase = LoginPhase::Validating;
        true
    }

    /// Leaves `Validating` after the email was rejected.
    pub(crate) fn abandon_validation(&mut self) -> bool {
        if self.phase != LoginPhase::Validating {
            return false;
        }
        self.phase = LoginPhase::Idle;
        true
    }

    /// Starts an attempt unless one is outstanding or the user is already
    /// logged in. Returns the attempt id and the credentials to submit.
    pub(crate) fn begin_attempt(&mut self) -> Option<(u64, Credentials)> {
        if self.is_loading || self.is_logged_in {
            return None;
        }
        self.attempt += 1;
        self.is_loading = true;
        self.phase = LoginPhase::Authenticating;
        Some((
            self.attempt,
            Credentials::new(self.email.clone(), self.password.clone()),
        ))
    }

    /// Applies a success outcome. Returns false if the attempt is no longer
    /// current, in which case nothing changes.
    pub(crate) fn finish_success(&mut self, attempt: u64, user: AuthenticatedUser) -> bool {
        if attempt != self.attempt || !self.is_loading {
            return false;
        }
        self.is_loading = false;
        self.is_logged_in = true;
        self.error = None;
        self.phase = LoginPhase::Authenticated;
        self.session = Some(user);
        true
    }

    /// Applies a failure outcome. Returns false if the attempt is no longer
    /// current, in which case nothing changes.
    pub(crate) fn finish_failure(&mut self, attempt: u64, message: String) -> bool {
        if attempt != self.attempt || !self.is_loading {
            return false;
        }
        self.is_loading = false;
        self.is_logged_in = false;
        self.error = Some(message);
        self.phase = LoginPhase::Failed;
        true
    }

    /// Abandons an attempt whose outcome will never arrive. Returns false if
    /// the attempt is no longer current.
    pub(crate) fn abort_attempt(&mut self, attempt: u64) -> bool {
        if attempt != self.attempt || !self.is_loading {
            return false;
        }
        self.is_loading = false;
        self.phase = LoginPhase::Idle;
        true
    }

    /// Clears everything and invalidates any outstanding attempt. Returns the
    /// session that was active, if any.
    pub(crate) fn reset(&mut self) -> Option<AuthenticatedUser> {
        let session = self.session.take();
        let attempt = self.attempt + 1;
        *self = LoginState {
            attempt,
            ..LoginState::default()
        };
        session
    }
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .field("email_error", &self.email_error)
            .field("is_logged_in", &self.is_logged_in)
            .field("phase", &self.phase)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            email: "user@example.com".into(),
            token: "token".into(),
        }
    }

    #[test]
    fn test_default_state() {
        let state = LoginState::default();
        assert_eq!(state.email(), "");
        assert_eq!(state.password(), "");
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.email_error().is_none());
        assert!(!state.is_logged_in());
        assert_eq!(state.phase(), LoginPhase::Idle);
    }

    #[test]
    fn test_begin_attempt_guards_double_submit() {
        let mut state = LoginState::default();
        state.set_email("user@example.com".into());
        state.set_password("pw".into());

        let (attempt, creds) = state.begin_attempt().unwrap();
        assert_eq!(creds, Credentials::new("user@example.com", "pw"));
        assert!(state.is_loading());
        assert_eq!(state.phase(), LoginPhase::Authenticating);

        assert!(state.begin_attempt().is_none());

        assert!(state.finish_success(attempt, user()));
        assert!(state.begin_attempt().is_none());
    }

    #[test]
    fn test_stale_outcome_is_dropped_after_reset() {
        let mut state = LoginState::default();
        let (attempt, _) = state.begin_attempt().unwrap();

        state.reset();
        assert!(!state.finish_success(attempt, user()));
        assert!(!state.is_logged_in());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_abort_attempt_clears_loading() {
        let mut state = LoginState::default();
        let (attempt, _) = state.begin_attempt().unwrap();

        assert!(state.abort_attempt(attempt));
        assert!(!state.is_loading());
        assert_eq!(state.phase(), LoginPhase::Idle);
        assert!(!state.abort_attempt(attempt));
        assert!(state.begin_attempt().is_some());
    }

    #[test]
    fn test_failure_then_edit_returns_to_idle() {
        let mut state = LoginState::default();
        let (attempt, _) = state.begin_attempt().unwrap();
        assert!(state.finish_failure(attempt, "Invalid credentials".into()));
        assert_eq!(state.phase(), LoginPhase::Failed);
        assert_eq!(state.error(), Some("Invalid credentials"));

        state.set_password("again".into());
        assert!(state.error().is_none());
        assert_eq!(state.phase(), LoginPhase::Idle);
    }

    #[test]
    fn test_reset_returns_session() {
        let mut state = LoginState::default();
        let (attempt, _) = state.begin_attempt().unwrap();
        state.finish_success(attempt, user());

        assert_eq!(state.reset(), Some(user()));
        assert!(state.session().is_none());
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_debug_hides_password() {
        let mut state = LoginState::default();
        state.set_password("p@ssw0rd#1234".into());
        assert!(!format!("{:?}", state).contains("p@ssw0rd#1234"));
    }
}
