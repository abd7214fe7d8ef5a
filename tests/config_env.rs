// Kept in its own test binary: the environment is process-wide, so this file
// holds a single test and nothing else reads these variables concurrently.

use login_flow::LoginController;
use login_flow::config::AppConfig;
use login_flow::login::LoginAttempt;

const EMAIL_VAR: &str = "LOGIN_FLOW__AUTH__EMAIL";
const PASSWORD_VAR: &str = "LOGIN_FLOW__AUTH__PASSWORD";

/// Removes the overrides even if an assertion fails.
struct EnvOverride;

impl EnvOverride {
    fn set(email: &str, password: &str) -> Self {
        // SAFETY: the only test in this binary; no other thread touches the environment.
        unsafe {
            std::env::set_var(EMAIL_VAR, email);
            std::env::set_var(PASSWORD_VAR, password);
        }
        EnvOverride
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        // SAFETY: as above.
        unsafe {
            std::env::remove_var(EMAIL_VAR);
            std::env::remove_var(PASSWORD_VAR);
        }
    }
}

#[tokio::test]
async fn test_environment_overrides_configured_credentials() {
    let _env = EnvOverride::set("ops@example.org", "env-secret");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.auth.email, "ops@example.org");
    assert_eq!(config.auth.password, "env-secret");

    let controller = LoginController::from_config(config);

    // The pair from config.toml no longer authenticates.
    controller.on_email_change("user@example.com");
    controller.on_password_change("correct-pass");
    assert!(matches!(controller.login().await, LoginAttempt::Failed(_)));

    controller.on_email_change("ops@example.org");
    controller.on_password_change("env-secret");
    let LoginAttempt::Authenticated(user) = controller.login().await else {
        panic!("expected the overridden pair to authenticate");
    };
    assert_eq!(user.email, "ops@example.org");
}
