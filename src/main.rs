//! login-flow - Entry Point
//!
//! Runs the login shell on stdin/stdout with credentials from `config.toml`.

use log::{debug, info};
use tokio::io::BufReader;

use login_flow::LoginController;
use login_flow::config::AppConfig;
use login_flow::error::AppError;
use login_flow::error::handlers::{exit_code, handle_error};
use login_flow::shell::run_shell;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(exit_code(&e));
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!("Configuration loaded");

    let controller = LoginController::from_config(config);

    let mut updates = controller.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            debug!("State changed: {:?}", *updates.borrow_and_update());
        }
    });

    info!("Login shell ready, type HELP for commands");
    run_shell(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &controller,
    )
    .await?;

    Ok(())
}
