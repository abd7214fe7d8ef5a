//! Command handlers for the shell.
//!
//! Dispatches parsed commands to the [`LoginController`] and drives the
//! read/respond loop over any async line source.

use log::{error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::login::{LoginAttempt, LoginController, LoginState};
use crate::shell::commands::{Command, CommandResult, CommandStatus, parse_command};

const MAX_COMMAND_LENGTH: usize = 512;

const HELP: &str = "Commands: EMAIL <address>, PASSWORD <secret>, BLUR, LOGIN, LOGOUT, STATE, HELP, QUIT";

/// Dispatches a parsed command to its handler.
pub async fn handle_command(controller: &LoginController, command: &Command) -> CommandResult {
    match command {
        Command::Email(email) => {
            controller.on_email_change(email.as_str());
            CommandResult::ok("OK")
        }
        Command::Password(password) => {
            controller.on_password_change(password.as_str());
            CommandResult::ok("OK")
        }
        Command::Blur => handle_cmd_blur(controller),
        Command::Login => handle_cmd_login(controller).await,
        Command::Logout => handle_cmd_logout(controller),
        Command::State => CommandResult::ok(format_state(&controller.state())),
        Command::Help => CommandResult::ok(HELP),
        Command::Quit => CommandResult {
            status: CommandStatus::CloseConnection,
            message: Some("Goodbye".into()),
        },
        Command::Unknown(_) => CommandResult::failure("Unknown command"),
    }
}

/// Handles BLUR: validates the email field as if it lost focus.
fn handle_cmd_blur(controller: &LoginController) -> CommandResult {
    if controller.validate_email() {
        return CommandResult::ok("OK");
    }
    let state = controller.state();
    CommandResult::failure(state.email_error().unwrap_or_default())
}

/// Handles LOGIN: submits the form and reports the outcome.
///
/// On success the reply is the home-screen greeting.
async fn handle_cmd_login(controller: &LoginController) -> CommandResult {
    match controller.login().await {
        LoginAttempt::Authenticated(_) => match controller.session() {
            Some(session) => CommandResult::ok(session.welcome_message()),
            None => CommandResult::failure("Session ended"),
        },
        LoginAttempt::Failed(e) => CommandResult::failure(e.message()),
        LoginAttempt::Ignored if controller.state().is_logged_in() => {
            CommandResult::failure("Already logged in")
        }
        LoginAttempt::Ignored => CommandResult::failure("Login already in progress"),
        LoginAttempt::Cancelled => CommandResult::failure("Login cancelled"),
    }
}

/// Handles LOGOUT: ends the session if there is one.
fn handle_cmd_logout(controller: &LoginController) -> CommandResult {
    match controller.logout() {
        Some(_) => CommandResult::ok(controller.logged_out_message()),
        None => CommandResult::failure("Not logged in"),
    }
}

/// Renders a one-line summary of the state. The password is masked.
pub fn format_state(state: &LoginState) -> String {
    format!(
        "phase={} email={} password={} loading={} logged_in={} error={} email_error={}",
        state.phase(),
        if state.email().is_empty() { "-" } else { state.email() },
        "*".repeat(state.password().chars().count()),
        state.is_loading(),
        state.is_logged_in(),
        state.error().unwrap_or("-"),
        state.email_error().unwrap_or("-"),
    )
}

/// Runs the shell until QUIT or end of input.
///
/// - Reads one command per line; the length limit excludes the terminator.
/// - Lines that are not UTF-8 are answered with an error and skipped.
/// - Dispatches commands using `handle_command`.
/// - Writes one response line per command.
pub async fn run_shell<R, W>(
    mut reader: R,
    mut writer: W,
    controller: &LoginController,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                info!("Input closed");
                break;
            }
            Ok(_) => {
                let body = strip_line_terminator(&buf);
                if body.len() > MAX_COMMAND_LENGTH {
                    warn!("Rejected command of {} bytes", body.len());
                    write_line(&mut writer, "ERR Command too long").await?;
                    continue;
                }

                let Ok(line) = std::str::from_utf8(body) else {
                    warn!("Rejected command that is not valid UTF-8");
                    write_line(&mut writer, "ERR Invalid input").await?;
                    continue;
                };

                let command = parse_command(line);
                match &command {
                    Command::Password(_) => info!("Received: Password(<redacted>)"),
                    other => info!("Received: {:?}", other),
                }

                let result = handle_command(controller, &command).await;
                if let Some(msg) = &result.message {
                    write_line(&mut writer, msg).await?;
                }

                if result.status == CommandStatus::CloseConnection {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}

fn strip_line_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

async fn write_line<W>(writer: &mut W, msg: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(msg.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
