//! Module `commands`
//!
//! Parses shell input lines into commands and defines the result each
//! command produces.

/// A command typed into the shell.
///
/// Field edits keep their argument verbatim apart from surrounding
/// whitespace; an empty argument clears the field.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Email(String),
    Password(String),
    /// The email field lost focus.
    Blur,
    Login,
    Logout,
    State,
    Help,
    Quit,
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            message: Some(format!("ERR {}", reason)),
            status: CommandStatus::Failure(reason),
        }
    }
}

/// Parses a raw input line into a `Command`. The verb is case-insensitive.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "EMAIL" => Command::Email(arg.to_string()),
        "PASSWORD" | "PASS" => Command::Password(arg.to_string()),
        "BLUR" if arg.is_empty() => Command::Blur,
        "LOGIN" if arg.is_empty() => Command::Login,
        "LOGOUT" if arg.is_empty() => Command::Logout,
        "STATE" if arg.is_empty() => Command::State,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
