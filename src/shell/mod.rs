//! Terminal front end
//!
//! A line-oriented command loop standing in for the login and home screens.

pub mod commands;
pub mod handler;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handler::{handle_command, run_shell};
