//! Error handlers
//!
//! Reports application errors and maps them to process exit codes.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("login-flow error: {}", err);
}

/// Convert an error to a process exit code
pub fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::Io(_) => 74,
    }
}
