//! Login flow
//!
//! State, controller, and post-login session for the login screen.

pub mod controller;
pub mod session;
pub mod state;

pub use controller::{LoginAttempt, LoginController};
pub use session::Session;
pub use state::{LoginPhase, LoginState};
