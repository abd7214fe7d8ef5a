pub mod auth;
pub mod config;
pub mod error;
pub mod login;
pub mod resources;
pub mod shell;

pub use login::LoginController;
