//! Authentication system
//!
//! Handles email validation, credential checking, and the login use case.

pub mod authenticator;
pub mod credentials;
pub mod results;
pub mod validator;

pub use authenticator::{Authenticator, LoginUseCase, StaticAuthenticator};
pub use credentials::Credentials;
pub use results::{AuthOutcome, AuthenticatedUser};
pub use validator::{EmailValidator, PatternEmailValidator, is_valid_email};
