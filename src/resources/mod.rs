//! User-facing strings
//!
//! A small message catalog looked up by key. Values come from the `[messages]`
//! table of the configuration and fall back to the English defaults.

mod messages;

pub use messages::{MessageKey, Messages};
