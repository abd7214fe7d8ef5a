//! Email format validation
//!
//! Checks that an email address has the shape `local-part@domain.tld`. The
//! pattern mirrors the address matcher used by mobile platforms: a permissive
//! local part and a domain of at least two dot-separated labels.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is valid")
});

/// Decides whether a string is a well-formed email address.
pub trait EmailValidator: Send + Sync {
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Default validator backed by the built-in address pattern.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternEmailValidator;

impl EmailValidator for PatternEmailValidator {
    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}

/// Returns true if `email` matches the address pattern. Empty input is invalid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("jlbusr@jollibee.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("a_b%c-d@sub-domain.example.org"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("someEmail"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid_email(""));
        assert!(!PatternEmailValidator.is_valid_email(""));
    }

    #[test]
    fn test_pattern_validator_delegates() {
        let validator = PatternEmailValidator;
        assert!(validator.is_valid_email("user@example.com"));
        assert!(!validator.is_valid_email("user@example"));
    }
}
