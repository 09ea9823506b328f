//! Regex-backed email validator.

use std::sync::LazyLock;

use regex::Regex;

use gatehouse_core::{EmailValidator, EmailValidatorError};

// HTML5 email pattern. Compiled once, shared by every validator instance.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^[a-zA-Z0-9.!\#$%&'*+/=?^_`{|}~-]+
        @
        [a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?
        (?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Syntactic email validation against the HTML5 address grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl RegexEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        Ok(EMAIL_PATTERN.is_match(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        let validator = RegexEmailValidator::new();
        for email in [
            "any_email@mail.com",
            "user.name+tag@sub.example.co",
            "x@example.org",
        ] {
            assert!(validator.is_valid(email).unwrap(), "{email}");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        let validator = RegexEmailValidator::new();
        for email in [
            "",
            "plainaddress",
            "@mail.com",
            "user@",
            "user@@mail.com",
            "user@-mail.com",
            "user name@mail.com",
        ] {
            assert!(!validator.is_valid(email).unwrap(), "{email}");
        }
    }
}
