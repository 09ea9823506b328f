//! Collaborator capability traits consumed by the login router.
//!
//! Concrete implementations live in the surrounding system and are injected
//! at construction time. Failures are explicit `Err` values, never panics;
//! the router converts any `Err` into a generic server error at its boundary.

use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthUseCaseError {
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Authentication use case: exchanges credentials for an access token.
///
/// `Ok(None)` means the credentials were rejected; `Err` means the
/// collaborator itself failed (store unreachable, token signing broke, ...).
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    async fn auth(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Option<String>, AuthUseCaseError>;
}

#[derive(Debug, Error)]
pub enum EmailValidatorError {
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Syntactic email-address validation.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}
