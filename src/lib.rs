//! # Gatehouse - Login Endpoint Library
//!
//! This is a facade crate that re-exports all public APIs from the gatehouse components.
//! Use this crate to get access to the whole login endpoint in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatehouse = { path = "../gatehouse" }
//! ```
//!
//! ## Structure
//!
//! - **Contract types**: `HttpRequest`, `HttpResponse`, `RouteError`
//! - **Ports**: `AuthUseCase`, `EmailValidator`
//! - **Adapters**: `LoginRouter`, `RegexEmailValidator`

/// Contract types and ports
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export the contract types at the root level
pub use gatehouse_core::{HttpRequest, HttpResponse, HttpResponseBody, LoginBody, RouteError};

/// Collaborator capability traits
pub mod ports {
    pub use gatehouse_core::ports::services::{
        AuthUseCase, AuthUseCaseError, EmailValidator, EmailValidatorError,
    };
}

pub use gatehouse_core::{AuthUseCase, AuthUseCaseError, EmailValidator, EmailValidatorError};

/// Presentation and infrastructure adapters
pub mod adapters {
    pub use gatehouse_adapters::*;
}

pub use gatehouse_adapters::{LoginRouter, RegexEmailValidator};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the auth use case port
pub use async_trait::async_trait;

/// Re-export secrecy for working with passwords in flight
pub use secrecy::{ExposeSecret, Secret};
