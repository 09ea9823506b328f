pub mod errors;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use errors::RouteError;

pub use http_abstraction::{HttpRequest, HttpResponse, HttpResponseBody, LoginBody};

pub use ports::services::{AuthUseCase, AuthUseCaseError, EmailValidator, EmailValidatorError};
