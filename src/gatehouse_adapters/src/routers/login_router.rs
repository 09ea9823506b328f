//! Login endpoint router.

use std::sync::Arc;

use secrecy::ExposeSecret;

use gatehouse_core::{AuthUseCase, EmailValidator, HttpRequest, HttpResponse, RouteError};

/// Validates an inbound login request and delegates authentication to the
/// injected collaborators, mapping every outcome to an [`HttpResponse`].
///
/// The router is stateless across calls; concurrent `route` invocations are
/// independent. Collaborators are held as optional trait objects so that a
/// misconfigured router (collaborator never supplied) degrades to a 500
/// response instead of failing to construct at a distance from the caller.
pub struct LoginRouter {
    auth_use_case: Option<Arc<dyn AuthUseCase>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
}

impl LoginRouter {
    /// A fully configured router. This is the normal path.
    pub fn new(
        auth_use_case: Arc<dyn AuthUseCase>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        Self {
            auth_use_case: Some(auth_use_case),
            email_validator: Some(email_validator),
        }
    }

    /// A router with no collaborators. Every structurally valid request will
    /// be answered with a 500 until collaborators are supplied.
    pub fn unconfigured() -> Self {
        Self {
            auth_use_case: None,
            email_validator: None,
        }
    }

    pub fn with_auth_use_case(mut self, auth_use_case: Arc<dyn AuthUseCase>) -> Self {
        self.auth_use_case = Some(auth_use_case);
        self
    }

    pub fn with_email_validator(mut self, email_validator: Arc<dyn EmailValidator>) -> Self {
        self.email_validator = Some(email_validator);
        self
    }

    /// Handle one login request.
    ///
    /// Checks run in a fixed order and the first failure wins: envelope shape,
    /// required fields, collaborator configuration, email format, then
    /// authentication. Configuration problems are checked before any
    /// collaborator call so they can never masquerade as user input errors.
    /// All collaborator failures are swallowed into a generic 500; this
    /// function never returns an error to the caller.
    #[tracing::instrument(name = "LoginRouter::route", skip_all)]
    pub async fn route(&self, request: Option<HttpRequest>) -> HttpResponse {
        let Some(body) = request.and_then(|request| request.body) else {
            tracing::warn!("login request without a body");
            return HttpResponse::server_error();
        };

        let email = match body.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => return HttpResponse::bad_request(RouteError::MissingParam("email".to_string())),
        };

        let password = match body.password.as_ref() {
            Some(password) if !password.expose_secret().is_empty() => password,
            _ => {
                return HttpResponse::bad_request(RouteError::MissingParam("password".to_string()));
            }
        };

        let (Some(auth_use_case), Some(email_validator)) =
            (self.auth_use_case.as_ref(), self.email_validator.as_ref())
        else {
            tracing::error!("login router invoked without its collaborators configured");
            return HttpResponse::server_error();
        };

        match email_validator.is_valid(email) {
            Ok(true) => {}
            Ok(false) => {
                return HttpResponse::bad_request(RouteError::InvalidParam("email".to_string()));
            }
            Err(error) => {
                tracing::warn!(%error, "email validator failed");
                return HttpResponse::server_error();
            }
        }

        match auth_use_case.auth(email, password).await {
            Ok(Some(access_token)) if !access_token.is_empty() => HttpResponse::ok(access_token),
            Ok(_) => HttpResponse::unauthorized(),
            Err(error) => {
                tracing::warn!(%error, "auth use case failed");
                HttpResponse::server_error()
            }
        }
    }
}
