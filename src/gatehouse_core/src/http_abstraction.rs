//! Framework-agnostic HTTP request and response shapes.
//!
//! The router works against these plain types instead of any web framework's
//! request/response. A framework layer deserializes its own request into
//! [`HttpRequest`] and renders [`HttpResponse`] back out; the router never
//! sees the framework.

use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::errors::RouteError;

/// Inbound request envelope. The body is optional because callers may hand the
/// router a request with no payload at all; the router treats that as caller
/// misuse, not end-user input error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpRequest {
    pub body: Option<LoginBody>,
}

impl HttpRequest {
    pub fn new(body: LoginBody) -> Self {
        Self { body: Some(body) }
    }
}

/// User-submitted login parameters. Both fields are optional at this layer;
/// presence is enforced by the router so that each missing field gets its own
/// 400 response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

/// Outbound response: a status code plus a JSON-serializable body. Produced
/// fresh per call and immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: HttpResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HttpResponseBody {
    Success {
        #[serde(rename = "accessToken")]
        access_token: String,
    },
    Error(RouteError),
}

impl HttpResponse {
    /// 200 OK carrying the issued access token.
    pub fn ok(access_token: String) -> Self {
        Self {
            status_code: 200,
            body: HttpResponseBody::Success { access_token },
        }
    }

    /// 400 Bad Request for a validation error.
    pub fn bad_request(error: RouteError) -> Self {
        Self {
            status_code: 400,
            body: HttpResponseBody::Error(error),
        }
    }

    /// 401 Unauthorized when authentication yields no token.
    pub fn unauthorized() -> Self {
        Self {
            status_code: 401,
            body: HttpResponseBody::Error(RouteError::Unauthorized),
        }
    }

    /// 500 Internal Server Error. Generic on purpose.
    pub fn server_error() -> Self {
        Self {
            status_code: 500,
            body: HttpResponseBody::Error(RouteError::ServerError),
        }
    }
}
