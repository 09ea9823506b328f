//! Error taxonomy for the login endpoint.
//!
//! Four distinguished error kinds, each mapped to exactly one HTTP status
//! code. Equality is structural: two errors of the same kind with the same
//! offending parameter are interchangeable.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// Every failure the login router can report to a caller.
///
/// Serializes to `{ "name": ..., "message": ..., "paramName": ... }`, with
/// `paramName` present only for the parameter-carrying kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A required request parameter was absent or empty.
    #[error("Missing parameter: {0}")]
    MissingParam(String),

    /// A parameter was present but failed semantic validation.
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// Credentials were structurally valid but authentication yielded no token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed envelope, missing collaborator, or an unexpected collaborator
    /// failure. Deliberately generic: internal detail never leaks to callers.
    #[error("Internal server error")]
    ServerError,
}

impl RouteError {
    /// Wire-level discriminant for the error kind.
    pub fn name(&self) -> &'static str {
        match self {
            RouteError::MissingParam(_) => "MissingParamError",
            RouteError::InvalidParam(_) => "InvalidParamError",
            RouteError::Unauthorized => "UnauthorizedError",
            RouteError::ServerError => "ServerError",
        }
    }

    /// The offending parameter, for the kinds that carry one.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            RouteError::MissingParam(param) | RouteError::InvalidParam(param) => Some(param),
            RouteError::Unauthorized | RouteError::ServerError => None,
        }
    }

    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::MissingParam(_) | RouteError::InvalidParam(_) => 400,
            RouteError::Unauthorized => 401,
            RouteError::ServerError => 500,
        }
    }
}

impl Serialize for RouteError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let field_count = if self.param_name().is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("RouteError", field_count)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        if let Some(param) = self.param_name() {
            state.serialize_field("paramName", param)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use serde_json::json;

    #[test]
    fn test_missing_param_serializes_with_param_name() {
        let value = serde_json::to_value(RouteError::MissingParam("email".to_string())).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "MissingParamError",
                "message": "Missing parameter: email",
                "paramName": "email",
            })
        );
    }

    #[test]
    fn test_generic_errors_omit_param_name() {
        let unauthorized = serde_json::to_value(RouteError::Unauthorized).unwrap();
        assert_eq!(
            unauthorized,
            json!({ "name": "UnauthorizedError", "message": "Unauthorized" })
        );

        let server_error = serde_json::to_value(RouteError::ServerError).unwrap();
        assert_eq!(
            server_error,
            json!({ "name": "ServerError", "message": "Internal server error" })
        );
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(
            RouteError::InvalidParam("email".to_string()),
            RouteError::InvalidParam("email".to_string())
        );
        assert_ne!(
            RouteError::MissingParam("email".to_string()),
            RouteError::MissingParam("password".to_string())
        );
        assert_ne!(
            RouteError::MissingParam("email".to_string()),
            RouteError::InvalidParam("email".to_string())
        );
    }

    #[quickcheck]
    fn prop_param_errors_round_trip_the_offending_name(param: String) -> bool {
        let missing = serde_json::to_value(RouteError::MissingParam(param.clone())).unwrap();
        let invalid = serde_json::to_value(RouteError::InvalidParam(param.clone())).unwrap();
        missing["paramName"] == json!(param.clone()) && invalid["paramName"] == json!(param)
    }

    #[quickcheck]
    fn prop_status_codes_stay_within_contract(param: String) -> bool {
        [
            RouteError::MissingParam(param.clone()),
            RouteError::InvalidParam(param),
            RouteError::Unauthorized,
            RouteError::ServerError,
        ]
        .iter()
        .all(|error| matches!(error.status_code(), 400 | 401 | 500))
    }
}
