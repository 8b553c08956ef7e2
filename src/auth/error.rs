use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// One failed validation rule, surfaced in the 400 body's `errors` array.
#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Expected domain failures. Everything unexpected (store unreachable,
/// hashing or signing failure) rides the `Internal` variant and turns into
/// a generic 500 at the response boundary.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid input data")]
    Validation(Vec<FieldError>),

    #[error("user already exists")]
    UserExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    /// Map a flow failure to its HTTP response. Internal causes are logged
    /// server-side and never leak into the body.
    #[must_use]
    pub fn response_parts(self, validation_message: &str) -> (StatusCode, Json<Value>) {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors, "message": validation_message })),
            ),
            Self::UserExists => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "This user already exists" })),
            ),
            Self::UserNotFound => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "User was not found" })),
            ),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Incorrect password, try again" })),
            ),
            Self::Internal(err) => {
                error!("request failed: {err:?}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Something went wrong, try again" })),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn validation_carries_field_detail() {
        let err = AuthError::Validation(vec![FieldError::new("email", "Incorrect email")]);
        let (status, Json(body)) = err.response_parts("Incorrect registration data");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Incorrect registration data");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[test]
    fn domain_failures_map_to_bad_request() {
        for err in [
            AuthError::UserExists,
            AuthError::UserNotFound,
            AuthError::InvalidCredentials,
        ] {
            let (status, _) = err.response_parts("unused");
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn internal_failure_stays_generic() {
        let err = AuthError::from(anyhow!("pool exhausted"));
        let (status, Json(body)) = err.response_parts("unused");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Something went wrong, try again");
        assert!(!body.to_string().contains("pool exhausted"));
    }
}
