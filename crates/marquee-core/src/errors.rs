//! Application error type and its HTTP rendering.
//!
//! Every handler returns `Result<_, AppError>`. An [`AppError`] pairs an HTTP
//! status with an [`anyhow::Error`] and renders as `{"error": "<message>"}`.
//!
//! | Kind | Constructor | Status |
//! |------|-------------|--------|
//! | Validation | [`AppError::validation`] / [`AppError::bad_request`] | 400 |
//! | Conflict | [`AppError::conflict`] | 409 |
//! | Invalid credentials | [`AppError::invalid_credentials`] | 401 |
//! | Unauthenticated | [`AppError::unauthorized`] | 401 |
//! | Forbidden | [`AppError::forbidden`] | 403 |
//! | Not found | [`AppError::not_found`] | 404 |
//! | Internal | [`AppError::internal`] / [`AppError::database`] | 500 |
//!
//! Server errors are logged with their full cause chain and rendered with a
//! generic message so datastore details never leak to clients.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// Message returned to clients when login fails, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email or password are incorrect";

/// Error body shape used in the OpenAPI documentation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn internal_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, anyhow!(message))
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn validation(message: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, anyhow!(message))
    }

    pub fn conflict(message: String) -> Self {
        Self::new(StatusCode::CONFLICT, anyhow!(message))
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(message))
    }

    /// Login failure. Unknown email and wrong password are indistinguishable.
    pub fn invalid_credentials() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(INVALID_CREDENTIALS_MESSAGE))
    }

    pub fn forbidden(message: String) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(message))
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        (self.status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_statuses() {
        assert_eq!(
            AppError::validation("bad".to_string()).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("dup".to_string()).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::invalid_credentials().status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::unauthorized("no token".to_string()).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::forbidden("nope".to_string()).status,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found(anyhow!("missing")).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal_error("boom".to_string()).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_credentials_message() {
        let err = AppError::invalid_credentials();
        assert_eq!(err.error.to_string(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[test]
    fn test_from_converts_to_internal() {
        let io = std::io::Error::other("disk on fire");
        let err: AppError = io.into();
        assert!(err.is_server_error());
    }

    #[test]
    fn test_into_response_keeps_client_message() {
        let response = AppError::forbidden("User has no admin access".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_into_response_hides_server_details() {
        let response = AppError::internal_error("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
