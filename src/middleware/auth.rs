use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use marquee_auth::{Claims, policy, verify_token};
use marquee_core::AppError;

use crate::metrics::track_authorization_denied;
use crate::state::AppState;

/// Extractor that verifies the session token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0.user_id()
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin
    }
}

/// Applies a policy decision, recording denials under `route`.
pub fn authorize(allowed: bool, message: &str, route: &'static str) -> Result<(), AppError> {
    if !allowed {
        tracing::warn!(route, "Authorization denied");
        track_authorization_denied(route);
    }
    policy::require(allowed, message)
}

/// Pulls the token out of an `Authorization` header value.
///
/// Accepts `Bearer <token>` or the raw token on its own.
pub(crate) fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        Some(_) => return None,
        None if value.eq_ignore_ascii_case("bearer") => return None,
        None => value,
    };
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Access denied. No token provided".to_string()))?;

        let token = token_from_header(auth_header).ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
