//! Session token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Expiry is
//! optional: with `JWT_EXPIRY_SECONDS` unset tokens carry no `exp` claim and
//! stay valid until the secret changes. When `exp` is present it is enforced.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use marquee_config::JwtConfig;
use marquee_core::AppError;

use crate::claims::Claims;

/// Issues a session token for a user.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn issue_token(
    user_id: Uuid,
    is_admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        iat: Some(now as usize),
        exp: jwt_config
            .token_expiry
            .map(|seconds| now.saturating_add(seconds) as usize),
        ..Claims::new(user_id, is_admin)
    };

    encode_claims(&claims, jwt_config)
}

pub(crate) fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature does not match, the token
/// is malformed or its `exp` has passed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig::new("unit-test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, true, &config()).unwrap();
        let claims = verify_token(&token, &config()).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.is_admin);
        assert!(claims.iat.is_some());
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn test_expiry_is_embedded_when_configured() {
        let config = config().with_expiry(3600);
        let token = issue_token(Uuid::new_v4(), false, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        let iat = claims.iat.unwrap();
        assert_eq!(claims.exp, Some(iat + 3600));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(Uuid::new_v4(), false, &config()).unwrap();
        let err = verify_token(&token, &JwtConfig::new("another-secret")).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(verify_token("not.a.jwt", &config()).is_err());
        assert!(verify_token("", &config()).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            iat: Some(now - 7200),
            exp: Some(now - 3600),
            ..Claims::new(Uuid::new_v4(), false)
        };
        let token = encode_claims(&claims, &config()).unwrap();
        assert!(verify_token(&token, &config()).is_err());
    }
}
