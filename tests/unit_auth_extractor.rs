use axum::extract::FromRequestParts;
use axum::http::{Request, StatusCode};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use marquee::middleware::auth::AuthUser;
use marquee::state::AppState;
use marquee_auth::issue_token;
use marquee_config::{CorsConfig, JwtConfig, RateLimitConfig};
use marquee_core::AppError;

fn test_state() -> AppState {
    AppState {
        // Never connected: the extractor only reads the JWT config.
        db: PgPoolOptions::new()
            .connect_lazy("postgres://marquee@localhost/unused")
            .unwrap(),
        jwt_config: JwtConfig::new("extractor-secret"),
        cors_config: CorsConfig::default(),
        rate_limit_config: RateLimitConfig::disabled(),
    }
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<AuthUser, AppError> {
    let mut builder = Request::builder().uri("/movies");
    if let Some(value) = header {
        builder = builder.header("authorization", value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    AuthUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_missing_header_rejected() {
    let err = extract(&test_state(), None).await.unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "Access denied. No token provided");
}

#[tokio::test]
async fn test_bearer_and_bare_tokens_accepted() {
    let state = test_state();
    let user_id = Uuid::new_v4();
    let token = issue_token(user_id, true, &state.jwt_config).unwrap();

    let auth_user = extract(&state, Some(&format!("Bearer {}", token))).await.unwrap();
    assert_eq!(auth_user.user_id().unwrap(), user_id);
    assert!(auth_user.is_admin());

    let auth_user = extract(&state, Some(&token)).await.unwrap();
    assert_eq!(auth_user.user_id().unwrap(), user_id);
}

#[tokio::test]
async fn test_other_schemes_rejected() {
    let err = extract(&test_state(), Some("Basic dXNlcjpwYXNz")).await.unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_foreign_token_rejected() {
    let token = issue_token(Uuid::new_v4(), true, &JwtConfig::new("someone-else")).unwrap();
    let err = extract(&test_state(), Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.error.to_string(), "Invalid token");
}
