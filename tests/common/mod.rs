// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use marquee::router::init_router;
use marquee::state::AppState;
use marquee_auth::issue_token;
use marquee_config::{CorsConfig, JwtConfig, RateLimitConfig};
use marquee_core::password::hash_password_with_cost;

pub const TEST_SECRET: &str = "marquee-test-secret";
pub const TEST_PASSWORD: &str = "password123";

pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn test_state(pool: PgPool, rate_limit_config: RateLimitConfig) -> AppState {
    AppState {
        db: pool,
        jwt_config: jwt_config(),
        cors_config: CorsConfig::default(),
        rate_limit_config,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(test_state(pool, RateLimitConfig::disabled()))
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts a user directly, hashed at a low cost to keep tests fast.
pub async fn create_test_user(pool: &PgPool, is_admin: bool) -> TestUser {
    let email = generate_unique_email();
    let hashed = hash_password_with_cost(TEST_PASSWORD, 4).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, password, is_admin) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind("Test User")
    .bind(&email)
    .bind(&hashed)
    .bind(is_admin)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        password: TEST_PASSWORD.to_string(),
        is_admin,
    }
}

pub fn token_for(user: &TestUser) -> String {
    issue_token(user.id, user.is_admin, &jwt_config()).unwrap()
}

pub fn movie_body(title: &str, genre: &str) -> Value {
    serde_json::json!({
        "title": title,
        "plot": "A thief who steals corporate secrets through dreams",
        "poster": "https://example.com/poster.jpg",
        "releaseDate": "2010-07-16",
        "genre": genre,
        "youtubeId": "YoHD9XEInc0",
        "rating": 8.8
    })
}

pub fn show_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "plot": "A chemistry teacher turns to crime",
        "releaseDate": "2008-01-20",
        "genre": "Drama",
        "seasons": 5,
        "episodes": 62,
        "youtubeId": ["HhesaQXLuRY"],
        "cast": ["Bryan Cranston", "Aaron Paul"]
    })
}

/// Builds a request with an optional bearer token and JSON body.
pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
