mod common;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use common::{body_json, send, test_state};
use marquee::router::init_router;
use marquee_config::RateLimitConfig;
use serde_json::json;
use sqlx::PgPool;

fn strict_rate_limit_config() -> RateLimitConfig {
    RateLimitConfig {
        enabled: true,
        max_requests: 2,
        window_seconds: 3600,
    }
}

fn peer(last_octet: u8) -> SocketAddr {
    SocketAddr::from(([192, 168, 1, last_octet], 40000))
}

fn health_from(peer: SocketAddr) -> Request<Body> {
    let mut request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    request
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check(pool: PgPool) {
    let app = init_router(test_state(pool, RateLimitConfig::disabled()));

    let response = send(&app, health_from(peer(1))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rate_limit_exceeded(pool: PgPool) {
    let app = init_router(test_state(pool, strict_rate_limit_config()));

    for _ in 0..2 {
        let response = send(&app, health_from(peer(100))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(&app, health_from(peer(100))).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rate_limit_ignores_forwarded_headers(pool: PgPool) {
    let app = init_router(test_state(pool, strict_rate_limit_config()));

    let mut statuses = Vec::new();
    for i in 1..=3u8 {
        let mut request = health_from(peer(100));
        let headers = request.headers_mut();
        headers.insert("x-forwarded-for", format!("10.0.0.{i}").parse().unwrap());
        headers.insert("x-real-ip", format!("10.0.1.{i}").parse().unwrap());
        headers.insert("forwarded", format!("for=10.0.2.{i}").parse().unwrap());
        statuses.push(send(&app, request).await.status());
    }

    assert_eq!(
        statuses,
        vec![StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_rate_limit_is_per_peer(pool: PgPool) {
    let app = init_router(test_state(pool, strict_rate_limit_config()));

    for _ in 0..3 {
        send(&app, health_from(peer(100))).await;
    }
    let response = send(&app, health_from(peer(100))).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = send(&app, health_from(peer(200))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_disabled_rate_limit_allows_everything(pool: PgPool) {
    let app = init_router(test_state(pool, RateLimitConfig::disabled()));

    for _ in 0..10 {
        let response = send(&app, health_from(peer(100))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
