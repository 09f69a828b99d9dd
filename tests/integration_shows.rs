mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, create_test_user, request, send, setup_test_app, show_body, token_for};
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

async fn create_show(app: &axum::Router, token: &str, title: &str) -> Value {
    let response = send(
        app,
        request("POST", "/shows", Some(token), Some(show_body(title))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_creates_show(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let app = setup_test_app(pool.clone());

    let show = create_show(&app, &token_for(&admin), "Breaking Bad").await;
    assert_eq!(show["seasons"], 5);
    assert_eq!(show["youtubeId"], json!(["HhesaQXLuRY"]));
    assert_eq!(show["cast"], json!(["Bryan Cranston", "Aaron Paul"]));
    assert_eq!(show["likes"], json!([]));
    assert!(show["rating"].is_null());

    let response = send(&app, request("GET", "/shows", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([show.clone()]));

    let uri = format!("/shows/{}", show["_id"].as_str().unwrap());
    let response = send(&app, request("GET", &uri, None, None)).await;
    assert_eq!(body_json(response).await, show);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_shows_listed_newest_first(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let app = setup_test_app(pool.clone());
    let token = token_for(&admin);

    let backdated = [
        ("Breaking Bad", "2023-05-01T00:00:00Z"),
        ("The Wire", "2023-09-01T00:00:00Z"),
        ("Fargo", "2023-01-01T00:00:00Z"),
    ];
    for (title, timestamp) in backdated {
        let show = create_show(&app, &token, title).await;
        let id = Uuid::parse_str(show["_id"].as_str().unwrap()).unwrap();
        sqlx::query("UPDATE shows SET created_at = $1::timestamptz WHERE id = $2")
            .bind(timestamp)
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let response = send(&app, request("GET", "/shows", None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["The Wire", "Breaking Bad", "Fargo"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_show_writes_require_admin(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let user = create_test_user(&pool, false).await;
    let app = setup_test_app(pool.clone());
    let user_token = token_for(&user);

    let response = send(
        &app,
        request("POST", "/shows", Some(&user_token), Some(show_body("The Wire"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "User has no admin access");

    let response = send(&app, request("POST", "/shows", None, Some(show_body("The Wire")))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let show = create_show(&app, &token_for(&admin), "Breaking Bad").await;
    let uri = format!("/shows/{}", show["_id"].as_str().unwrap());

    let response = send(
        &app,
        request("PUT", &uri, Some(&user_token), Some(show_body("Better Call Saul"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, request("DELETE", &uri, Some(&user_token), None)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, request("GET", &uri, None, None)).await;
    assert_eq!(body_json(response).await, show);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_show_validation(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let app = setup_test_app(pool.clone());
    let token = token_for(&admin);

    let mut body = show_body("Breaking Bad");
    body["episodes"] = json!(-3);
    let response = send(&app, request("POST", "/shows", Some(&token), Some(body))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut body = show_body("Breaking Bad");
    body.as_object_mut().unwrap().remove("youtubeId");
    let response = send(&app, request("POST", "/shows", Some(&token), Some(body))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "youtubeId is required");

    let mut body = show_body("Breaking Bad");
    body.as_object_mut().unwrap().remove("cast");
    let response = send(&app, request("POST", "/shows", Some(&token), Some(body))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["cast"], json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_and_delete_show(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let app = setup_test_app(pool.clone());
    let token = token_for(&admin);

    let show = create_show(&app, &token, "Breaking Bad").await;
    let uri = format!("/shows/{}", show["_id"].as_str().unwrap());

    let mut update = show_body("Breaking Bad");
    update["seasons"] = json!(6);
    update["rating"] = json!(9.5);
    let response = send(&app, request("PUT", &uri, Some(&token), Some(update))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["seasons"], 6);
    assert_eq!(updated["rating"], 9.5);

    let response = send(&app, request("DELETE", &uri, Some(&token), None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, request("GET", &uri, None, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Show not found");

    let response = send(
        &app,
        request("PUT", &uri, Some(&token), Some(show_body("Breaking Bad"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_any_user_can_rate(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let user = create_test_user(&pool, false).await;
    let app = setup_test_app(pool.clone());

    let show = create_show(&app, &token_for(&admin), "Breaking Bad").await;
    let uri = format!("/shows/{}/rating", show["_id"].as_str().unwrap());
    let token = token_for(&user);

    let response = send(&app, request("PATCH", &uri, None, Some(json!({ "rating": 9 })))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, request("PATCH", &uri, Some(&token), Some(json!({})))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Rating is required");

    let response = send(
        &app,
        request("PATCH", &uri, Some(&token), Some(json!({ "rating": 10.5 }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        request("PATCH", &uri, Some(&token), Some(json!({ "rating": 9.5 }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rated = body_json(response).await;
    assert_eq!(rated["rating"], 9.5);
    assert_eq!(rated["title"], "Breaking Bad");

    let missing = format!("/shows/{}/rating", Uuid::new_v4());
    let response = send(
        &app,
        request("PATCH", &missing, Some(&token), Some(json!({ "rating": 5 }))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_show_like_changes_nothing(pool: PgPool) {
    let admin = create_test_user(&pool, true).await;
    let user = create_test_user(&pool, false).await;
    let app = setup_test_app(pool.clone());

    let show = create_show(&app, &token_for(&admin), "Breaking Bad").await;
    let id = show["_id"].as_str().unwrap();
    let uri = format!("/shows/{}/like", id);

    let response = send(&app, request("PATCH", &uri, None, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, request("PATCH", &uri, Some(&token_for(&user)), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = send(&app, request("GET", &format!("/shows/{}", id), None, None)).await;
    assert_eq!(body_json(response).await, show);
}
