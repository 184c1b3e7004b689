//! HTTP-level integration tests for registration, login and identity
//! resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use realty_api::auth::jwt::{issue_token, issue_token_with_ttl};
use realty_core::roles::Role;
use sqlx::PgPool;

fn register_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "name": "Asha Rao",
        "password": password,
        "phone": "+91 98480 00000"
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_bearer_token_and_safe_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/register",
        register_body("asha@example.com", "long-enough-pw"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["user"]["email"], "asha@example.com");
    assert_eq!(json["user"]["role"], "customer");
    assert_eq!(json["user"]["favorites"], serde_json::json!([]));
    assert!(json["user"].get("password_hash").is_none());
    assert!(json["user"].get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_rejected_regardless_of_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = post_json(
        app.clone(),
        "/api/auth/register",
        register_body("dup@example.com", "first-password"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_json(
        app,
        "/api/auth/register",
        register_body("dup@example.com", "another-password"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert_eq!(json["code"], "DUPLICATE");
    assert_eq!(json["error"], "Email already registered");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    let short = post_json(
        app.clone(),
        "/api/auth/register",
        register_body("short@example.com", "seven77"),
    )
    .await;
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    let bad_email = post_json(
        app.clone(),
        "/api/auth/register",
        register_body("not-an-email", "long-enough-pw"),
    )
    .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);

    let bad_role = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "email": "role@example.com",
            "name": "R",
            "password": "long-enough-pw",
            "role": "superuser"
        }),
    )
    .await;
    assert_eq!(bad_role.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(bad_role).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_correct_password(pool: PgPool) {
    let (user, _) = common::create_user(&pool, "login@example.com", Role::Customer).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": "login@example.com", "password": common::TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["user"]["id"], user.id.to_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_failures_are_indistinguishable(pool: PgPool) {
    common::create_user(&pool, "login@example.com", Role::Customer).await;
    let app = common::build_test_app(pool);

    let wrong = post_json(
        app.clone(),
        "/api/auth/login",
        serde_json::json!({ "email": "login@example.com", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong_json = body_json(wrong).await;

    let unknown = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": "ghost@example.com", "password": "whatever-pw" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_json, body_json(unknown).await);
    assert_eq!(wrong_json["error"], "Invalid credentials");
}

// ---------------------------------------------------------------------------
// Identity resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_the_token_subject(pool: PgPool) {
    let (user, token) = common::create_user(&pool, "me@example.com", Role::Admin).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id.to_string());
    assert_eq!(json["role"], "admin");
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_for_missing_user_is_unauthorized(pool: PgPool) {
    let config = common::test_config();
    let token = issue_token(uuid::Uuid::new_v4(), &config.jwt).unwrap();
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_rejects_missing_malformed_and_expired_tokens() {
    let app = common::build_test_app(common::lazy_pool());
    let config = common::test_config();

    let missing = get(app.clone(), "/api/auth/me").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = get_auth(app.clone(), "/api/auth/me", "not.a.token").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);

    let expired = issue_token_with_ttl(
        uuid::Uuid::new_v4(),
        chrono::Duration::seconds(-1),
        &config.jwt,
    )
    .unwrap();
    let response = get_auth(app, "/api/auth/me", &expired).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Token has expired");
}
