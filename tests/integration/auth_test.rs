//! Integration tests for signup, signin and the session cookie.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use studio_entity::UserRole;

#[tokio::test]
async fn test_signup_then_signin() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users/signup",
            Some(json!({
                "name": "Jane",
                "email": "jane@studio.test",
                "password": "secret-pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], "jane@studio.test");
    assert_eq!(response.body["data"]["role"], "user");
    assert!(response.body["data"].get("password_hash").is_none());

    let response = app
        .request(
            "POST",
            "/api/users/signin",
            Some(json!({ "email": "jane@studio.test", "password": "secret-pass" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert!(response.body["data"]["expiresAt"].is_string());

    let cookie = response.set_cookie().expect("signin sets the session cookie");
    assert!(cookie.starts_with("studio_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=1800"));
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.create_user("Jane", "jane@studio.test", "secret-pass", UserRole::User)
        .await;

    let response = app
        .request(
            "POST",
            "/api/users/signin",
            Some(json!({ "email": "jane@studio.test", "password": "wrong-pass" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_signin_unknown_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users/signin",
            Some(json!({ "email": "nobody@studio.test", "password": "whatever" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_duplicate_signup_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_user("Jane", "jane@studio.test", "secret-pass", UserRole::User)
        .await;

    let response = app
        .request(
            "POST",
            "/api/users/signup",
            Some(json!({
                "name": "Another Jane",
                "email": "jane@studio.test",
                "password": "other-pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "User already exists");
}

#[tokio::test]
async fn test_signup_requires_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users/signup",
            Some(json!({ "email": "jane@studio.test" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Name, email and password are required.");
}

#[tokio::test]
async fn test_session_reports_current_user() {
    let app = helpers::TestApp::new().await;
    app.create_user("Jane", "jane@studio.test", "secret-pass", UserRole::User)
        .await;
    let token = app.signin("jane@studio.test", "secret-pass").await;

    let response = app
        .request("GET", "/api/auth/session", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["email"], "jane@studio.test");
    // A fresh token is inside the update window, so no renewal.
    assert!(response.set_cookie().is_none());

    let response = app.request("GET", "/api/auth/session", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/session", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signout_clears_cookie() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/auth/signout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie().expect("signout clears the cookie");
    assert!(cookie.starts_with("studio_session=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["store"], "memory");
}
