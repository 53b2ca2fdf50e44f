//! Integration tests for the access gate on private paths.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use studio_entity::UserRole;

#[tokio::test]
async fn test_no_session_redirects_to_signin() {
    let app = helpers::TestApp::new().await;

    let response = app
        .multipart("POST", "/api/people/new", &helpers::Form::new(), None)
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location(),
        Some("/signin?callbackUrl=%2Fapi%2Fpeople%2Fnew")
    );
}

#[tokio::test]
async fn test_callback_keeps_query_string() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("DELETE", "/api/posts/manage?id=42", None, None)
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.location(),
        Some("/signin?callbackUrl=%2Fapi%2Fposts%2Fmanage%3Fid%3D42")
    );
}

#[tokio::test]
async fn test_invalid_token_redirects_to_signin() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/users/all", None, Some("forged.token.value"))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert!(response.location().unwrap().starts_with("/signin?callbackUrl="));
}

#[tokio::test]
async fn test_regular_user_redirects_to_unauthorized() {
    let app = helpers::TestApp::new().await;
    app.create_user("Sam", "sam@studio.test", "secret-pass", UserRole::User)
        .await;
    let token = app.signin("sam@studio.test", "secret-pass").await;

    let response = app
        .request("GET", "/api/users/all", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location(), Some("/unauthorized"));
}

#[tokio::test]
async fn test_admin_passes() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/users/all", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["data"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["role"], "admin");
}

#[tokio::test]
async fn test_admin_bearer_header_passes() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token().await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/users/all")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_reads_bypass_gate() {
    let app = helpers::TestApp::new().await;

    for path in [
        "/api/people",
        "/api/posts",
        "/api/products",
        "/api/projects",
        "/api/media",
        "/api/gallery/office",
        "/api/gallery/general",
    ] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "GET {path}");
    }
}

#[tokio::test]
async fn test_prefix_matches_whole_segments() {
    let app = helpers::TestApp::new().await;

    // `/admin` is private and anything below it, but not `/administrator`.
    let response = app.request("GET", "/admin/dashboard", None, None).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let response = app.request("GET", "/administrator", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
