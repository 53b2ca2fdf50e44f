//! Integration tests for cross-collection search.

mod helpers;

use axum::http::StatusCode;
use helpers::{Form, TestApp};

async fn seed(app: &TestApp, token: &str) {
    let forms = [
        (
            "/api/posts/manage",
            Form::new()
                .text("title", "Building the Oak House")
                .text("topic", "Process")
                .text("description", "Notes from site.")
                .image("cover", "oak-house.jpg"),
        ),
        (
            "/api/products/new",
            Form::new()
                .text("name", "Oak Stool")
                .text("price", "120")
                .text("description", "Solid oak.")
                .image("images", "stool.jpg"),
        ),
        (
            "/api/projects/new",
            Form::new()
                .text("title", "Oak Pavilion")
                .text("category", "Public")
                .image("cover", "pavilion.jpg")
                .text("coverAlt", "Pavilion at dusk")
                .text("coverName", "Dusk"),
        ),
        (
            "/api/posts/manage",
            Form::new()
                .text("title", "Concrete Notes")
                .text("topic", "Material")
                .text("description", "On formwork.")
                .image("cover", "concrete.jpg"),
        ),
    ];

    for (path, form) in forms {
        let response = app.multipart("POST", path, &form, Some(token)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    }
}

#[tokio::test]
async fn test_search_merges_collections() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    seed(&app, &token).await;

    let response = app.request("GET", "/api/search?query=OAK", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert_eq!(page["total_items"], 3);

    let hits = page["items"].as_array().unwrap();
    let kinds: Vec<&str> = hits.iter().map(|h| h["kind"].as_str().unwrap()).collect();
    // Newest first across collections.
    assert_eq!(kinds, vec!["project", "product", "post"]);

    let project = &hits[0];
    assert_eq!(project["title"], "Oak Pavilion");
    assert_eq!(
        project["link"],
        format!("/work/{}", project["id"].as_str().unwrap())
    );
    assert!(project["image"].as_str().unwrap().ends_with("-pavilion.jpg"));
    assert!(project["createdAt"].is_string());
    assert!(hits[1]["link"].as_str().unwrap().starts_with("/etha/"));
    assert!(hits[2]["link"].as_str().unwrap().starts_with("/journal/"));
}

#[tokio::test]
async fn test_search_paginates_merged_results() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    seed(&app, &token).await;

    let response = app
        .request("GET", "/api/search?query=oak&page=2&limit=2", None, None)
        .await;

    let page = &response.body["data"];
    assert_eq!(page["total_items"], 3);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["kind"], "post");
}

#[tokio::test]
async fn test_search_without_matches() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    seed(&app, &token).await;

    let response = app
        .request("GET", "/api/search?query=steel", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 0);
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_requires_query() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/search", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Search query is required.");

    let response = app
        .request("GET", "/api/search?query=%20%20", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
