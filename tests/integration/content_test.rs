//! Integration tests for content CRUD over multipart forms and the asset
//! files behind it.

mod helpers;

use axum::http::StatusCode;
use helpers::{Form, TestApp};

fn jane() -> Form {
    Form::new()
        .text("name", "Jane")
        .text("role", "Architect")
        .text("category", "Director")
        .image("image", "a.jpg")
}

fn post(title: &str) -> Form {
    Form::new()
        .text("title", title)
        .text("topic", "Process")
        .text("description", "First paragraph.")
        .text("description", "Second paragraph.")
        .image("cover", "cover.jpg")
}

async fn create(app: &TestApp, path: &str, form: Form, token: &str) -> serde_json::Value {
    let response = app.multipart("POST", path, &form, Some(token)).await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "POST {path}: {:?}",
        response.body
    );
    response.body["data"].clone()
}

#[tokio::test]
async fn test_person_create_then_delete() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let person = create(&app, "/api/people/new", jane(), &token).await;
    let id = person["id"].as_str().unwrap().to_string();
    let image = person["image"].as_str().unwrap().to_string();
    assert_eq!(person["role"], "Architect");
    assert!(image.starts_with("/uploads/images/"));
    assert!(image.ends_with("-a.jpg"));
    assert!(app.on_disk(&image));

    let response = app
        .request("GET", &format!("/api/people/single/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Jane");

    let response = app
        .request("DELETE", &format!("/api/people/delete?id={id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Person deleted successfully.");
    assert!(response.body["data"].get("failedAssets").is_none());
    assert!(!app.on_disk(&image));

    let response = app
        .request("GET", &format!("/api/people/single/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uploaded_asset_is_served() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let person = create(&app, "/api/people/new", jane(), &token).await;
    let image = person["image"].as_str().unwrap();

    let response = app.request("GET", image, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, b"\xFF\xD8\xFFjpeg-bytes");
}

#[tokio::test]
async fn test_missing_fields_write_nothing() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new()
        .text("name", "Jane")
        .text("category", "Director")
        .image("image", "a.jpg");
    let response = app
        .multipart("POST", "/api/people/new", &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Role is required.");

    let form = Form::new()
        .text("name", "Jane")
        .text("role", "Architect")
        .text("category", "Director");
    let response = app
        .multipart("POST", "/api/people/new", &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Image is required.");

    assert_eq!(app.file_count(), 0);
}

#[tokio::test]
async fn test_update_overwrites_portrait_in_place() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let person = create(&app, "/api/people/new", jane(), &token).await;
    let id = person["id"].as_str().unwrap();
    let image = person["image"].as_str().unwrap();

    let form = Form::new()
        .text("name", "Jane")
        .text("role", "Partner")
        .text("category", "Director")
        .file("image", "b.png", "image/png", b"new-portrait");
    let response = app
        .multipart("PUT", &format!("/api/people/update/{id}"), &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"], "Partner");
    assert_eq!(response.body["data"]["image"], image);
    assert_eq!(app.file_count(), 1);

    let served = app.request("GET", image, None, None).await;
    assert_eq!(served.bytes, b"new-portrait");
}

#[tokio::test]
async fn test_portrait_cannot_be_removed() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let person = create(&app, "/api/people/new", jane(), &token).await;
    let id = person["id"].as_str().unwrap();
    let image = person["image"].as_str().unwrap();

    let form = Form::new()
        .text("name", "Jane")
        .text("role", "Architect")
        .text("category", "Director")
        .text("removeImage", "true");
    let response = app
        .multipart("PUT", &format!("/api/people/update/{id}"), &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Image is required.");
    assert!(app.on_disk(image));

    let response = app
        .request("GET", &format!("/api/people/single/{id}"), None, None)
        .await;
    assert_eq!(response.body["data"]["image"], image);
}

#[tokio::test]
async fn test_pagination() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    for title in ["One", "Two", "Three"] {
        create(&app, "/api/posts/manage", post(title), &token).await;
    }

    let response = app
        .request("GET", "/api/posts?page=2&limit=2", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["total_items"], 3);
    assert_eq!(page["total_pages"], 2);
    // Newest first, so the oldest post is last.
    assert_eq!(page["items"][0]["title"], "One");

    let response = app
        .request("GET", "/api/posts?page=5&limit=2", None, None)
        .await;
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());

    let response = app
        .request("GET", "/api/posts?page=100000000000000000&limit=100", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(response.body["data"]["total_items"], 3);

    let response = app
        .request("GET", "/api/posts?page=abc&limit=-1", None, None)
        .await;
    assert_eq!(response.body["data"]["page"], 1);
    assert_eq!(response.body["data"]["page_size"], 10);
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_post_keeps_paragraph_order() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let created = create(&app, "/api/posts/manage", post("Essay"), &token).await;
    assert_eq!(
        created["description"],
        serde_json::json!(["First paragraph.", "Second paragraph."])
    );

    let form = Form::new()
        .text("title", "Essay")
        .text("topic", "Process")
        .text("description", "Only paragraph.");
    let id = created["id"].as_str().unwrap();
    let response = app
        .multipart("PUT", &format!("/api/posts/manage?id={id}"), &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["cover"], created["cover"]);
    assert_eq!(
        response.body["data"]["description"],
        serde_json::json!(["Only paragraph."])
    );
}

#[tokio::test]
async fn test_delete_requires_valid_id() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("DELETE", "/api/people/delete", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "ID is required.");

    let response = app
        .request("DELETE", "/api/people/delete?id=not-an-id", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", "/api/products/single/not-an-id", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_survives_missing_file() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new()
        .text("name", "Lounge Chair")
        .text("price", "450")
        .text("description", "Oak and wool.")
        .image("images", "front.jpg")
        .image("images", "side.jpg");
    let product = create(&app, "/api/products/new", form, &token).await;
    let id = product["id"].as_str().unwrap();
    let images: Vec<String> = product["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(images.len(), 2);
    assert_eq!(product["price"], 450.0);

    app.remove_from_disk(&images[0]);

    let response = app
        .request("DELETE", &format!("/api/products/delete?id={id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["failedAssets"],
        serde_json::json!([images[0]])
    );
    assert!(!app.on_disk(&images[1]));

    let response = app
        .request("GET", &format!("/api/products/single/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_rejects_bad_price() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new()
        .text("name", "Lounge Chair")
        .text("price", "cheap")
        .text("description", "Oak and wool.")
        .image("images", "front.jpg");
    let response = app
        .multipart("POST", "/api/products/new", &form, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.file_count(), 0);
}

#[tokio::test]
async fn test_product_update_removes_and_appends_images() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new()
        .text("name", "Lamp")
        .text("price", "80")
        .text("description", "Brass.")
        .image("images", "a.jpg")
        .image("images", "b.jpg");
    let product = create(&app, "/api/products/new", form, &token).await;
    let id = product["id"].as_str().unwrap();
    let first = product["images"][0].as_str().unwrap().to_string();
    let second = product["images"][1].as_str().unwrap().to_string();

    let form = Form::new()
        .text("name", "Lamp")
        .text("price", "95")
        .text("description", "Brass.")
        .text("imagesToRemove", &format!("[\"{first}\"]"))
        .image("images", "c.jpg");
    let response = app
        .multipart("PUT", &format!("/api/products/update/{id}"), &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let images = response.body["data"]["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0], second.as_str());
    assert!(images[1].as_str().unwrap().ends_with("-c.jpg"));
    assert!(!app.on_disk(&first));
    assert_eq!(response.body["data"]["price"], 95.0);
}

#[tokio::test]
async fn test_project_requires_cover_metadata() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new()
        .text("title", "Hill House")
        .text("category", "Residential")
        .image("cover", "cover.jpg");
    let response = app
        .multipart("POST", "/api/projects/new", &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.file_count(), 0);

    let form = Form::new()
        .text("title", "Hill House")
        .text("category", "Residential")
        .text("details", r#"{"Client":"Ms. Hill","CompletionYear":"2021"}"#)
        .image("cover", "cover.jpg")
        .text("coverAlt", "South elevation")
        .text("coverName", "Elevation")
        .image("images", "plan.jpg")
        .text("imageAlts", "Ground floor plan");
    let project = create(&app, "/api/projects/new", form, &token).await;

    assert_eq!(project["cover"]["alt"], "South elevation");
    assert_eq!(project["details"]["Client"], "Ms. Hill");
    assert_eq!(project["images"][0]["alt"], "Ground floor plan");
    assert_eq!(project["images"][0]["name"], "plan.jpg");
    assert_eq!(app.file_count(), 2);
}

#[tokio::test]
async fn test_media_upload_update_delete() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new()
        .file("file", "brief.pdf", "application/pdf", b"%PDF-1.7")
        .text("title", "Brief");
    let media = create(&app, "/api/media/upload", form, &token).await;
    let id = media["id"].as_str().unwrap();
    let url = media["url"].as_str().unwrap().to_string();
    assert_eq!(media["type"], "documents");
    assert!(url.starts_with("/uploads/documents/"));

    let form = Form::new()
        .text("mediaId", id)
        .text("title", "   ")
        .text("alt", "Design brief");
    let response = app
        .multipart("PUT", "/api/media/upload", &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Brief");
    assert_eq!(response.body["data"]["alt"], "Design brief");
    assert_eq!(response.body["data"]["url"], url.as_str());

    let response = app
        .request("DELETE", &format!("/api/media/delete?id={id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!app.on_disk(&url));
}

#[tokio::test]
async fn test_galleries_are_separate() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let form = Form::new().image("images", "desk.jpg").image("images", "model.jpg");
    let gallery = create(&app, "/api/gallery/office/manage", form, &token).await;
    assert_eq!(gallery["images"].as_array().unwrap().len(), 2);

    let office = app.request("GET", "/api/gallery/office", None, None).await;
    assert_eq!(office.body["data"]["total_items"], 1);
    let general = app.request("GET", "/api/gallery/general", None, None).await;
    assert_eq!(general.body["data"]["total_items"], 0);

    let response = app
        .multipart("POST", "/api/gallery/general/manage", &Form::new(), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "At least one image is required.");
}

#[tokio::test]
async fn test_site_info_lifecycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app.request("GET", "/api/manage-site", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let mut form = Form::new()
        .text("name", "Atelier North")
        .text("description", "Architecture and interiors.")
        .text("email", "hello@atelier.test")
        .text("instagram", "https://instagram.com/atelier")
        .image("logo", "logo.png")
        .image("studioImages", "studio.jpg");
    for section in ["Studio", "Work", "Product", "People", "Journal", "Contact"] {
        form = form.image(&format!("{section}Image"), &format!("{section}.jpg"));
    }
    let site = create(&app, "/api/manage-site/new", form, &token).await;
    assert_eq!(site["social"]["instagram"], "https://instagram.com/atelier");
    assert!(site["navbarImages"]["Journal"]["image"].is_string());
    assert_eq!(app.file_count(), 8);

    let response = app.request("GET", "/api/manage-site", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Atelier North");

    let id = site["id"].as_str().unwrap();
    let response = app
        .request("DELETE", &format!("/api/manage-site/delete?id={id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.file_count(), 0);
}
