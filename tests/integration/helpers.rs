//! Shared test helpers for integration tests.
//!
//! Every `TestApp` runs the full router over the in-memory content store
//! with its public root in a fresh temporary directory.

#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use studio_api::{build_app, build_state};
use studio_auth::PasswordHasher;
use studio_core::config::{AppConfig, StoreProvider};
use studio_database::{ContentStore, UserStore};
use studio_entity::{NewUser, UserRole};

const BOUNDARY: &str = "studio-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store the router writes to, for direct inspection
    pub store: ContentStore,
    /// Application config
    pub config: AppConfig,
    /// Public root holding `uploads/`
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.database.provider = StoreProvider::Memory;
        config.storage.public_root = dir.path().to_string_lossy().into_owned();

        let store = ContentStore::memory();
        let state = build_state(config.clone(), store.clone())
            .await
            .expect("Failed to build state");

        Self {
            router: build_app(state),
            store,
            config,
            dir,
        }
    }

    /// Insert an account directly into the store
    pub async fn create_user(&self, name: &str, email: &str, password: &str, role: UserRole) {
        let password_hash = PasswordHasher::new()
            .hash_password(password)
            .expect("Failed to hash password");

        self.store
            .users
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await
            .expect("Failed to create test user");
    }

    /// Sign in and return the session token
    pub async fn signin(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .request("POST", "/api/users/signin", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signin failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in signin response")
            .to_string()
    }

    /// Seed an admin account and return its session token
    pub async fn admin_token(&self) -> String {
        self.create_user("Admin", "admin@studio.test", "admin-pass", UserRole::Admin)
            .await;
        self.signin("admin@studio.test", "admin-pass").await
    }

    /// Make a JSON request, sending the token as the session cookie
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::COOKIE, self.cookie(token));
        }

        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// Make a multipart request, sending the token as the session cookie
    pub async fn multipart(
        &self,
        method: &str,
        path: &str,
        form: &Form,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );

        if let Some(token) = token {
            req = req.header(header::COOKIE, self.cookie(token));
        }

        self.send(req.body(Body::from(form.body())).expect("Failed to build request"))
            .await
    }

    /// Send a prepared request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            bytes: bytes.to_vec(),
        }
    }

    /// `Cookie` header value for a token
    pub fn cookie(&self, token: &str) -> String {
        format!("{}={token}", self.config.auth.cookie_name)
    }

    /// Whether a public asset path exists under the public root
    pub fn on_disk(&self, public_path: &str) -> bool {
        self.dir
            .path()
            .join(public_path.trim_start_matches('/'))
            .is_file()
    }

    /// Delete a stored asset behind the application's back
    pub fn remove_from_disk(&self, public_path: &str) {
        std::fs::remove_file(self.dir.path().join(public_path.trim_start_matches('/')))
            .expect("Failed to remove file");
    }

    /// Number of files stored under `uploads/`
    pub fn file_count(&self) -> usize {
        count_files(&self.dir.path().join("uploads"))
    }
}

fn count_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() { count_files(&path) } else { 1 }
        })
        .sum()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Raw body
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// The `Location` header of a redirect
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The first `Set-Cookie` header
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// The error message of a failed request
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

/// A multipart form under construction
#[derive(Debug, Default)]
pub struct Form {
    parts: Vec<Part>,
}

#[derive(Debug)]
enum Part {
    Text(String, String),
    File {
        name: String,
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    },
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part::Text(name.to_string(), value.to_string()));
        self
    }

    /// Add a file field
    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.parts.push(Part::File {
            name: name.to_string(),
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            data: data.to_vec(),
        });
        self
    }

    /// Add a small JPEG-typed file
    pub fn image(self, name: &str, file_name: &str) -> Self {
        self.file(name, file_name, "image/jpeg", b"\xFF\xD8\xFFjpeg-bytes")
    }

    fn body(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }
}
