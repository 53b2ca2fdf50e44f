//! Route definitions for the studio HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Uploaded
//! assets are served from `/uploads` straight out of the public root.

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use studio_storage::UPLOADS_PREFIX;

use crate::handlers;
use crate::state::AppState;

/// Build the API router and the static uploads route.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let uploads_dir = Path::new(&state.config.storage.public_root)
        .join(UPLOADS_PREFIX.trim_matches('/'));

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(auth_routes())
        .merge(media_routes())
        .merge(people_routes())
        .merge(post_routes())
        .merge(product_routes())
        .merge(project_routes())
        .merge(site_routes())
        .merge(gallery_routes())
        .merge(search_routes());

    Router::new()
        .nest("/api", api_routes)
        .nest_service(UPLOADS_PREFIX.trim_end_matches('/'), ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(max_upload))
        .with_state(state)
}

/// Liveness and store status
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::health))
        .route("/health", get(handlers::health::health))
}

/// Accounts: signup, signin, listing
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(handlers::user::signup))
        .route("/users/signin", post(handlers::user::signin))
        .route("/users/all", get(handlers::user::list_users))
}

/// Session cookie: sign-out and current identity
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signout", post(handlers::auth::signout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Media library
fn media_routes() -> Router<AppState> {
    Router::new()
        .route("/media", get(handlers::media::list_media))
        .route("/media/{id}", get(handlers::media::get_media))
        .route(
            "/media/upload",
            post(handlers::media::upload_media).put(handlers::media::update_media),
        )
        .route(
            "/media/delete",
            delete(handlers::media::delete_media),
        )
}

/// People
fn people_routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(handlers::people::list_people))
        .route("/people/single/{id}", get(handlers::people::get_person))
        .route("/people/new", post(handlers::people::create_person))
        .route("/people/update/{id}", put(handlers::people::update_person))
        .route(
            "/people/delete",
            delete(handlers::people::delete_person),
        )
}

/// Journal posts
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(handlers::posts::list_posts))
        .route("/posts/single/{id}", get(handlers::posts::get_post))
        .route(
            "/posts/manage",
            post(handlers::posts::create_post)
                .put(handlers::posts::update_post)
                .delete(handlers::posts::delete_post),
        )
}

/// Products
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::products::list_products))
        .route("/products/single/{id}", get(handlers::products::get_product))
        .route("/products/new", post(handlers::products::create_product))
        .route(
            "/products/update/{id}",
            put(handlers::products::update_product),
        )
        .route(
            "/products/delete",
            delete(handlers::products::delete_product),
        )
}

/// Projects
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::projects::list_projects))
        .route("/projects/single/{id}", get(handlers::projects::get_project))
        .route("/projects/new", post(handlers::projects::create_project))
        .route(
            "/projects/update/{id}",
            put(handlers::projects::update_project),
        )
        .route(
            "/projects/delete",
            delete(handlers::projects::delete_project),
        )
}

/// Site information singleton
fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/manage-site", get(handlers::site::get_site))
        .route("/manage-site/new", post(handlers::site::create_site))
        .route("/manage-site/update", put(handlers::site::update_site))
        .route(
            "/manage-site/delete",
            delete(handlers::site::delete_site),
        )
}

/// Office and general galleries
fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route("/gallery/office", get(handlers::gallery::list_office))
        .route(
            "/gallery/office/manage",
            post(handlers::gallery::create_office).delete(handlers::gallery::delete_office),
        )
        .route("/gallery/general", get(handlers::gallery::list_general))
        .route(
            "/gallery/general/manage",
            post(handlers::gallery::create_general).delete(handlers::gallery::delete_general),
        )
}

/// Cross-collection search
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search))
}
