//! Application builder: wires services, router and middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use studio_core::config::AppConfig;
use studio_core::result::AppResult;
use studio_core::traits::StorageProvider;
use studio_core::types::AssetCategory;
use studio_database::ContentStore;
use studio_storage::{AssetManager, LocalStorageProvider, UPLOADS_PREFIX};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::{gate, logging};
use crate::router::build_router;
use crate::state::AppState;

/// Open the asset store under the public root and wire every service.
///
/// The category directories are created up front so a fresh checkout
/// serves `/uploads` without a first upload.
pub async fn build_state(config: AppConfig, store: ContentStore) -> AppResult<AppState> {
    let provider = LocalStorageProvider::new(&config.storage.public_root).await?;
    for category in AssetCategory::ALL {
        provider
            .create_dir(&format!("{UPLOADS_PREFIX}{category}"))
            .await?;
    }
    info!(root = %provider.root().display(), "Asset store ready");

    let assets = Arc::new(AssetManager::new(Arc::new(provider)));
    Ok(AppState::new(config, store, assets))
}

/// Builds the complete Axum application with all routes and middleware.
///
/// The access gate sits inside the logging and tracing layers so that
/// redirected requests are still logged.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state.clone())
        .layer(axum_middleware::from_fn_with_state(
            state,
            gate::access_gate,
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(logging::request_logging))
}
