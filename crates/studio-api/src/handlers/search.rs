//! Cross-collection search handler.

use axum::Json;
use axum::extract::{Query, State};

use studio_core::error::AppError;
use studio_core::types::PageResponse;
use studio_service::SearchHit;

use crate::dto::{ApiResponse, SearchParams};
use crate::state::AppState;

/// GET /api/search?query=&page=&limit=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<PageResponse<SearchHit>>>, AppError> {
    let page = params.pagination().into_page_request();
    let query = params.query.as_deref().unwrap_or_default();
    let results = state.search.search(query, &page).await?;
    Ok(Json(ApiResponse::ok(results)))
}
