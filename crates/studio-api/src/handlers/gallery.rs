//! Office and general gallery handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::traits::Document;
use studio_core::types::PageResponse;
use studio_entity::{GeneralGallery, OfficeGallery};

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery, PaginationParams};
use crate::state::AppState;

/// GET /api/gallery/office
pub async fn list_office(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<OfficeGallery>>>, AppError> {
    let page = state.office_gallery.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/gallery/office/manage
pub async fn create_office(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<OfficeGallery>>), AppError> {
    let gallery = state.office_gallery.create(form.files("images")).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(gallery))))
}

/// DELETE /api/gallery/office/manage?id=
pub async fn delete_office(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state
        .office_gallery
        .delete(query.resolve::<OfficeGallery>()?)
        .await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(
        OfficeGallery::LABEL,
        &report,
    ))))
}

/// GET /api/gallery/general
pub async fn list_general(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<GeneralGallery>>>, AppError> {
    let page = state.general_gallery.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/gallery/general/manage
pub async fn create_general(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<GeneralGallery>>), AppError> {
    let gallery = state.general_gallery.create(form.files("images")).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(gallery))))
}

/// DELETE /api/gallery/general/manage?id=
pub async fn delete_general(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state
        .general_gallery
        .delete(query.resolve::<GeneralGallery>()?)
        .await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(
        GeneralGallery::LABEL,
        &report,
    ))))
}
