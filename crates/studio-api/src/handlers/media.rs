//! Media library handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::traits::Document;
use studio_core::types::PageResponse;
use studio_entity::Media;
use studio_service::validation::{parse_id, require_id};
use studio_service::{MediaEdit, MediaUpload};

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery, PaginationParams};
use crate::state::AppState;

/// GET /api/media?page=&limit=
pub async fn list_media(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Media>>>, AppError> {
    let page = state.media.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/media/{id}
pub async fn get_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Media>>, AppError> {
    let media = state.media.get(parse_id::<Media>(&id)?).await?;
    Ok(Json(ApiResponse::ok(media)))
}

/// POST /api/media/upload
pub async fn upload_media(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<Media>>), AppError> {
    let media = state
        .media
        .upload(MediaUpload {
            file: form.file("file"),
            title: form.opt_text("title"),
            alt: form.opt_text("alt"),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(media))))
}

/// PUT /api/media/upload (form field `mediaId`)
pub async fn update_media(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<ApiResponse<Media>>, AppError> {
    let raw_id = form.opt_text("mediaId");
    let id = parse_id::<Media>(require_id(raw_id.as_deref())?)?;

    let media = state
        .media
        .update(
            id,
            MediaEdit {
                file: form.file("file"),
                title: form.opt_text("title"),
                alt: form.opt_text("alt"),
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(media)))
}

/// DELETE /api/media/delete?id=
pub async fn delete_media(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state.media.delete(query.resolve::<Media>()?).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(Media::LABEL, &report))))
}
