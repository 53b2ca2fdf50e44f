//! Journal post handlers.
//!
//! Create, update and delete share `/api/posts/manage`; update and delete
//! take the post id as `?id=`.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::traits::Document;
use studio_core::types::PageResponse;
use studio_entity::Post;
use studio_service::PostInput;
use studio_service::validation::parse_id;

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery, PaginationParams};
use crate::state::AppState;

fn post_input(form: &FormData) -> PostInput {
    PostInput {
        title: form.text("title"),
        topic: form.text("topic"),
        description: form.texts("description"),
        cover: form.file("cover"),
    }
}

/// GET /api/posts?page=&limit=
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Post>>>, AppError> {
    let page = state.posts.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/posts/single/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Post>>, AppError> {
    let post = state.posts.get(parse_id::<Post>(&id)?).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// POST /api/posts/manage
pub async fn create_post(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<Post>>), AppError> {
    let post = state.posts.create(post_input(&form)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post))))
}

/// PUT /api/posts/manage?id=
pub async fn update_post(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    form: FormData,
) -> Result<Json<ApiResponse<Post>>, AppError> {
    let id = query.resolve::<Post>()?;
    let post = state.posts.update(id, post_input(&form)).await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/manage?id=
pub async fn delete_post(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state.posts.delete(query.resolve::<Post>()?).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(Post::LABEL, &report))))
}
