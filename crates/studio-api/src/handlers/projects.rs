//! Project handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::Document;
use studio_core::types::PageResponse;
use studio_entity::Project;
use studio_service::ProjectInput;
use studio_service::validation::{parse_id, path_list};

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery, PaginationParams};
use crate::state::AppState;

fn project_input(form: &FormData) -> AppResult<ProjectInput> {
    Ok(ProjectInput {
        title: form.text("title"),
        category: form.text("category"),
        description: form.opt_text("description"),
        map_location: form.opt_text("mapLocation"),
        details: form.opt_text("details"),
        cover: form.file("cover"),
        cover_alt: form.opt_text("coverAlt"),
        cover_name: form.opt_text("coverName"),
        images: form.files("images"),
        image_alts: form.texts("imageAlts"),
        image_names: form.texts("imageNames"),
        images_to_remove: path_list(&form.texts("imagesToRemove"))?,
    })
}

/// GET /api/projects?page=&limit=
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Project>>>, AppError> {
    let page = state.projects.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/projects/single/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Project>>, AppError> {
    let project = state.projects.get(parse_id::<Project>(&id)?).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// POST /api/projects/new
pub async fn create_project(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), AppError> {
    let project = state.projects.create(project_input(&form)?).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

/// PUT /api/projects/update/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: FormData,
) -> Result<Json<ApiResponse<Project>>, AppError> {
    let id = parse_id::<Project>(&id)?;
    let project = state.projects.update(id, project_input(&form)?).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// DELETE /api/projects/delete?id=
pub async fn delete_project(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state.projects.delete(query.resolve::<Project>()?).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(Project::LABEL, &report))))
}
