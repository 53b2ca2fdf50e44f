//! People handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::traits::Document;
use studio_core::types::PageResponse;
use studio_entity::Person;
use studio_service::PersonInput;
use studio_service::validation::parse_id;

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery, PaginationParams};
use crate::state::AppState;

fn person_input(form: &FormData) -> PersonInput {
    PersonInput {
        name: form.text("name"),
        role: form.text("role"),
        category: form.text("category"),
        image: form.file("image"),
        remove_image: form.flag("removeImage"),
    }
}

/// GET /api/people?page=&limit=
pub async fn list_people(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Person>>>, AppError> {
    let page = state.people.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/people/single/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Person>>, AppError> {
    let person = state.people.get(parse_id::<Person>(&id)?).await?;
    Ok(Json(ApiResponse::ok(person)))
}

/// POST /api/people/new
pub async fn create_person(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<Person>>), AppError> {
    let person = state.people.create(person_input(&form)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(person))))
}

/// PUT /api/people/update/{id}
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: FormData,
) -> Result<Json<ApiResponse<Person>>, AppError> {
    let id = parse_id::<Person>(&id)?;
    let person = state.people.update(id, person_input(&form)).await?;
    Ok(Json(ApiResponse::ok(person)))
}

/// DELETE /api/people/delete?id=
pub async fn delete_person(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state.people.delete(query.resolve::<Person>()?).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(Person::LABEL, &report))))
}
