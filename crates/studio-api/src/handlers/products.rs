//! Product handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::Document;
use studio_core::types::PageResponse;
use studio_entity::Product;
use studio_service::ProductInput;
use studio_service::validation::{parse_id, path_list};

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery, PaginationParams};
use crate::state::AppState;

fn product_input(form: &FormData) -> AppResult<ProductInput> {
    Ok(ProductInput {
        name: form.text("name"),
        price: form.text("price"),
        description: form.text("description"),
        images: form.files("images"),
        images_to_remove: path_list(&form.texts("imagesToRemove"))?,
    })
}

/// GET /api/products?page=&limit=
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Product>>>, AppError> {
    let page = state.products.list(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/products/single/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = state.products.get(parse_id::<Product>(&id)?).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /api/products/new
pub async fn create_product(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let product = state.products.create(product_input(&form)?).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(product))))
}

/// PUT /api/products/update/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: FormData,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let id = parse_id::<Product>(&id)?;
    let product = state.products.update(id, product_input(&form)?).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /api/products/delete?id=
pub async fn delete_product(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state.products.delete(query.resolve::<Product>()?).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(Product::LABEL, &report))))
}
