//! Site information handlers.
//!
//! The site information is a singleton by convention: reads and updates
//! target the oldest document.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::traits::Document;
use studio_entity::{NavbarSection, SiteInfo, SocialLinks};
use studio_service::SiteInput;
use studio_service::validation::path_list;

use crate::dto::{ApiResponse, DeletedResponse};
use crate::extractors::{FormData, IdQuery};
use crate::state::AppState;

fn site_input(form: &FormData) -> AppResult<SiteInput> {
    let navbar = NavbarSection::ALL
        .iter()
        .filter_map(|section| form.file(&section.form_field()).map(|file| (*section, file)))
        .collect();

    Ok(SiteInput {
        name: form.text("name"),
        description: form.text("description"),
        email: form.text("email"),
        contact_number: form.opt_text("contactNumber"),
        map_location: form.opt_text("mapLocation"),
        social: SocialLinks {
            facebook: form.opt_text("facebook"),
            instagram: form.opt_text("instagram"),
            youtube: form.opt_text("youtube"),
            twitter: form.opt_text("twitter"),
            linkedin: form.opt_text("linkedin"),
        },
        logo: form.file("logo"),
        studio_images: form.files("studioImages"),
        studio_images_to_remove: path_list(&form.texts("studioImagesToRemove"))?,
        navbar,
    })
}

/// GET /api/manage-site
pub async fn get_site(State(state): State<AppState>) -> Result<Json<ApiResponse<SiteInfo>>, AppError> {
    let site = state.site.get().await?;
    Ok(Json(ApiResponse::ok(site)))
}

/// POST /api/manage-site/new
pub async fn create_site(
    State(state): State<AppState>,
    form: FormData,
) -> Result<(StatusCode, Json<ApiResponse<SiteInfo>>), AppError> {
    let site = state.site.create(site_input(&form)?).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(site))))
}

/// PUT /api/manage-site/update
pub async fn update_site(
    State(state): State<AppState>,
    form: FormData,
) -> Result<Json<ApiResponse<SiteInfo>>, AppError> {
    let site = state.site.update(site_input(&form)?).await?;
    Ok(Json(ApiResponse::ok(site)))
}

/// DELETE /api/manage-site/delete?id=
pub async fn delete_site(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ApiResponse<DeletedResponse>>, AppError> {
    let report = state.site.delete(query.resolve::<SiteInfo>()?).await?;
    Ok(Json(ApiResponse::ok(DeletedResponse::new(SiteInfo::LABEL, &report))))
}
