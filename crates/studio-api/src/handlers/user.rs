//! Account handlers: signup, signin, user listing.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use studio_core::error::AppError;
use studio_entity::UserProfile;

use crate::cookie;
use crate::dto::{ApiResponse, SignedInResponse, SigninRequest, SignupRequest};
use crate::state::AppState;

/// POST /api/users/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserProfile>>), AppError> {
    let user = state.credentials.signup(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// POST /api/users/signin
///
/// The token is returned in the body and set as the session cookie.
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> Result<impl IntoResponse, AppError> {
    let signed_in = state.credentials.signin(req.into()).await?;
    let set_cookie = cookie::session_cookie(&state.config.auth, &signed_in.token)?;

    Ok((
        [(header::SET_COOKIE, set_cookie)],
        Json(ApiResponse::ok(SignedInResponse::from(signed_in))),
    ))
}

/// GET /api/users/all
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserProfile>>>, AppError> {
    let users = state.credentials.list_users().await?;
    Ok(Json(ApiResponse::ok(users)))
}
