//! Session handlers: sign-out and current session.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};

use studio_core::error::AppError;

use crate::cookie;
use crate::dto::{ApiResponse, MessageResponse, SessionResponse};
use crate::state::AppState;

/// POST /api/auth/signout
pub async fn signout(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cleared = cookie::clear_cookie(&state.config.auth)?;
    Ok((
        [(header::SET_COOKIE, cleared)],
        Json(ApiResponse::ok(MessageResponse::new("Signed out successfully."))),
    ))
}

/// GET /api/auth/session
///
/// Renews the cookie when the token is past the update window.
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let token = cookie::session_token(&headers, &state.config.auth.cookie_name)
        .ok_or_else(|| AppError::authentication("Not signed in."))?;

    let (claims, renewed) = state.credentials.session(&token)?;

    let mut response = Json(ApiResponse::ok(SessionResponse::from(&claims))).into_response();
    if let Some(issued) = renewed {
        let value = cookie::session_cookie(&state.config.auth, &issued)?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    Ok(response)
}
