//! Access gate in front of every private path.
//!
//! Requests under a configured private prefix need a valid session token
//! whose role is the admin role. Failures never reach a handler: they are
//! answered with a `307` redirect, to the sign-in page (carrying the
//! original target as `callbackUrl`) or to the unauthorized page. Paths
//! outside the private prefixes pass straight through.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, warn};

use studio_core::config::GateConfig;

use crate::cookie;
use crate::state::AppState;

/// Enforces the admin session on private paths.
///
/// On success the verified `Claims` are inserted into the request
/// extensions. A token older than the renewal window is reissued and set
/// on the response.
pub async fn access_gate(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let gate = &state.config.gate;
    if !gate.is_private(request.uri().path()) {
        return next.run(request).await;
    }

    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let Some(token) = cookie::session_token(request.headers(), &state.config.auth.cookie_name)
    else {
        debug!(path = %target, "No session token, redirecting to sign-in");
        return signin_redirect(gate, &target);
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(path = %target, error = %e.message, "Rejected session token");
            return signin_redirect(gate, &target);
        }
    };

    if claims.role.as_str() != gate.admin_role {
        warn!(user_id = %claims.sub, role = %claims.role, path = %target, "Non-admin access to private path");
        return Redirect::temporary(&gate.unauthorized_path).into_response();
    }

    let renewed = state.tokens.renew_if_stale(&claims).unwrap_or_else(|e| {
        warn!(user_id = %claims.sub, error = %e, "Session renewal failed");
        None
    });

    request.extensions_mut().insert(claims);
    let mut response = next.run(request).await;

    if let Some(issued) = renewed {
        match cookie::session_cookie(&state.config.auth, &issued) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Could not set renewed session cookie"),
        }
    }

    response
}

/// `{signin_path}?callbackUrl={target}` with the target percent-encoded.
fn signin_redirect(gate: &GateConfig, target: &str) -> Response {
    let callback = utf8_percent_encode(target, NON_ALPHANUMERIC);
    Redirect::temporary(&format!("{}?callbackUrl={callback}", gate.signin_path)).into_response()
}
