//! Session token transport: the `HttpOnly` cookie and the bearer header.

use axum::http::{HeaderMap, HeaderValue};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, Cookie, HeaderMapExt};

use studio_auth::IssuedToken;
use studio_core::config::AuthConfig;
use studio_core::error::{AppError, ErrorKind};

/// The session token carried by a request.
///
/// The cookie wins over an `Authorization: Bearer` header when both are
/// present.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let from_cookie = headers
        .typed_get::<Cookie>()
        .and_then(|cookies| cookies.get(cookie_name).map(str::to_string));

    from_cookie
        .or_else(|| {
            headers
                .typed_get::<Authorization<Bearer>>()
                .map(|auth| auth.token().to_string())
        })
        .filter(|token| !token.is_empty())
}

/// `Set-Cookie` value carrying a freshly issued token.
pub fn session_cookie(config: &AuthConfig, issued: &IssuedToken) -> Result<HeaderValue, AppError> {
    build(config, &issued.token, issued.max_age_seconds.max(0))
}

/// `Set-Cookie` value that expires the session cookie.
pub fn clear_cookie(config: &AuthConfig) -> Result<HeaderValue, AppError> {
    build(config, "", 0)
}

fn build(config: &AuthConfig, value: &str, max_age: i64) -> Result<HeaderValue, AppError> {
    let mut cookie = format!(
        "{}={value}; HttpOnly; Path=/; Max-Age={max_age}; SameSite=Lax",
        config.cookie_name
    );
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Invalid cookie value", e))
}

#[cfg(test)]
mod tests {
    use axum::http::header;
    use chrono::Utc;

    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            cookie_name: "studio_session".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_cookie_preferred_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(
            session_token(&headers, "studio_session").as_deref(),
            Some("from-header")
        );

        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; studio_session=from-cookie"),
        );
        assert_eq!(
            session_token(&headers, "studio_session").as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_missing_token() {
        assert!(session_token(&HeaderMap::new(), "studio_session").is_none());
    }

    #[test]
    fn test_cookie_attributes() {
        let issued = IssuedToken {
            token: "abc".to_string(),
            expires_at: Utc::now(),
            max_age_seconds: 1800,
        };
        let value = session_cookie(&config(), &issued).unwrap();
        assert_eq!(
            value.to_str().unwrap(),
            "studio_session=abc; HttpOnly; Path=/; Max-Age=1800; SameSite=Lax"
        );

        let mut secure = config();
        secure.cookie_secure = true;
        let cleared = clear_cookie(&secure).unwrap();
        assert!(cleared.to_str().unwrap().contains("Max-Age=0"));
        assert!(cleared.to_str().unwrap().ends_with("; Secure"));
    }
}
