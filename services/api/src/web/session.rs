//! services/api/src/web/session.rs
//!
//! Session-cookie handling: extracting the token from request headers and
//! resolving it against the session provider.

use axum::http::{header, HeaderMap};
use courseware_core::domain::VisitorSession;
use courseware_core::ports::{PortResult, SessionProvider};

/// Extracts the auth backend's `session` cookie value, if present.
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie_header.split(';').find_map(|c| {
        let c = c.trim();
        c.strip_prefix("session=")
    })
}

/// Resolves the visitor's session from request headers.
///
/// A request without a session cookie short-circuits to `None` without
/// touching the provider.
pub async fn resolve_visitor(
    provider: &dyn SessionProvider,
    headers: &HeaderMap,
) -> PortResult<Option<VisitorSession>> {
    match session_token_from_headers(headers) {
        Some(token) => provider.resolve(token).await,
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::session_token_from_headers;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).expect("cookie"));
        headers
    }

    #[test]
    fn finds_session_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; session=tok-123; lang=en");
        assert_eq!(session_token_from_headers(&headers), Some("tok-123"));
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        assert_eq!(session_token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn other_cookies_do_not_match() {
        let headers = headers_with_cookie("old_session=abc; theme=dark");
        assert_eq!(session_token_from_headers(&headers), None);
    }
}
