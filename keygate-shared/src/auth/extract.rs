/// Bearer credential extraction
///
/// Pulls the raw token string off an incoming request without judging it.
/// The `Authorization: Bearer <token>` header wins; the `access_token`
/// cookie set at login is the fallback for browser clients. Validation
/// happens later, in the identity resolver, so this extractor is
/// infallible — absence is represented as `None`, not a rejection.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

/// Name of the cookie that carries the token for browser clients
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// The raw bearer credential presented on a request, if any
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    /// Consumes the extractor, yielding the raw token
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        let token = from_header.or_else(|| {
            CookieJar::from_headers(&parts.headers)
                .get(ACCESS_TOKEN_COOKIE)
                .map(|cookie| cookie.value().to_owned())
        });

        Ok(BearerToken(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Option<String> {
        let (mut parts, ()) = request.into_parts();
        let BearerToken(token) = BearerToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        token
    }

    #[tokio::test]
    async fn test_extracts_from_authorization_header() {
        let request = Request::builder()
            .header(header::AUTHORIZATION, "Bearer abc.def.ghi")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.as_deref(), Some("abc.def.ghi"));
    }

    #[tokio::test]
    async fn test_falls_back_to_cookie() {
        let request = Request::builder()
            .header(header::COOKIE, "access_token=abc.def.ghi; theme=dark")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.as_deref(), Some("abc.def.ghi"));
    }

    #[tokio::test]
    async fn test_header_wins_over_cookie() {
        let request = Request::builder()
            .header(header::AUTHORIZATION, "Bearer from-header")
            .header(header::COOKIE, "access_token=from-cookie")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await.as_deref(), Some("from-header"));
    }

    #[tokio::test]
    async fn test_absent_credential_is_none() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, None);

        // A non-bearer authorization scheme is not a credential we accept.
        let request = Request::builder()
            .header(header::AUTHORIZATION, "Basic dXNlcjpwdw==")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, None);
    }
}
