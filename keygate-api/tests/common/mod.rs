/// Common test utilities for integration tests
///
/// Builds a fully wired application (store, token processor, router) with a
/// fixed test configuration, plus small helpers for driving the router as a
/// `tower::Service` and decoding JSON responses.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use keygate_api::app::{build_router, AppState};
use keygate_api::config::{ApiConfig, Config, JwtConfig};
use keygate_shared::auth::jwt::{JwtTokenProcessor, SigningAlgorithm};
use keygate_shared::store::UserStore;
use serde_json::Value;
use tower::Service as _;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Test context wrapping the wired router
pub struct TestContext {
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a context with the default one-hour token lifetime
    pub fn new() -> Self {
        Self::with_token_lifetime(60)
    }

    /// Creates a context whose issued tokens live for the given number of
    /// minutes (negative values issue already-expired tokens)
    pub fn with_token_lifetime(minutes: i64) -> Self {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            jwt: JwtConfig {
                secret: TEST_SECRET.to_string(),
                expires_minutes: minutes,
                algorithm: SigningAlgorithm::HS256,
            },
        };

        let tokens = JwtTokenProcessor::new(config.jwt.token_options())
            .expect("HMAC processor construction cannot fail");
        let state = AppState::new(UserStore::new(), tokens, config);

        Self {
            app: build_router(state),
        }
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().call(request).await.unwrap()
    }

    /// Sends a JSON POST
    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }
}

/// Reads a response body as JSON, asserting the expected status first
pub async fn json_body(response: Response<Body>, expected: StatusCode) -> Value {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    if status != expected {
        panic!(
            "expected {expected}, got {status}: {}",
            String::from_utf8_lossy(&bytes)
        );
    }

    serde_json::from_slice(&bytes).unwrap()
}

/// Pulls the `access_token` cookie value out of a login response
pub fn access_token_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login response must set a cookie")
        .to_str()
        .unwrap();

    let pair = set_cookie.split(';').next().unwrap();
    let (name, value) = pair.split_once('=').unwrap();
    assert_eq!(name, "access_token");

    value.to_string()
}
