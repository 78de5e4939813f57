/// Application state and router builder
///
/// This module is the composition root's toolkit: the shared state every
/// handler sees, and the function that assembles the router. All components
/// are constructed exactly once (in `main` or a test harness) and handed in
/// explicitly — there is no global registry and no lazy initialization.
///
/// # Example
///
/// ```no_run
/// use keygate_api::{app::{build_router, AppState}, config::Config};
/// use keygate_shared::{auth::jwt::JwtTokenProcessor, store::UserStore};
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let tokens = JwtTokenProcessor::new(config.jwt.token_options())?;
/// let state = AppState::new(UserStore::new(), tokens, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use keygate_shared::{auth::jwt::JwtTokenProcessor, store::UserStore};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning; the store is the process-wide user
/// registry, the processor is read-only after construction.
#[derive(Clone)]
pub struct AppState {
    /// In-memory user registry
    pub store: Arc<UserStore>,

    /// Token issuance and validation
    pub tokens: Arc<JwtTokenProcessor>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: UserStore, tokens: JwtTokenProcessor, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health              # Health check (public)
/// └── /auth/
///     ├── POST   /register # Create an account
///     ├── POST   /login    # Authenticate, receive a token cookie
///     ├── GET    /me       # Fetch own record (token required)
///     └── DELETE /me       # Delete own record (token required)
/// ```
///
/// The token-gated routes do their own credential resolution through the
/// identity extractor, so no auth middleware layer is needed here.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route(
            "/me",
            get(routes::auth::me).delete(routes::auth::delete_me),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/auth", auth_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
