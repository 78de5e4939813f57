//! # Keygate API Server
//!
//! Minimal token-authenticated user service: register, log in, and manage
//! your own record with a signed bearer token.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p keygate-api
//! ```

use keygate_api::{
    app::{build_router, AppState},
    config::Config,
};
use keygate_shared::{auth::jwt::JwtTokenProcessor, store::UserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Keygate API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Composition root: every component is built exactly once, here.
    let config = Config::from_env()?;
    let bind_address = config.bind_address();

    let tokens = JwtTokenProcessor::new(config.jwt.token_options())?;
    let state = AppState::new(UserStore::new(), tokens, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
