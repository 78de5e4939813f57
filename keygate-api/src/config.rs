/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `JWT_SECRET`: Secret key for token signing (default: a built-in
///   development value, loudly warned about)
/// - `JWT_EXPIRES_IN_MINUTES`: Token lifetime (default: 60)
/// - `JWT_ALGORITHM`: Signing algorithm name (default: HS256)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use keygate_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use chrono::Duration;
use keygate_shared::auth::jwt::{SigningAlgorithm, TokenOptions};
use serde::{Deserialize, Serialize};
use std::env;

/// Fallback signing secret for development setups with no environment
const DEV_SECRET: &str = "SECRET";

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Token configuration
    pub jwt: JwtConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for token signing
    ///
    /// Rotating this value invalidates every outstanding token.
    pub secret: String,

    /// Token lifetime in minutes
    pub expires_minutes: i64,

    /// Signature algorithm
    pub algorithm: SigningAlgorithm,
}

impl JwtConfig {
    /// Converts the configuration into token processor options
    pub fn token_options(&self) -> TokenOptions {
        TokenOptions {
            secret: self.secret.clone(),
            expires: Duration::minutes(self.expires_minutes),
            algorithm: self.algorithm,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparseable (port,
    /// lifetime, algorithm name). Absent variables fall back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET is not set; using the built-in development secret. \
                 Every deployment sharing this default accepts each other's tokens."
            );
            DEV_SECRET.to_string()
        });

        let expires_minutes = env::var("JWT_EXPIRES_IN_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<i64>()?;

        let algorithm = env::var("JWT_ALGORITHM")
            .unwrap_or_else(|_| "HS256".to_string())
            .parse::<SigningAlgorithm>()?;

        Ok(Self {
            api: ApiConfig { host, port },
            jwt: JwtConfig {
                secret,
                expires_minutes,
                algorithm,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
