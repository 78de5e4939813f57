/// JWT token generation and validation
///
/// This module issues and verifies the signed bearer tokens that represent a
/// successful authentication. A token binds a user id (the `sub` claim) to an
/// issue/expiry window and a signature under the process-wide secret.
///
/// # Security
///
/// - **Algorithms**: HS256/384/512 (secret is the HMAC key) and
///   RS256/384/512 (secret is a PEM-encoded RSA key)
/// - **Expiration**: configurable; checked on every validation
/// - **Failure reporting**: every validation failure — bad signature,
///   expired, malformed, unparseable subject — surfaces as the same generic
///   "Invalid credentials" error, so callers cannot probe for which part of
///   a credential was wrong. The concrete cause is logged at debug level.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use keygate_shared::auth::jwt::{JwtTokenProcessor, SigningAlgorithm, TokenOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let processor = JwtTokenProcessor::new(TokenOptions {
///     secret: "your-secret-key-at-least-32-bytes".to_string(),
///     expires: Duration::minutes(60),
///     algorithm: SigningAlgorithm::HS256,
/// })?;
///
/// let token = processor.generate_token(42)?;
/// assert_eq!(processor.validate_token(&token)?, 42);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// Signing algorithms the processor accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSA PKCS#1 with SHA-256
    RS256,
    /// RSA PKCS#1 with SHA-384
    RS384,
    /// RSA PKCS#1 with SHA-512
    RS512,
}

impl SigningAlgorithm {
    /// True for the HMAC family, where the secret is used directly as the key
    pub fn is_hmac(&self) -> bool {
        matches!(
            self,
            SigningAlgorithm::HS256 | SigningAlgorithm::HS384 | SigningAlgorithm::HS512
        )
    }

    fn as_jwt(&self) -> Algorithm {
        match self {
            SigningAlgorithm::HS256 => Algorithm::HS256,
            SigningAlgorithm::HS384 => Algorithm::HS384,
            SigningAlgorithm::HS512 => Algorithm::HS512,
            SigningAlgorithm::RS256 => Algorithm::RS256,
            SigningAlgorithm::RS384 => Algorithm::RS384,
            SigningAlgorithm::RS512 => Algorithm::RS512,
        }
    }

    /// Gets the algorithm name as used in JWT headers
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::HS256 => "HS256",
            SigningAlgorithm::HS384 => "HS384",
            SigningAlgorithm::HS512 => "HS512",
            SigningAlgorithm::RS256 => "RS256",
            SigningAlgorithm::RS384 => "RS384",
            SigningAlgorithm::RS512 => "RS512",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an algorithm name from configuration
#[derive(Debug, Clone, thiserror::Error)]
#[error("unsupported signing algorithm: {0}")]
pub struct ParseAlgorithmError(String);

impl FromStr for SigningAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(SigningAlgorithm::HS256),
            "HS384" => Ok(SigningAlgorithm::HS384),
            "HS512" => Ok(SigningAlgorithm::HS512),
            "RS256" => Ok(SigningAlgorithm::RS256),
            "RS384" => Ok(SigningAlgorithm::RS384),
            "RS512" => Ok(SigningAlgorithm::RS512),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

/// Token processor configuration, fixed at process start
///
/// Rotating the secret invalidates every outstanding token; that is the only
/// bulk-revocation mechanism the service has.
#[derive(Debug, Clone)]
pub struct TokenOptions {
    /// Signing secret: HMAC key material, or a PEM-encoded RSA key for the
    /// RS* algorithms
    pub secret: String,

    /// Lifetime of issued tokens
    pub expires: Duration,

    /// Signature algorithm
    pub algorithm: SigningAlgorithm,
}

/// JWT claims structure
///
/// # Claims
///
/// - `sub`: Subject — the user id as a decimal string
/// - `iat`: Issued at (Unix timestamp)
/// - `exp`: Expiration time (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — user id, stringified decimal
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Error type for token issuance
///
/// Issuance is computation only, so the single failure mode is the signing
/// operation itself rejecting the configured key material.
#[derive(Debug, thiserror::Error)]
#[error("failed to sign token: {0}")]
pub struct TokenSigningError(#[from] jsonwebtoken::errors::Error);

/// Issues and verifies bearer tokens bound to a user id
///
/// The processor owns no state beyond its configuration; it is safe to share
/// behind an `Arc` without synchronization.
pub struct JwtTokenProcessor {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires: Duration,
}

impl JwtTokenProcessor {
    /// Creates a processor from the given options
    ///
    /// # Errors
    ///
    /// Returns an error if an RS* algorithm is configured and the secret is
    /// not a parseable PEM-encoded RSA key. HMAC configurations cannot fail.
    pub fn new(options: TokenOptions) -> Result<Self, jsonwebtoken::errors::Error> {
        let algorithm = options.algorithm.as_jwt();

        let (encoding_key, decoding_key) = if options.algorithm.is_hmac() {
            (
                EncodingKey::from_secret(options.secret.as_bytes()),
                DecodingKey::from_secret(options.secret.as_bytes()),
            )
        } else {
            (
                EncodingKey::from_rsa_pem(options.secret.as_bytes())?,
                DecodingKey::from_rsa_pem(options.secret.as_bytes())?,
            )
        };

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;

        Ok(Self {
            header: Header::new(algorithm),
            encoding_key,
            decoding_key,
            validation,
            expires: options.expires,
        })
    }

    /// Generates a signed token for the given user id
    ///
    /// Claims are `{iat: now, exp: now + lifetime, sub: user_id}` with the
    /// subject stringified. Issuance has no side effects.
    pub fn generate_token(&self, user_id: i64) -> Result<String, TokenSigningError> {
        let issued_at = Utc::now();
        let expiration = issued_at + self.expires;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        };

        Ok(encode(&self.header, &claims, &self.encoding_key)?)
    }

    /// Validates a token and returns the user id it was issued for
    ///
    /// # Errors
    ///
    /// Any failure — malformed token, bad signature, expiry, missing or
    /// non-numeric subject — returns `Unauthenticated` with the same
    /// generic message. The underlying cause is logged at debug level and
    /// never exposed to the caller.
    pub fn validate_token(&self, token: &str) -> Result<i64, AuthError> {
        let invalid = || AuthError::unauthenticated("Invalid credentials");

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(cause = %e, "token validation failed");
            invalid()
        })?;

        data.claims.sub.parse::<i64>().map_err(|e| {
            tracing::debug!(cause = %e, "token subject is not a user id");
            invalid()
        })
    }
}
