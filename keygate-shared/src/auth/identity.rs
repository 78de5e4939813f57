/// Identity resolution
///
/// Bridges a request's credential — whatever raw token string the boundary
/// layer pulled off the wire — to a verified user id. Keeping this as its
/// own type decouples where a token comes from (header, cookie) from how it
/// is checked.

use crate::auth::jwt::JwtTokenProcessor;
use crate::error::AuthError;

/// A caller's identity as claimed by a presented token
///
/// Holds the optional raw token alongside the processor that can verify it.
/// Constructed per request by the boundary layer.
pub struct TokenIdentity<'a> {
    processor: &'a JwtTokenProcessor,
    token: Option<String>,
}

impl<'a> TokenIdentity<'a> {
    /// Pairs a processor with the credential extracted from a request
    pub fn new(processor: &'a JwtTokenProcessor, token: Option<String>) -> Self {
        Self { processor, token }
    }

    /// Returns the verified user id behind the presented token
    ///
    /// # Errors
    ///
    /// A missing credential fails exactly like an invalid one; validation
    /// failures propagate unchanged from the token processor.
    pub fn current_user_id(&self) -> Result<i64, AuthError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AuthError::unauthenticated("Invalid credentials"))?;

        self.processor.validate_token(token)
    }
}
