/// Authentication utilities
///
/// This module provides the token-based identity layer for keygate:
///
/// # Modules
///
/// - [`jwt`]: Signed bearer-token issuance and validation
/// - [`identity`]: Resolution of a presented credential to a user id
/// - [`extract`]: Axum extractor that pulls the raw credential off a request
///
/// Tokens are stateless. There is no revocation list; expiry and secret
/// rotation are the only lifecycle controls.

pub mod extract;
pub mod identity;
pub mod jwt;
