/// Authentication endpoints
///
/// This module provides the user-facing authentication surface:
///
/// # Endpoints
///
/// - `POST /auth/register` - Create an account
/// - `POST /auth/login` - Authenticate and receive a token cookie
/// - `GET /auth/me` - Fetch the authenticated user's own record
/// - `DELETE /auth/me` - Delete the authenticated user's own record
///
/// Login plants the issued token in an HTTP-only `access_token` cookie for
/// browser clients; API clients may instead send it back as an
/// `Authorization: Bearer` header. Both carriers feed the same identity
/// resolution.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use keygate_shared::{
    auth::{extract::{BearerToken, ACCESS_TOKEN_COOKIE}, identity::TokenIdentity},
    usecases::users,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration / login request
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Username
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,

    /// Password
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Public view of a user record
///
/// The password never appears in a response body.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID
    pub id: i64,

    /// Username
    pub username: String,
}

impl UserResponse {
    fn from_user(user: keygate_shared::models::user::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /auth/register
/// Content-Type: application/json
///
/// {"username": "alim", "password": "superpassword"}
/// ```
///
/// # Response
///
/// `201 Created` with `{"id": 1, "username": "alim"}`. No token is issued;
/// clients log in afterwards.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: empty username or password
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    req.validate()?;

    let user = users::register_user(&state.store, &req.username, &req.password)?;

    tracing::info!(user_id = user.id, "registered user");

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(user))))
}

/// Login and receive a token
///
/// # Endpoint
///
/// ```text
/// POST /auth/login
/// Content-Type: application/json
///
/// {"username": "alim", "password": "superpassword"}
/// ```
///
/// # Response
///
/// `200 OK` with `{"id": 1, "username": "alim"}` and a `Set-Cookie` header
/// carrying the signed token in an HTTP-only `access_token` cookie.
///
/// # Errors
///
/// - `401 Unauthorized`: unknown username or wrong password (one message
///   for both)
/// - `422 Unprocessable Entity`: empty username or password
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<(CookieJar, Json<UserResponse>)> {
    req.validate()?;

    let user = users::login_user(&state.store, &req.username, &req.password)?;
    let token = state.tokens.generate_token(user.id)?;

    let mut cookie = Cookie::new(ACCESS_TOKEN_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");

    tracing::info!(user_id = user.id, "issued token");

    Ok((jar.add(cookie), Json(UserResponse::from_user(user))))
}

/// Fetch the authenticated user's own record
///
/// # Errors
///
/// - `401 Unauthorized`: missing/invalid/expired token, or a token whose
///   user has since been deleted
pub async fn me(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<UserResponse>> {
    let identity = TokenIdentity::new(&state.tokens, token.into_inner());
    let user = users::get_authenticated_user(&identity, &state.store)?;

    Ok(Json(UserResponse::from_user(user)))
}

/// Delete the authenticated user's own record
///
/// Returns `204 No Content` with an empty body. The presented token stays
/// structurally valid until expiry but stops resolving to a user.
///
/// # Errors
///
/// - `401 Unauthorized`: same conditions as `GET /auth/me`
pub async fn delete_me(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<StatusCode> {
    let identity = TokenIdentity::new(&state.tokens, token.into_inner());
    users::delete_authenticated_user(&identity, &state.store)?;

    Ok(StatusCode::NO_CONTENT)
}
