/// User use cases
///
/// The four operations the service exposes: register, login, and the two
/// token-gated self-service calls. Handlers own nothing beyond wiring; all
/// decision making lives here.
///
/// Failure messages are deliberately generic. Login never says whether the
/// username or the password was wrong, and a structurally valid token whose
/// subject has been deleted fails the same way as a forged one.

use crate::auth::identity::TokenIdentity;
use crate::error::AuthError;
use crate::models::user::User;
use crate::store::UserStore;

/// Registers a new user and returns the stored record
///
/// Allocates the next id, stores the record, and hands it back. Registration
/// does not issue a token; callers log in afterwards.
///
/// Note: usernames are NOT checked for collisions — registering the same
/// name twice produces two records with distinct ids. The duplicate-record
/// error kind and its boundary mapping exist, but nothing raises them yet.
/// See DESIGN.md before relying on either behavior.
pub fn register_user(
    store: &UserStore,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = User::new(store.next_id(), username, password);
    store.save_user(user.clone());

    Ok(user)
}

/// Authenticates a username/password pair and returns the matching user
///
/// Token issuance from the returned record is the boundary layer's job.
///
/// # Errors
///
/// Unknown username and wrong password both return `Unauthenticated` with
/// the same message.
pub fn login_user(store: &UserStore, username: &str, password: &str) -> Result<User, AuthError> {
    store
        .get_user_by_username(username)
        .filter(|user| user.password == password)
        .ok_or_else(|| AuthError::unauthenticated("Invalid username or password"))
}

/// Returns the record of the user the presented token belongs to
///
/// # Errors
///
/// Fails with `Unauthenticated` when the token does not verify, or when it
/// verifies but its subject no longer maps to a stored user (deleted after
/// issuance).
pub fn get_authenticated_user(
    identity: &TokenIdentity<'_>,
    store: &UserStore,
) -> Result<User, AuthError> {
    let user_id = identity.current_user_id()?;

    store
        .get_user(user_id)
        .ok_or_else(|| AuthError::unauthenticated("Invalid token"))
}

/// Deletes the record of the user the presented token belongs to
///
/// The token itself stays cryptographically valid until it expires, but
/// every later identity lookup will fail because the backing record is gone.
pub fn delete_authenticated_user(
    identity: &TokenIdentity<'_>,
    store: &UserStore,
) -> Result<(), AuthError> {
    let user = get_authenticated_user(identity, store)?;

    store
        .delete_user(user.id)
        .map_err(|_| AuthError::unauthenticated("Invalid token"))
}
