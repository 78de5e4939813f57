/// User model
///
/// A user is an identity record held by the in-memory registry. Records are
/// immutable after creation: the only lifecycle transitions are insertion at
/// registration time and removal when the account is deleted.

use serde::{Deserialize, Serialize};

/// A registered user account
///
/// The `id` is assigned by the store and never changes. Passwords are held
/// verbatim and compared with plain equality — this service has no hashing
/// layer, which restricts it to demo and test deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned by the store, monotonically increasing
    pub id: i64,

    /// Username, unique among stored users
    pub username: String,

    /// Plaintext password
    pub password: String,
}

impl User {
    /// Creates a user record with the given identity and credentials
    pub fn new(id: i64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}
