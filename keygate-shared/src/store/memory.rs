/// In-memory user registry
///
/// This module provides the single authority for user records: a `Vec` of
/// users behind a read-write lock, with linear lookups. The data model has
/// no scale requirement, so O(n) scans are acceptable and keep the store
/// trivially auditable.
///
/// # Id allocation
///
/// `next_id` recomputes `max(existing ids) + 1` on every call rather than
/// keeping a counter. Deleting the highest id therefore makes that id
/// available again, while ids freed in the middle of the range stay retired.
/// Allocation and insertion are two separate calls; callers that register
/// concurrently can interleave between them and obtain the same id. That
/// window is inherited from the service design and documented in DESIGN.md
/// rather than closed here.

use parking_lot::RwLock;

use crate::models::user::User;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No user with the given id exists
    #[error("no user with id {0}")]
    UserNotFound(i64),
}

/// Authoritative in-memory registry of users
///
/// All mutation goes through this type; nothing else holds the collection.
/// Reads hand out clones so callers never observe the registry mid-update.
///
/// # Example
///
/// ```
/// use keygate_shared::models::user::User;
/// use keygate_shared::store::UserStore;
///
/// let store = UserStore::new();
/// let id = store.next_id();
/// store.save_user(User::new(id, "alim", "superpassword"));
///
/// assert_eq!(store.get_user(id).unwrap().username, "alim");
/// ```
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Returns the user with the given id, or `None` if absent
    pub fn get_user(&self, id: i64) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    /// Returns the user with the given username, or `None` if absent
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Appends a user to the registry
    ///
    /// The store does not enforce id or username uniqueness; that policy
    /// lives with the caller.
    pub fn save_user(&self, user: User) {
        self.users.write().push(user);
    }

    /// Returns the next id to assign: 1 for an empty registry, otherwise
    /// `max(existing ids) + 1`
    pub fn next_id(&self) -> i64 {
        self.users
            .read()
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Removes the user with the given id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UserNotFound`] if no such user exists. Deletion
    /// of a missing id is a hard failure, not a no-op.
    pub fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        let mut users = self.users.write();
        let position = users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        users.remove(position);
        Ok(())
    }

    /// Returns the number of stored users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Returns true when no users are stored
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
