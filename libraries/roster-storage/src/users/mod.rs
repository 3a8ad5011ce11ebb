//! User records: the ordered in-memory list and its CRUD operations

mod seed;

pub use seed::seed_users;

use crate::error::{Result, StorageError};
use roster_core::{CreateUser, UpdateUser, User, UserId};

/// Ordered, in-memory collection of user records
///
/// Ids come from a counter that only moves forward, so an id freed by
/// [`UserStore::remove`] is never handed out again.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    /// Create an empty store whose first id will be `"1"`
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the five seed records
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store from existing records
    ///
    /// The counter starts past the largest numeric id present, or past the
    /// record count when that is larger.
    pub fn with_users(users: Vec<User>) -> Self {
        let highest = users
            .iter()
            .filter_map(|user| user.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = highest.max(users.len() as u64) + 1;

        Self { users, next_id }
    }

    /// Restore the seed records and the id counter
    pub fn reset(&mut self) {
        *self = Self::seeded();
        tracing::debug!("User store reset to seed data");
    }

    /// All records in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Find a record by id
    pub fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Id the next insert will receive
    pub fn peek_next_id(&self) -> UserId {
        UserId::new(self.next_id.to_string())
    }

    /// Append a new record, assigning its id
    pub fn insert(&mut self, input: CreateUser) -> User {
        let id = self.peek_next_id();
        self.next_id += 1;

        let user = User::from_create(id, input);
        self.users.push(user.clone());

        tracing::debug!(user_id = %user.id, count = self.users.len(), "Inserted user");
        user
    }

    /// Overwrite every mutable field of a record in place
    pub fn replace(&mut self, id: &UserId, update: UpdateUser) -> Result<User> {
        let user = self
            .users
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or_else(|| StorageError::UserNotFound(id.clone()))?;

        user.apply(update);

        tracing::debug!(user_id = %id, "Replaced user");
        Ok(user.clone())
    }

    /// Remove a record, returning its last values
    pub fn remove(&mut self, id: &UserId) -> Result<User> {
        let index = self
            .users
            .iter()
            .position(|user| &user.id == id)
            .ok_or_else(|| StorageError::UserNotFound(id.clone()))?;

        let removed = self.users.remove(index);

        tracing::debug!(user_id = %id, count = self.users.len(), "Removed user");
        Ok(removed)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
