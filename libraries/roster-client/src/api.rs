//! Operation seam between the UI flows and the transport.

use crate::error::Result;
use async_trait::async_trait;
use roster_core::{CreateUser, UpdateUser, User, UserId};

/// The five user operations the admin panel issues.
///
/// [`RosterClient`](crate::RosterClient) implements this over HTTP. The UI
/// controllers only see the trait, so they can run against any backend.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Every user, in store order
    async fn get_users(&self) -> Result<Vec<User>>;

    /// A single user, or `None` when the id is unknown
    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>>;

    async fn create_user(&self, input: CreateUser) -> Result<User>;

    /// Full replacement of every mutable field
    async fn update_user(&self, id: &UserId, update: UpdateUser) -> Result<User>;

    /// Remove a user, returning the record as it was
    async fn delete_user(&self, id: &UserId) -> Result<User>;
}
