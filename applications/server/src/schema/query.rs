/// Query resolvers
use crate::schema::UserObject;
use async_graphql::{Context, Object, Result, ID};
use roster_core::UserId;
use roster_storage::SharedStore;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users in list order
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let store = ctx.data::<SharedStore>()?.read().await;

        tracing::debug!(count = store.len(), "Listing users");
        Ok(store.list().iter().cloned().map(UserObject::from).collect())
    }

    /// A single user, or null when the id is unknown
    async fn get_user_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let store = ctx.data::<SharedStore>()?.read().await;
        let id = UserId::new(id.0);

        let user = store.find_by_id(&id).cloned();
        if user.is_none() {
            tracing::debug!(user_id = %id, "User lookup missed");
        }

        Ok(user.map(UserObject::from))
    }
}
