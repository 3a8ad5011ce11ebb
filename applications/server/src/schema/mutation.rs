/// Mutation resolvers
///
/// Every mutation holds the store's write lock for its whole
/// find-and-modify step.
use crate::schema::UserObject;
use async_graphql::{Context, Object, Result, ID};
use roster_core::{Birthdate, CreateUser, Role, UpdateUser, UserId, UserStatus};
use roster_storage::SharedStore;

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user; the id is assigned by the server
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        role: Role,
        status: UserStatus,
        birthdate: Birthdate,
    ) -> Result<UserObject> {
        let input = CreateUser {
            name,
            email,
            role,
            status,
            birthdate,
        };

        let user = ctx.data::<SharedStore>()?.write().await.insert(input);

        tracing::info!(user_id = %user.id, name = %user.name, "Created user");
        Ok(user.into())
    }

    /// Replace every field of an existing user
    #[allow(clippy::too_many_arguments)]
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        email: String,
        role: Role,
        status: UserStatus,
        birthdate: Birthdate,
    ) -> Result<UserObject> {
        let id = UserId::new(id.0);
        let update = UpdateUser {
            name,
            email,
            role,
            status,
            birthdate,
        };

        let user = ctx
            .data::<SharedStore>()?
            .write()
            .await
            .replace(&id, update)
            .map_err(|err| {
                tracing::warn!(user_id = %id, "Update of unknown user");
                err
            })?;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user.into())
    }

    /// Remove a user, returning its last values
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<UserObject> {
        let id = UserId::new(id.0);

        let user = ctx
            .data::<SharedStore>()?
            .write()
            .await
            .remove(&id)
            .map_err(|err| {
                tracing::warn!(user_id = %id, "Delete of unknown user");
                err
            })?;

        tracing::info!(user_id = %user.id, name = %user.name, "Deleted user");
        Ok(user.into())
    }
}
