/// GraphQL `User` object type
use async_graphql::{SimpleObject, ID};
use roster_core::{Birthdate, Role, User, UserStatus};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub birthdate: Birthdate,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.into_inner()),
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            birthdate: user.birthdate,
        }
    }
}
