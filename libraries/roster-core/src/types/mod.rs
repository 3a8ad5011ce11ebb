mod birthdate;
mod ids;
mod role;
mod user;

pub use birthdate::Birthdate;
pub use ids::UserId;
pub use role::{Role, UserStatus};
pub use user::{CreateUser, UpdateUser, User};
