/// User domain types
use crate::types::{Birthdate, Role, UserId, UserStatus};
use serde::{Deserialize, Serialize};

/// A user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the store on creation
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Access role
    pub role: Role,

    /// Account status
    pub status: UserStatus,

    /// Date of birth
    pub birthdate: Birthdate,
}

impl User {
    /// Build a record from creation input and a freshly assigned id
    pub fn from_create(id: UserId, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            role: input.role,
            status: input.status,
            birthdate: input.birthdate,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, update: UpdateUser) {
        self.name = update.name;
        self.email = update.email;
        self.role = update.role;
        self.status = update.status;
        self.birthdate = update.birthdate;
    }

    /// The mutable fields of this record as a full-replace update
    pub fn to_update(&self) -> UpdateUser {
        UpdateUser {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
            birthdate: self.birthdate,
        }
    }
}

/// Input for creating a user; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub birthdate: Birthdate,
}

/// Input for a full-replace update; every field is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub birthdate: Birthdate,
}

impl From<CreateUser> for UpdateUser {
    fn from(input: CreateUser) -> Self {
        Self {
            name: input.name,
            email: input.email,
            role: input.role,
            status: input.status,
            birthdate: input.birthdate,
        }
    }
}
