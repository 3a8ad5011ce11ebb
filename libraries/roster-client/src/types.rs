//! Request and response types for the Roster GraphQL endpoint.

use roster_core::{Birthdate, CreateUser, Role, UpdateUser, User, UserStatus};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for a Roster endpoint.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint (e.g., "http://localhost:4000/")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// Body posted to the endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

/// `{data, errors}` envelope returned by the endpoint.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

// =============================================================================
// Variables
// =============================================================================

/// Variables for operations that only take an id.
#[derive(Debug, Serialize)]
pub struct IdVariables<'a> {
    pub id: &'a str,
}

/// Variables for `createUser`.
#[derive(Debug, Serialize)]
pub struct CreateUserVariables {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub birthdate: Birthdate,
}

impl From<CreateUser> for CreateUserVariables {
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

/// Variables for `updateUser`.
#[derive(Debug, Serialize)]
pub struct UpdateUserVariables<'a> {
    pub id: &'a str,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub birthdate: Birthdate,
}

impl<'a> UpdateUserVariables<'a> {
    pub fn new(id: &'a str, update: UpdateUser) -> Self {
        Self {
            id,
            name: update.name,
            email: update.email,
            role: update.role,
            status: update.status,
            birthdate: update.birthdate,
        }
    }
}

// =============================================================================
// Response data
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersData {
    pub get_users: Vec<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserByIdData {
    pub get_user_by_id: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub create_user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    pub update_user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserData {
    pub delete_user: User,
}
