/// Role and status enumerations
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
#[cfg_attr(feature = "graphql", graphql(rename_items = "lowercase"))]
pub enum Role {
    Admin,
    User,
    Moderator,
}

impl Role {
    /// Every role, in the order forms offer them
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Moderator];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Moderator => "moderator",
        }
    }

    /// Human readable label for select options
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Moderator => "Moderator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "moderator" => Ok(Self::Moderator),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
#[cfg_attr(feature = "graphql", graphql(rename_items = "lowercase"))]
pub enum UserStatus {
    Active,
    Banned,
    Pending,
}

impl UserStatus {
    /// Every status, in the order forms offer them
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Banned, UserStatus::Pending];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Banned => "banned",
            Self::Pending => "pending",
        }
    }

    /// Human readable label for select options
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Banned => "Banned",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "banned" => Ok(Self::Banned),
            "pending" => Ok(Self::Pending),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}
