//! Roster Core
//!
//! Domain types and error handling shared by the Roster server and client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Role`, `UserStatus`, `Birthdate`
//! - **Mutation Inputs**: `CreateUser`, `UpdateUser`
//! - **Error Handling**: `CoreError` and `Result`
//!
//! With the `graphql` feature enabled, `Role` and `UserStatus` derive
//! GraphQL enums and `Birthdate` becomes the `Date` scalar.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{Birthdate, CreateUser, Role, User, UserId, UserStatus};
//!
//! let birthdate: Birthdate = "2000-01-01".parse().unwrap();
//! let input = CreateUser {
//!     name: "Zed".to_string(),
//!     email: "z@x.com".to_string(),
//!     role: Role::User,
//!     status: UserStatus::Pending,
//!     birthdate,
//! };
//!
//! let user = User::from_create(UserId::new("6"), input);
//! assert_eq!(user.birthdate.to_iso_string(), "2000-01-01T00:00:00.000Z");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{Birthdate, CreateUser, Role, UpdateUser, User, UserId, UserStatus};
