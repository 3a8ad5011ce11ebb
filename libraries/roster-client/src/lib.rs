//! Roster Client
//!
//! Client side of the Roster admin panel.
//!
//! # Features
//!
//! - **Transport**: [`RosterClient`] posts GraphQL documents and decodes the
//!   `{data, errors}` envelope
//! - **Cache**: [`UserCache`] mirrors the user list and applies mutation
//!   results in place
//! - **UI flows**: headless controllers for the list page and the
//!   add/edit/delete dialogs
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{AdminPanel, ClientConfig};
//!
//! let panel = AdminPanel::connect(ClientConfig::new("http://localhost:4000/"))?;
//! panel.users.load().await;
//! for user in panel.users.rows().await {
//!     println!("{} <{}>", user.name, user.email);
//! }
//! ```

mod api;
mod cache;
mod client;
pub mod documents;
mod error;
mod types;
pub mod ui;

pub use api::UserApi;
pub use cache::{shared, SharedCache, Ticket, UserCache};
pub use client::RosterClient;
pub use error::{ClientError, Result, USER_NOT_FOUND};
pub use types::{ClientConfig, GraphqlError};
pub use ui::{
    ActionState, AddUserModal, AdminPanel, DeleteUserConfirm, EditUserModal, GridField,
    Notification, NotificationKind, PageStatus, UserFormValues, UsersPage,
};

// Re-export domain types so callers need only this crate
pub use roster_core::{Birthdate, CreateUser, Role, UpdateUser, User, UserId, UserStatus};
