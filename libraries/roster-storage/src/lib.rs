//! Roster Storage
//!
//! In-memory user store backing the Roster GraphQL API.
//!
//! # Architecture
//!
//! - **Volatile**: records live for the lifetime of the process, nothing is persisted
//! - **Ordered**: records keep insertion order and updates keep their position
//! - **Injected**: the store is an explicit value handed to whoever needs it,
//!   usually wrapped in a [`SharedStore`]
//!
//! # Example
//!
//! ```rust
//! use roster_storage::UserStore;
//! use roster_core::UserId;
//!
//! let mut store = UserStore::seeded();
//! assert_eq!(store.len(), 5);
//!
//! let removed = store.remove(&UserId::new("3")).unwrap();
//! assert_eq!(removed.name, "Carol Martinez");
//! assert!(store.find_by_id(&UserId::new("3")).is_none());
//! ```

mod error;

// Vertical slices
pub mod users;

pub use error::{Result, StorageError};
pub use users::{seed_users, UserStore};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Store handle shared between request handlers
///
/// Readers take the read lock; each mutation holds the write lock for the
/// whole find-and-modify step.
pub type SharedStore = Arc<RwLock<UserStore>>;

/// Wrap a store for sharing
pub fn shared(store: UserStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
