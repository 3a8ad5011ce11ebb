//! Roster Server Library
//!
//! GraphQL user-management API over an in-memory store.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod schema;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{GraphqlSettings, ServerConfig, ServerSettings};
pub use error::{Result, ServerError};
pub use router::{bind, create_router};
pub use schema::{build_schema, RosterSchema};
pub use state::AppState;
