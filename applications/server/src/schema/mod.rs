//! GraphQL schema: user object, queries, mutations
//!
//! The `Date` scalar and the `Role`/`UserStatus` enums come from
//! `roster-core` with its `graphql` feature.

mod mutation;
mod query;
mod user;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use user::UserObject;

use crate::config::GraphqlSettings;
use async_graphql::{EmptySubscription, Schema};
use roster_storage::SharedStore;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store injected as context data
pub fn build_schema(store: SharedStore, settings: &GraphqlSettings) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(settings.depth_limit)
        .finish()
}

/// SDL of the schema, as printed by `roster-server print-schema`
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
