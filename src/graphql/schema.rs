//! Schema construction.

use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use super::resolvers::{MutationRoot, QueryRoot};
use crate::services::{AccountService, PostService};

/// The application's executable GraphQL schema
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with services attached as context data.
///
/// The schema builder performs no input validation; resolvers own their
/// validation rules.
pub fn build_schema(
    accounts: Arc<dyn AccountService>,
    posts: Arc<dyn PostService>,
) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(accounts)
    .data(posts)
    .finish()
}
