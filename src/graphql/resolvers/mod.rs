//! GraphQL resolvers, one module per concern.

mod hello;
mod post;
mod user;

pub use hello::HelloQuery;
pub use post::{PostMutation, PostQuery};
pub use user::UserMutation;

use async_graphql::MergedObject;

/// Root query type merging all query resolvers
#[derive(Default, MergedObject)]
pub struct QueryRoot(pub HelloQuery, pub PostQuery);

/// Root mutation type merging all mutation resolvers
#[derive(Default, MergedObject)]
pub struct MutationRoot(pub UserMutation, pub PostMutation);
