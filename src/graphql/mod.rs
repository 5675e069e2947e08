//! GraphQL layer - Schema, types, and resolvers.
//!
//! The schema is built from plain resolver structs via async-graphql's
//! `#[Object]` macro; services are injected as schema data and read back
//! in resolvers through the request context.

pub mod resolvers;
pub mod schema;
pub mod types;

pub use schema::{build_schema, AppSchema};
pub use types::{FieldError, PostType, UserInput, UserResponse, UserType};
