//! User resolvers - register and login mutations.
//!
//! Validation and business-rule failures come back as field errors inside
//! `UserResponse`; storage and infrastructure failures become GraphQL
//! errors so a single request failure never takes the process down.

use async_graphql::{Context, Object, Result as GqlResult};
use std::sync::Arc;

use crate::errors::AppError;
use crate::graphql::types::{UserInput, UserResponse};
use crate::services::AccountService;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Register a new user
    async fn register(&self, ctx: &Context<'_>, options: UserInput) -> GqlResult<UserResponse> {
        let accounts = ctx.data::<Arc<dyn AccountService>>()?;

        match accounts.register(options.username, options.password).await {
            Ok(user) => Ok(UserResponse::from_user(user)),
            Err(e) => as_field_error(e),
        }
    }

    /// Login with username and password
    async fn login(&self, ctx: &Context<'_>, options: UserInput) -> GqlResult<UserResponse> {
        let accounts = ctx.data::<Arc<dyn AccountService>>()?;

        match accounts.login(options.username, options.password).await {
            Ok(user) => Ok(UserResponse::from_user(user)),
            Err(e) => as_field_error(e),
        }
    }
}

/// Translate an application error into a field-error response when it is
/// user-facing, or propagate it as a GraphQL error otherwise.
fn as_field_error(err: AppError) -> GqlResult<UserResponse> {
    match err.field_message() {
        Some(message) => Ok(UserResponse::from_error(message)),
        None => Err(err.into_graphql_error()),
    }
}
