//! Post resolvers - CRUD queries and mutations.

use async_graphql::{Context, Object, Result as GqlResult};
use std::sync::Arc;

use crate::errors::AppError;
use crate::graphql::types::PostType;
use crate::services::PostService;

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// List all posts
    async fn posts(&self, ctx: &Context<'_>) -> GqlResult<Vec<PostType>> {
        let posts = ctx.data::<Arc<dyn PostService>>()?;
        let all = posts.list_posts().await.map_err(AppError::into_graphql_error)?;
        Ok(all.into_iter().map(PostType::from).collect())
    }

    /// Get a post by ID
    async fn post(&self, ctx: &Context<'_>, id: i32) -> GqlResult<Option<PostType>> {
        let posts = ctx.data::<Arc<dyn PostService>>()?;
        let post = posts.get_post(id).await.map_err(AppError::into_graphql_error)?;
        Ok(post.map(PostType::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a new post
    async fn create_post(&self, ctx: &Context<'_>, title: String) -> GqlResult<PostType> {
        let posts = ctx.data::<Arc<dyn PostService>>()?;
        let post = posts
            .create_post(title)
            .await
            .map_err(AppError::into_graphql_error)?;
        Ok(PostType::from(post))
    }

    /// Update a post's title; null when the post does not exist
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
        title: String,
    ) -> GqlResult<Option<PostType>> {
        let posts = ctx.data::<Arc<dyn PostService>>()?;
        let post = posts
            .update_post(id, title)
            .await
            .map_err(AppError::into_graphql_error)?;
        Ok(post.map(PostType::from))
    }

    /// Delete a post; false when the post does not exist
    async fn delete_post(&self, ctx: &Context<'_>, id: i32) -> GqlResult<bool> {
        let posts = ctx.data::<Arc<dyn PostService>>()?;
        posts
            .delete_post(id)
            .await
            .map_err(AppError::into_graphql_error)
    }
}
