//! Post service - CRUD use cases for posts.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Post;
use crate::errors::AppResult;
use crate::infra::PostRepository;

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// List all posts
    async fn list_posts(&self) -> AppResult<Vec<Post>>;

    /// Get a post by ID; None when absent
    async fn get_post(&self, id: i32) -> AppResult<Option<Post>>;

    /// Create a new post
    async fn create_post(&self, title: String) -> AppResult<Post>;

    /// Update a post's title; None when absent
    async fn update_post(&self, id: i32, title: String) -> AppResult<Option<Post>>;

    /// Delete a post; false when absent
    async fn delete_post(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of PostService.
pub struct PostManager {
    posts: Arc<dyn PostRepository>,
}

impl PostManager {
    /// Create new post service instance
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn list_posts(&self) -> AppResult<Vec<Post>> {
        self.posts.list().await
    }

    async fn get_post(&self, id: i32) -> AppResult<Option<Post>> {
        self.posts.find_by_id(id).await
    }

    async fn create_post(&self, title: String) -> AppResult<Post> {
        self.posts.create(title).await
    }

    async fn update_post(&self, id: i32, title: String) -> AppResult<Option<Post>> {
        self.posts.update(id, title).await
    }

    async fn delete_post(&self, id: i32) -> AppResult<bool> {
        self.posts.delete(id).await
    }
}
