//! Infrastructure layer - Database and data access.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{PostRepository, PostStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockPostRepository, MockUserRepository};
