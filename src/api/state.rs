//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::graphql::{build_schema, AppSchema};
use crate::infra::{Database, PostStore, UserStore};
use crate::services::{AccountService, Accounts, PostManager, PostService};

/// Application state holding the executable schema and infrastructure.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema with services attached
    pub schema: AppSchema,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Wires repositories into services and attaches them to the schema.
    pub fn from_database(database: Arc<Database>) -> Self {
        let connection = database.get_connection();

        let accounts: Arc<dyn AccountService> =
            Arc::new(Accounts::new(Arc::new(UserStore::new(connection.clone()))));
        let posts: Arc<dyn PostService> =
            Arc::new(PostManager::new(Arc::new(PostStore::new(connection))));

        Self {
            schema: build_schema(accounts, posts),
            database,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        accounts: Arc<dyn AccountService>,
        posts: Arc<dyn PostService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            schema: build_schema(accounts, posts),
            database,
        }
    }
}
