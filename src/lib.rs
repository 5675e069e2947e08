//! GraphQL API Starter - A small GraphQL backend for users and posts
//!
//! This crate wires a GraphQL schema (async-graphql) over SeaORM
//! persistence, with Argon2 password hashing and clap-based commands.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **graphql**: Schema, resolvers, and GraphQL types
//! - **api**: HTTP routes and application state
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod graphql;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Post, User};
pub use errors::{AppError, AppResult};
