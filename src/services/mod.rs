//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits for
//! dependency inversion.

mod account_service;
mod post_service;

pub use account_service::{AccountService, Accounts};
pub use post_service::{PostManager, PostService};
