//! Account service - Handles user registration and login.
//!
//! Validation runs in a fixed order and short-circuits on the first
//! failure; the password is hashed before any persistence attempt.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::MIN_USERNAME_LENGTH;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, password: String) -> AppResult<User>;

    /// Login with username and password
    async fn login(&self, username: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AccountService.
pub struct Accounts {
    users: Arc<dyn UserRepository>,
}

impl Accounts {
    /// Create new account service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AccountService for Accounts {
    async fn register(&self, username: String, password: String) -> AppResult<User> {
        // Count characters, not bytes, so multibyte usernames measure correctly
        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(AppError::validation(format!(
                "Username must be at least {} characters long.",
                MIN_USERNAME_LENGTH
            )));
        }

        // Password::new validates length, then hashes with a fresh salt
        let password_hash = Password::new(&password)?.into_string();

        // No duplicate pre-check: the unique constraint is the arbiter,
        // which also resolves races between concurrent registrations.
        self.users.create(username, password_hash).await
    }

    async fn login(&self, username: String, password: String) -> AppResult<User> {
        let user_result = self.users.find_by_username(&username).await?;

        // SECURITY: Perform password verification even if the user doesn't
        // exist to prevent timing attacks that could enumerate usernames.
        // The dummy hash always fails verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = user_result
            .as_ref()
            .map(|user| user.password_hash.as_str())
            .unwrap_or(dummy_hash);

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Missing user and wrong password are indistinguishable to callers
        match user_result {
            Some(user) if password_valid => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
