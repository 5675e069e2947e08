//! GraphQL input and output types.

use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use crate::domain::{Post, User};

/// Username and plaintext password pair; request-scoped, never persisted
#[derive(Debug, InputObject)]
pub struct UserInput {
    pub username: String,
    pub password: String,
}

/// A single human-readable validation or business-rule failure
#[derive(Debug, Clone, SimpleObject)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// User as exposed over GraphQL (no password digest)
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserType {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserType {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Post as exposed over GraphQL
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Post")]
pub struct PostType {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostType {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Discriminated register/login result: either field errors or a user.
///
/// Both fields are optional in the schema, but the constructors below are
/// the only way to build one, so exactly one side is ever populated.
#[derive(Debug, SimpleObject)]
pub struct UserResponse {
    pub errors: Option<Vec<FieldError>>,
    pub user: Option<UserType>,
}

impl UserResponse {
    /// Successful response carrying the user
    pub fn from_user(user: User) -> Self {
        Self {
            errors: None,
            user: Some(UserType::from(user)),
        }
    }

    /// Failure response carrying a single field error
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            errors: Some(vec![FieldError::new(message)]),
            user: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_response_sides_are_exclusive() {
        let user = User::new(1, "alice".to_string(), "digest".to_string());

        let ok = UserResponse::from_user(user);
        assert!(ok.errors.is_none());
        assert!(ok.user.is_some());

        let err = UserResponse::from_error("Invalid credentials.");
        assert!(err.user.is_none());
        let errors = err.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid credentials.");
    }

    #[test]
    fn test_user_type_drops_password_hash() {
        let mut user = User::new(7, "bob".to_string(), "digest".to_string());
        user.created_at = Utc::now();

        let exposed = UserType::from(user);
        assert_eq!(exposed.id, 7);
        assert_eq!(exposed.username, "bob");
    }
}
