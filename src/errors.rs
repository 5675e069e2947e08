//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Errors that
//! represent validation or business-rule failures can be rendered as
//! GraphQL field errors; everything else surfaces as a GraphQL error.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AppError {
    /// Classify database errors on the way in.
    ///
    /// A unique-constraint violation is a business-rule conflict, not an
    /// infrastructure failure, so it is promoted to `Conflict` here using
    /// the structured error kind rather than matching on message text.
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("Username".to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

impl AppError {
    /// Render this error as a user-facing field error message, if it is
    /// the kind of error that belongs in a `UserResponse`.
    ///
    /// Validation and business-rule failures map to messages; storage and
    /// infrastructure failures return `None` and should be propagated as
    /// GraphQL errors instead.
    pub fn field_message(&self) -> Option<String> {
        match self {
            AppError::Validation(msg) => Some(msg.clone()),
            AppError::Conflict(entity) => Some(format!("{} already exists.", entity)),
            AppError::InvalidCredentials => Some("Invalid credentials.".to_string()),
            _ => None,
        }
    }
}

impl AppError {
    /// Convert into a GraphQL error suitable for returning to clients.
    ///
    /// An inherent method rather than a `From` impl: async-graphql already
    /// provides a blanket `From<T: Display>` conversion, so a dedicated
    /// impl would conflict with it. Internal details stay in the logs.
    pub fn into_graphql_error(self) -> async_graphql::Error {
        match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                async_graphql::Error::new("A database error occurred")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                async_graphql::Error::new("An internal error occurred")
            }
            _ => async_graphql::Error::new(self.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_field_message() {
        let err = AppError::validation("Username must be at least 3 characters long.");
        assert_eq!(
            err.field_message().as_deref(),
            Some("Username must be at least 3 characters long.")
        );
    }

    #[test]
    fn test_conflict_maps_to_field_message() {
        let err = AppError::conflict("Username");
        assert_eq!(err.field_message().as_deref(), Some("Username already exists."));
    }

    #[test]
    fn test_invalid_credentials_maps_to_field_message() {
        assert_eq!(
            AppError::InvalidCredentials.field_message().as_deref(),
            Some("Invalid credentials.")
        );
    }

    #[test]
    fn test_graphql_conversion_hides_internal_details() {
        let db = AppError::Database(sea_orm::DbErr::Custom("connection lost".into()));
        assert_eq!(db.into_graphql_error().message, "A database error occurred");

        let internal = AppError::internal("boom");
        assert_eq!(
            internal.into_graphql_error().message,
            "An internal error occurred"
        );

        // Client errors keep their message
        let conflict = AppError::conflict("Username");
        assert_eq!(conflict.into_graphql_error().message, "Username already exists");
    }

    #[test]
    fn test_infrastructure_errors_are_not_field_errors() {
        assert!(AppError::internal("boom").field_message().is_none());
        assert!(AppError::NotFound.field_message().is_none());
        let db = AppError::Database(sea_orm::DbErr::Custom("connection lost".into()));
        assert!(db.field_message().is_none());
    }
}
