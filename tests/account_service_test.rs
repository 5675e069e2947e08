//! Account service unit tests.
//!
//! Uses a mocked user repository so validation ordering and the
//! no-persistence-on-invalid-input guarantees can be asserted directly.

use std::sync::Arc;

use chrono::Utc;

use graphql_api_starter::domain::{Password, User};
use graphql_api_starter::errors::AppError;
use graphql_api_starter::infra::MockUserRepository;
use graphql_api_starter::services::{AccountService, Accounts};

fn user_with_hash(id: i32, username: &str, password_hash: String) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_register_short_username_skips_persistence() {
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let service = Accounts::new(Arc::new(repo));
    let result = service
        .register("ab".to_string(), "password123".to_string())
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "Username must be at least 3 characters long.");
        }
        other => panic!("expected validation error, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_register_short_password_skips_persistence() {
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let service = Accounts::new(Arc::new(repo));
    let result = service
        .register("alice".to_string(), "short".to_string())
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "Password must be at least 8 characters long.");
        }
        other => panic!("expected validation error, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_register_multibyte_username_measured_in_characters() {
    // Two CJK characters are six bytes but still too short
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let service = Accounts::new(Arc::new(repo));
    let result = service
        .register("日本".to_string(), "password123".to_string())
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "Username must be at least 3 characters long.");
        }
        other => panic!("expected validation error, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_register_multibyte_password_measured_in_characters() {
    // Three CJK characters are nine bytes but only three characters
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let service = Accounts::new(Arc::new(repo));
    let result = service
        .register("alice".to_string(), "日本語".to_string())
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "Password must be at least 8 characters long.");
        }
        other => panic!("expected validation error, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_register_username_checked_before_password() {
    // Both fields invalid: the username error wins
    let mut repo = MockUserRepository::new();
    repo.expect_create().times(0);

    let service = Accounts::new(Arc::new(repo));
    let result = service.register("ab".to_string(), "short".to_string()).await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(msg, "Username must be at least 3 characters long.");
        }
        other => panic!("expected validation error, got {:?}", other.map(|u| u.id)),
    }
}

#[tokio::test]
async fn test_register_stores_digest_not_plaintext() {
    let plain = "password123";

    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(move |username, password_hash| {
            username.as_str() == "alice"
                && password_hash.as_str() != plain
                && Password::from_hash(password_hash.clone()).verify(plain)
        })
        .times(1)
        .returning(|username, password_hash| Ok(user_with_hash(1, &username, password_hash)));

    let service = Accounts::new(Arc::new(repo));
    let user = service
        .register("alice".to_string(), plain.to_string())
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_ne!(user.password_hash, plain);
}

#[tokio::test]
async fn test_register_duplicate_username_is_conflict() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .returning(|_, _| Err(AppError::conflict("Username")));

    let service = Accounts::new(Arc::new(repo));
    let result = service
        .register("alice".to_string(), "password123".to_string())
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.field_message().as_deref(), Some("Username already exists."));
}

#[tokio::test]
async fn test_login_unknown_and_wrong_password_are_indistinguishable() {
    let hash = Password::new("password123").unwrap().into_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |username| {
            if username == "alice" {
                Ok(Some(user_with_hash(1, "alice", hash.clone())))
            } else {
                Ok(None)
            }
        });

    let service = Accounts::new(Arc::new(repo));

    let unknown = service
        .login("nobody".to_string(), "password123".to_string())
        .await
        .unwrap_err();
    let wrong = service
        .login("alice".to_string(), "wrong-password".to_string())
        .await
        .unwrap_err();

    assert_eq!(unknown.field_message(), wrong.field_message());
    assert_eq!(unknown.field_message().as_deref(), Some("Invalid credentials."));
}

#[tokio::test]
async fn test_login_round_trip() {
    // A password hashed on registration verifies on login
    let plain = "password123";
    let hash = Password::new(plain).unwrap().into_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(user_with_hash(1, "alice", hash.clone()))));

    let service = Accounts::new(Arc::new(repo));
    let user = service
        .login("alice".to_string(), plain.to_string())
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.username, "alice");
}
