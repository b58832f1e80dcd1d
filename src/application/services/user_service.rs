//! User registration service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Minimum username length accepted at registration.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Service for registering and looking up users.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a user.
    ///
    /// Usernames are trimmed; a blank display name is stored as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is shorter than
    /// [`MIN_USERNAME_LENGTH`] characters or contains whitespace.
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(&self, username: &str, name: Option<&str>) -> Result<User, AppError> {
        let username = username.trim();

        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(AppError::bad_request(
                "Username is too short",
                json!({ "min_length": MIN_USERNAME_LENGTH }),
            ));
        }
        if username.chars().any(char::is_whitespace) {
            return Err(AppError::bad_request(
                "Username must not contain whitespace",
                json!({ "username": username }),
            ));
        }

        if self.repository.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ));
        }

        let name = name.map(str::trim).filter(|n| !n.is_empty());

        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                name: name.map(str::to_string),
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Looks up a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this username.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "username": username })))
    }

    /// Lists all registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }
}
