//! Authentication service for API token validation and issuance.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;
use crate::utils::token::{generate_token, hash_token};
use serde_json::json;

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService<R: TokenRepository + ?Sized> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token and returns the user it belongs to.
    ///
    /// On success, updates the `last_used` timestamp for auditing. A failure
    /// to record usage is logged and does not reject the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let Some(user) = self.repository.find_user_by_token(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            ));
        };

        if let Err(e) = self.repository.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, user_id = user.id, "Failed to record token usage");
        }

        Ok(user)
    }

    /// Issues a new token for a user and returns it with the raw value.
    ///
    /// The raw value is not recoverable afterwards; only its hash is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a token with this name already exists.
    /// Returns [`AppError::Internal`] on entropy or database errors.
    pub async fn issue_token(
        &self,
        user_id: i64,
        name: &str,
    ) -> Result<(ApiToken, String), AppError> {
        let raw = generate_token().map_err(|e| {
            AppError::internal(
                "Failed to generate token",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let token = self.register_token(user_id, name, &raw).await?;

        Ok((token, raw))
    }

    /// Stores a caller-chosen raw token for a user.
    ///
    /// # Errors
    ///
    /// See [`Self::issue_token`].
    pub async fn register_token(
        &self,
        user_id: i64,
        name: &str,
        raw_token: &str,
    ) -> Result<ApiToken, AppError> {
        let token_hash = hash_token(&self.signing_secret, raw_token);
        self.repository
            .create_token(user_id, name, &token_hash)
            .await
    }
}
