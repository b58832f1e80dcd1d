//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, BlogService, StatsService};
use crate::domain::repositories::{BlogRepository, TokenRepository};

/// Services available to request handlers.
///
/// Services are held behind trait objects so the same router runs against
/// PostgreSQL in production and in-memory repositories in tests.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService<dyn BlogRepository>>,
    pub stats_service: Arc<StatsService<dyn BlogRepository>>,
    pub auth_service: Arc<AuthService<dyn TokenRepository>>,
}

impl AppState {
    /// Wires services over the given repositories.
    ///
    /// `signing_secret` is the HMAC key tokens were hashed with.
    pub fn new(
        blog_repository: Arc<dyn BlogRepository>,
        token_repository: Arc<dyn TokenRepository>,
        signing_secret: String,
    ) -> Self {
        Self {
            blog_service: Arc::new(BlogService::new(blog_repository.clone())),
            stats_service: Arc::new(StatsService::new(blog_repository)),
            auth_service: Arc::new(AuthService::new(token_repository, signing_secret)),
        }
    }
}
