//! Repository trait for blog post data access.

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing blog posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_blog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Returns every blog post in insertion order.
    ///
    /// This is the snapshot fed to [`crate::domain::aggregation`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Blog>, AppError>;

    /// Finds a blog post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Stores a new blog post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owning user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError>;

    /// Partially updates a blog post.
    ///
    /// Returns `Ok(None)` if no post has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Option<Blog>, AppError>;

    /// Removes a blog post.
    ///
    /// Returns `Ok(true)` if a post was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored blog posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
