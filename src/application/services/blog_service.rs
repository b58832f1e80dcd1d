//! Blog post management service.

use std::sync::Arc;

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for creating, reading, updating and deleting blog posts.
///
/// Only the user who created a post may delete it.
pub struct BlogService<R: BlogRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BlogRepository + ?Sized> BlogService<R> {
    /// Creates a new blog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every blog post in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves one blog post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| blog_not_found(id))
    }

    /// Stores a new blog post owned by `new_blog.user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or url is blank or likes is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_blog(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        require_text("title", &new_blog.title)?;
        require_text("url", &new_blog.url)?;
        require_non_negative(new_blog.likes)?;

        let blog = self.repository.create(new_blog).await?;
        tracing::info!(blog_id = blog.id, user_id = blog.user_id, "Blog created");

        Ok(blog)
    }

    /// Applies a partial update to a blog post.
    ///
    /// An empty patch returns the post unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    /// Returns [`AppError::Validation`] if a provided title or url is blank or
    /// likes is negative.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_blog(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        if patch.is_empty() {
            return self.get_blog(id).await;
        }

        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        if let Some(url) = &patch.url {
            require_text("url", url)?;
        }
        if let Some(likes) = patch.likes {
            require_non_negative(likes)?;
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| blog_not_found(id))
    }

    /// Deletes a blog post on behalf of `requester_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post has this id.
    /// Returns [`AppError::Forbidden`] if the requester does not own the post.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_blog(&self, id: i64, requester_id: i64) -> Result<(), AppError> {
        let blog = self.get_blog(id).await?;

        if !blog.is_owned_by(requester_id) {
            return Err(AppError::forbidden(
                "Only the creator can delete a blog",
                json!({ "id": id }),
            ));
        }

        if !self.repository.delete(id).await? {
            return Err(blog_not_found(id));
        }

        tracing::info!(blog_id = id, user_id = requester_id, "Blog deleted");

        Ok(())
    }

    /// Counts stored blog posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_blogs(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn blog_not_found(id: i64) -> AppError {
    AppError::not_found("Blog not found", json!({ "id": id }))
}

fn require_text(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("Blog {field} must not be blank"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}

fn require_non_negative(likes: i64) -> Result<(), AppError> {
    if likes < 0 {
        return Err(AppError::bad_request(
            "Likes must not be negative",
            json!({ "field": "likes", "value": likes }),
        ));
    }
    Ok(())
}
