//! DTOs for blog post endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Blog, BlogPatch};

/// Request body for `POST /api/blogs`.
///
/// `title` and `url` default to empty so that a missing field is reported as
/// a validation error (400) rather than a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    pub author: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,

    /// Defaults to 0 when omitted.
    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// Request body for `PUT /api/blogs/{id}`.
///
/// All fields are optional, only provided fields are changed. Unknown fields
/// (such as `id` or `user_id` echoed back from a GET) are ignored.
///
/// # `author` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the author
/// - **String** → set new author
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub author: Option<Option<String>>,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

impl From<UpdateBlogRequest> for BlogPatch {
    fn from(req: UpdateBlogRequest) -> Self {
        BlogPatch {
            title: req.title,
            author: req.author.map(normalize_author),
            url: req.url,
            likes: req.likes,
        }
    }
}

/// Treats a blank author as absent.
pub fn normalize_author(author: Option<String>) -> Option<String> {
    author.filter(|a| !a.trim().is_empty())
}

/// JSON representation of a stored blog post.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user_id: blog.user_id,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}
