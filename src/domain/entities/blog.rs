//! Blog entity representing one catalogued blog post.

use chrono::{DateTime, Utc};

use crate::domain::aggregation::BlogRecord;

/// A stored blog post.
///
/// `author` is optional; posts without an author are still counted by the
/// aggregator under a dedicated "no author" group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new Blog instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        author: Option<String>,
        url: String,
        likes: i64,
        user_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            user_id,
            created_at,
            updated_at,
        }
    }

    /// Returns true if `user_id` owns this post.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

impl BlogRecord for Blog {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    fn likes(&self) -> i64 {
        self.likes
    }
}

/// Input data for creating a new blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
}

/// Partial update for an existing blog post.
///
/// `None` fields are left unchanged.
/// `author: Some(None)` clears the author; `Some(Some(a))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<Option<String>>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl BlogPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none() && self.likes.is_none()
    }
}
