//! DTOs for the statistics endpoint.

use serde::Serialize;

use crate::domain::aggregation::{AuthorBlogs, AuthorLikes, BlogStats, FavoriteBlog};

/// Response for `GET /api/stats`.
///
/// The record fields are `null` when the catalog is empty.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_likes: i64,
    pub favorite_blog: Option<FavoriteBlogResponse>,
    pub most_blogs: Option<AuthorBlogsResponse>,
    pub most_likes: Option<AuthorLikesResponse>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteBlogResponse {
    pub title: String,
    pub author: Option<String>,
    pub likes: i64,
}

#[derive(Debug, Serialize)]
pub struct AuthorBlogsResponse {
    pub author: Option<String>,
    pub blogs: usize,
}

#[derive(Debug, Serialize)]
pub struct AuthorLikesResponse {
    pub author: Option<String>,
    pub likes: i64,
}

impl From<FavoriteBlog> for FavoriteBlogResponse {
    fn from(f: FavoriteBlog) -> Self {
        Self {
            title: f.title,
            author: f.author,
            likes: f.likes,
        }
    }
}

impl From<AuthorBlogs> for AuthorBlogsResponse {
    fn from(a: AuthorBlogs) -> Self {
        Self {
            author: a.author,
            blogs: a.blogs,
        }
    }
}

impl From<AuthorLikes> for AuthorLikesResponse {
    fn from(a: AuthorLikes) -> Self {
        Self {
            author: a.author,
            likes: a.likes,
        }
    }
}

impl From<BlogStats> for StatsResponse {
    fn from(stats: BlogStats) -> Self {
        Self {
            total_likes: stats.total_likes,
            favorite_blog: stats.favorite_blog.map(Into::into),
            most_blogs: stats.most_blogs.map(Into::into),
            most_likes: stats.most_likes.map(Into::into),
        }
    }
}
