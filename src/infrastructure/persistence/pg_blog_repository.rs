//! PostgreSQL implementation of blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(r: BlogRow) -> Self {
        Blog::new(
            r.id,
            r.title,
            r.author,
            r.url,
            r.likes,
            r.user_id,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for blog posts.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn list_all(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at, updated_at
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blogs (title, author, url, likes, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, url, likes, user_id, created_at, updated_at
            "#,
        )
        .bind(new_blog.title)
        .bind(new_blog.author)
        .bind(new_blog.url)
        .bind(new_blog.likes)
        .bind(new_blog.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Option<Blog>, AppError> {
        let (set_author, author) = match patch.author {
            Some(author) => (true, author),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs
            SET title      = COALESCE($2, title),
                author     = CASE WHEN $3 THEN $4 ELSE author END,
                url        = COALESCE($5, url),
                likes      = COALESCE($6, likes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, author, url, likes, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(set_author)
        .bind(author)
        .bind(patch.url)
        .bind(patch.likes)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
