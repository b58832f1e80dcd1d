#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use blog_catalog::api::handlers::health_handler;
use blog_catalog::api::middleware::auth;
use blog_catalog::api::routes::protected_routes;
use blog_catalog::domain::entities::{Blog, BlogPatch, NewBlog, NewUser, User};
use blog_catalog::domain::repositories::{
    ApiToken, BlogRepository, TokenRepository, UserRepository,
};
use blog_catalog::error::AppError;
use blog_catalog::infrastructure::persistence::PgUserRepository;
use blog_catalog::state::AppState;
use blog_catalog::utils::token::hash_token;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const SIGNING_SECRET: &str = "test-signing-secret";

/// Raw tokens for the two seeded users.
pub const ROOT_TOKEN: &str = "root-test-token";
pub const OTHER_TOKEN: &str = "other-test-token";

/// Blog storage kept in insertion order.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: Mutex<Vec<Blog>>,
    next_id: Mutex<i64>,
    fail: bool,
}

impl InMemoryBlogRepository {
    /// A repository whose every call fails like an unreachable database.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_all(&self) -> Result<Vec<Blog>, AppError> {
        self.check()?;
        Ok(self.blogs.lock().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        self.check()?;
        Ok(self.blogs.lock().await.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        self.check()?;
        let mut next_id = self.next_id.lock().await;
        *next_id += 1;

        let now = Utc::now();
        let blog = Blog::new(
            *next_id,
            new_blog.title,
            new_blog.author,
            new_blog.url,
            new_blog.likes,
            new_blog.user_id,
            now,
            now,
        );
        self.blogs.lock().await.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Option<Blog>, AppError> {
        self.check()?;
        let mut blogs = self.blogs.lock().await;
        let Some(blog) = blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            blog.title = title;
        }
        if let Some(author) = patch.author {
            blog.author = author;
        }
        if let Some(url) = patch.url {
            blog.url = url;
        }
        if let Some(likes) = patch.likes {
            blog.likes = likes;
        }
        blog.updated_at = Utc::now();

        Ok(Some(blog.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut blogs = self.blogs.lock().await;
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        Ok(blogs.len() != before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.blogs.lock().await.len() as i64)
    }
}

/// Token storage resolving hashes to a fixed set of users.
#[derive(Default)]
pub struct InMemoryTokenRepository {
    users: Vec<User>,
    tokens: Mutex<Vec<ApiToken>>,
}

impl InMemoryTokenRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            tokens: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn find_user_by_token(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        let tokens = self.tokens.lock().await;
        let user = tokens
            .iter()
            .find(|t| t.token_hash == token_hash && t.revoked_at.is_none())
            .and_then(|t| self.users.iter().find(|u| u.id == t.user_id))
            .cloned();
        Ok(user)
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        let mut tokens = self.tokens.lock().await;
        if let Some(token) = tokens.iter_mut().find(|t| t.token_hash == token_hash) {
            token.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        let mut tokens = self.tokens.lock().await;
        let token = ApiToken {
            id: tokens.len() as i64 + 1,
            user_id,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(self.tokens.lock().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(self
            .tokens
            .lock()
            .await
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<bool, AppError> {
        let mut tokens = self.tokens.lock().await;
        match tokens
            .iter_mut()
            .find(|t| t.id == id && t.revoked_at.is_none())
        {
            Some(token) => {
                token.revoked_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub fn root_user() -> User {
    User::new(1, "root".to_string(), Some("Superuser".to_string()), Utc::now())
}

pub fn other_user() -> User {
    User::new(2, "mluukkai".to_string(), None, Utc::now())
}

/// State over empty in-memory storage with two users holding one token each.
pub async fn create_test_state(blog_repo: Arc<InMemoryBlogRepository>) -> AppState {
    let token_repo = Arc::new(InMemoryTokenRepository::new(vec![root_user(), other_user()]));

    token_repo
        .create_token(1, "root", &hash_token(SIGNING_SECRET, ROOT_TOKEN))
        .await
        .unwrap();
    token_repo
        .create_token(2, "other", &hash_token(SIGNING_SECRET, OTHER_TOKEN))
        .await
        .unwrap();

    AppState::new(blog_repo, token_repo, SIGNING_SECRET.to_string())
}

/// The application router without the per-IP rate limiter, which needs a
/// peer address the test transport does not provide.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest(
            "/api",
            protected_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .with_state(state)
}

/// Test server over fresh in-memory storage.
pub async fn test_server() -> (TestServer, Arc<InMemoryBlogRepository>) {
    let blog_repo = Arc::new(InMemoryBlogRepository::default());
    let state = create_test_state(blog_repo.clone()).await;
    let server = TestServer::new(test_router(state)).unwrap();
    (server, blog_repo)
}

/// Stores a post directly, bypassing the API.
pub async fn seed_blog(
    repo: &InMemoryBlogRepository,
    title: &str,
    author: Option<&str>,
    likes: i64,
    user_id: i64,
) -> Blog {
    repo.create(NewBlog {
        title: title.to_string(),
        author: author.map(str::to_string),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        likes,
        user_id,
    })
    .await
    .unwrap()
}

/// The six-post fixture used across the statistics tests.
pub async fn seed_catalog(repo: &InMemoryBlogRepository) {
    for (title, author, likes) in [
        ("React patterns", "Michael Chan", 7),
        ("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
        ("Canonical string reduction", "Edsger W. Dijkstra", 12),
        ("First class tests", "Robert C. Martin", 10),
        ("TDD harms architecture", "Robert C. Martin", 0),
        ("Type wars", "Robert C. Martin", 2),
    ] {
        seed_blog(repo, title, Some(author), likes, 1).await;
    }
}

/// Inserts a user row for PostgreSQL-backed tests.
pub async fn create_db_user(pool: &PgPool, username: &str) -> User {
    PgUserRepository::new(Arc::new(pool.clone()))
        .create(NewUser {
            username: username.to_string(),
            name: None,
        })
        .await
        .unwrap()
}
