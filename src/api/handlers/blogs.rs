//! Handlers for blog post endpoints (list, read, create, update, delete).

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::blog::{BlogResponse, CreateBlogRequest, UpdateBlogRequest, normalize_author};
use crate::domain::entities::{NewBlog, User};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every blog post in insertion order.
///
/// # Endpoint
///
/// `GET /api/blogs`
pub async fn list_blogs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = state.blog_service.list_blogs().await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Returns one blog post.
///
/// # Endpoint
///
/// `GET /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no post has this id.
pub async fn get_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = state.blog_service.get_blog(id).await?;
    Ok(Json(blog.into()))
}

/// Adds a blog post owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/blogs`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "First class tests",
///   "author": "Robert C. Martin",   // optional
///   "url": "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
///   "likes": 10                     // optional, defaults to 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `title` or `url` is missing or empty, or
/// `likes` is negative.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    payload.validate()?;

    let new_blog = NewBlog {
        title: payload.title,
        author: normalize_author(payload.author),
        url: payload.url,
        likes: payload.likes.unwrap_or(0),
        user_id: user.id,
    };

    let blog = state.blog_service.create_blog(new_blog).await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Updates a blog post, typically its like count.
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}`
///
/// # Request Body
///
/// Any subset of `title`, `author`, `url`, `likes`. A full blog object as
/// returned by `GET` is accepted; `id` and `user_id` in the body are ignored.
///
/// # Errors
///
/// Returns 404 Not Found if no post has this id.
/// Returns 400 Bad Request if validation fails.
pub async fn update_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    payload.validate()?;

    let blog = state.blog_service.update_blog(id, payload.into()).await?;

    Ok(Json(blog.into()))
}

/// Deletes a blog post created by the authenticated user.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no post has this id.
/// Returns 403 Forbidden if the post belongs to another user.
pub async fn delete_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<StatusCode, AppError> {
    state.blog_service.delete_blog(id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
