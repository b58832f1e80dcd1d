//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_blog_handler, delete_blog_handler, get_blog_handler, list_blogs_handler,
    stats_handler, update_blog_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /blogs`        - List all blog posts
/// - `POST   /blogs`        - Add a blog post
/// - `GET    /blogs/{id}`   - Fetch one blog post
/// - `PUT    /blogs/{id}`   - Update a blog post (e.g. its likes)
/// - `DELETE /blogs/{id}`   - Delete a blog post (creator only)
/// - `GET    /stats`        - Total likes, favorite blog, leading authors
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs_handler).post(create_blog_handler))
        .route(
            "/blogs/{id}",
            get(get_blog_handler)
                .put(update_blog_handler)
                .delete(delete_blog_handler),
        )
        .route("/stats", get(stats_handler))
}
