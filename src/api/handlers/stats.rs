//! Handler for catalog statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns like and authorship statistics over the whole catalog.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_likes": 36,
///   "favorite_blog": { "title": "Canonical string reduction", "author": "Edsger W. Dijkstra", "likes": 12 },
///   "most_blogs": { "author": "Robert C. Martin", "blogs": 3 },
///   "most_likes": { "author": "Edsger W. Dijkstra", "likes": 17 }
/// }
/// ```
///
/// On an empty catalog `total_likes` is `0` and the other fields are `null`.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.summary().await?;
    Ok(Json(stats.into()))
}
