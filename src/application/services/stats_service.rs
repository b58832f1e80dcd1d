//! Like and authorship statistics service.

use std::sync::Arc;

use crate::domain::aggregation::BlogStats;
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Service computing catalog-wide statistics.
///
/// Loads the full ordered snapshot from the repository and reduces it with
/// [`crate::domain::aggregation`]. Nothing is cached: every call reflects the
/// current catalog.
pub struct StatsService<R: BlogRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BlogRepository + ?Sized> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns total likes, the favorite blog, and the leading authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self) -> Result<BlogStats, AppError> {
        let blogs = self.repository.list_all().await?;
        let stats = BlogStats::compute(&blogs);

        tracing::debug!(
            blogs = blogs.len(),
            total_likes = stats.total_likes,
            "Computed blog statistics"
        );

        Ok(stats)
    }
}
