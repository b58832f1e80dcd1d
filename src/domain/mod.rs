//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`aggregation`] - Pure summary statistics over blog snapshots
//!
//! # Statistics Flow
//!
//! 1. HTTP handler (or the admin CLI) asks [`crate::application::services::StatsService`]
//!    for a summary
//! 2. The service loads every post through [`repositories::BlogRepository::list_all`]
//! 3. [`aggregation::BlogStats::compute`] reduces the snapshot in memory

pub mod aggregation;
pub mod entities;
pub mod repositories;
