//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::blog_service::BlogService`] - Blog post CRUD with ownership checks
//! - [`services::stats_service::StatsService`] - Like and authorship statistics
//! - [`services::auth_service::AuthService`] - API token authentication and issuance
//! - [`services::user_service::UserService`] - User registration

pub mod services;
