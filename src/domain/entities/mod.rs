//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Aggregation over them lives in
//! [`crate::domain::aggregation`].
//!
//! # Entity Types
//!
//! - [`Blog`] - A catalogued blog post
//! - [`User`] - A registered user who owns blog posts
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewBlog`, `NewUser` - For creating new records
//! - `BlogPatch` - For partial updates

pub mod blog;
pub mod user;

pub use blog::{Blog, BlogPatch, NewBlog};
pub use user::{NewUser, User};
