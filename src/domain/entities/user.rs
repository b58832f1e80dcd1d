//! User entity representing a registered blog owner.

use chrono::{DateTime, Utc};

/// A registered user. Users own blog posts and API tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, username: String, name: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            name,
            created_at,
        }
    }

    /// Name to show in output; falls back to the username.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: Option<String>,
}
