//! Utility functions shared by the server and the admin CLI.
//!
//! - [`token`] - API token generation and hashing

pub mod token;
