//! Browser-glue helpers shared across pages.

pub mod auth_token;
pub mod download;
pub mod session_guard;
