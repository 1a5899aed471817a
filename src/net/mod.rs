//! Networking modules for the survey REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the shared wire schema, and
//! `fallback` holds the illustrative datasets screens degrade to when the
//! network is unreachable.

pub mod api;
pub mod fallback;
pub mod types;
