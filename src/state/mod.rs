//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `participation`, `question_editor`,
//! etc.) so individual pages can depend on small focused models. Anything
//! with decision logic lives here as plain data + pure functions, keeping
//! the Leptos components thin and the logic unit-testable.

pub mod analytics;
pub mod participation;
pub mod question_editor;
pub mod session;
pub mod toast;
