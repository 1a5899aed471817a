//! Route-level page components.

pub mod analytics;
pub mod dashboard;
pub mod login;
pub mod participate;
pub mod profile;
pub mod responses;
pub mod survey_create;
pub mod survey_edit;
pub mod surveys;
