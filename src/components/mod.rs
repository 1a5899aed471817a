//! Reusable UI components shared across pages.

pub mod layout;
pub mod question_builder;
pub mod question_input;
pub mod stat_chart;
pub mod survey_card;
pub mod toast;
