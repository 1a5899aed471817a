//! Shared wire DTOs for the survey API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. List endpoints are DRF-style and may return either a paginated
//! `{"results": [...]}` envelope or a bare array; `ListResponse` normalizes
//! both shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Question type tag; fixed set, no extensibility point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Textarea,
    Mcq,
    Checkbox,
    Dropdown,
    Rating,
    File,
}

impl QuestionType {
    /// Whether this type carries an editable option list.
    pub fn needs_options(self) -> bool {
        matches!(self, Self::Mcq | Self::Checkbox | Self::Dropdown)
    }

    /// Human-readable label used by the question builder type picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Long Text",
            Self::Mcq => "Multiple Choice",
            Self::Checkbox => "Checkboxes",
            Self::Dropdown => "Dropdown",
            Self::Rating => "Rating Scale",
            Self::File => "File Upload",
        }
    }

    /// Wire value, also used for `<select>` option values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Mcq => "mcq",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::Rating => "rating",
            Self::File => "file",
        }
    }

    /// Parse a wire value back into a type tag.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// All types in question-builder picker order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Textarea,
        Self::Mcq,
        Self::Checkbox,
        Self::Dropdown,
        Self::Rating,
        Self::File,
    ];
}

/// A survey as listed and edited by administrators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
    /// ISO-8601 creation timestamp, absent on some list payloads.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-computed response tally, present on list payloads only.
    #[serde(default)]
    pub response_count: Option<i64>,
}

/// A survey question. `id` is absent until first save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: Option<i64>,
    pub question_text: String,
    pub question_type: QuestionType,
    pub is_required: bool,
    #[serde(default)]
    pub order: i64,
    /// Present only for choice-bearing types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// One submitted response with its ordered answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: i64,
    #[serde(default)]
    pub respondent_name: Option<String>,
    #[serde(default)]
    pub respondent_email: Option<String>,
    pub submitted_at: String,
    #[serde(default)]
    pub answers: Vec<ResponseAnswer>,
}

/// A single (question, answer) pair inside a submitted response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseAnswer {
    pub question: String,
    pub answer: String,
    pub question_type: QuestionType,
}

/// Dashboard aggregate counts and the recent-activity feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_surveys: i64,
    #[serde(default)]
    pub total_responses: i64,
    #[serde(default)]
    pub active_surveys: i64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

/// One entry in the dashboard recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: String,
}

/// Per-survey aggregated analytics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyStats {
    #[serde(default)]
    pub questions: Vec<QuestionStats>,
    #[serde(default)]
    pub total_responses: i64,
}

/// Aggregated per-answer tallies for one question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub question: String,
    pub question_type: QuestionType,
    pub stats: Vec<AnswerCount>,
}

/// One (answer, count) bucket inside a question's tally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerCount {
    pub answer: String,
    pub count: i64,
}

/// Survey definition resolved from a participation token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipationSurvey {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

/// Envelope returned by the customer-token resolution endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResolution {
    pub survey: ParticipationSurvey,
}

/// The authenticated administrator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// Body for `POST /api/auth/login/`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Token + user issued by a successful login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginSession {
    pub token: String,
    pub user: User,
}

/// Body for survey create/update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyPayload {
    pub title: String,
    pub description: String,
    pub is_active: bool,
}

/// Body for question create/update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub survey: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub is_required: bool,
    pub order: i64,
    /// Omitted entirely (not merely emptied) for non-choice types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Body for the unauthenticated response submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub customer_token: String,
    pub answers: Vec<AnswerPayload>,
}

/// One answer inside a response submission, in survey question order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub question: i64,
    pub answer: String,
}

/// Body for `PUT /api/profile/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// DRF list responses arrive paginated or bare depending on server config.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Flatten either shape into the item list.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results } => results,
            Self::Plain(items) => items,
        }
    }
}
