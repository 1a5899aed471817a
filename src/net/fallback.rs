//! Illustrative datasets used when the network is unreachable.
//!
//! List/detail screens catch fetch failures, log them, and render these
//! fixtures instead of an error wall so the UI stays navigable during
//! development and backend outages. Form submissions never fall back.

use super::types::{
    ActivityItem, AnswerCount, DashboardSummary, ParticipationSurvey, Question, QuestionStats,
    QuestionType, ResponseAnswer, Survey, SurveyResponse, SurveyStats,
};

/// Survey list fixture.
pub fn surveys() -> Vec<Survey> {
    vec![
        Survey {
            id: 1,
            title: "Customer Satisfaction Survey".to_owned(),
            description: "We'd love to hear your feedback about our services".to_owned(),
            is_active: true,
            created_at: None,
            response_count: Some(28),
        },
        Survey {
            id: 2,
            title: "Employee Feedback Form".to_owned(),
            description: String::new(),
            is_active: false,
            created_at: None,
            response_count: Some(0),
        },
        Survey {
            id: 3,
            title: "Product Evaluation Survey".to_owned(),
            description: String::new(),
            is_active: false,
            created_at: None,
            response_count: Some(12),
        },
    ]
}

/// Dashboard summary fixture.
pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        total_surveys: 12,
        total_responses: 1543,
        active_surveys: 8,
        recent_activity: vec![
            ActivityItem {
                id: 1,
                kind: "survey_created".to_owned(),
                description: "New survey \"Customer Satisfaction\" created".to_owned(),
                timestamp: "2 hours ago".to_owned(),
            },
            ActivityItem {
                id: 2,
                kind: "response_received".to_owned(),
                description: "15 new responses for \"Product Feedback\"".to_owned(),
                timestamp: "4 hours ago".to_owned(),
            },
        ],
    }
}

/// Participation survey fixture.
pub fn participation_survey() -> ParticipationSurvey {
    ParticipationSurvey {
        id: 1,
        title: "Customer Satisfaction Survey".to_owned(),
        description: "We'd love to hear your feedback about our services".to_owned(),
        questions: vec![
            Question {
                id: Some(1),
                question_text: "How satisfied are you with our service?".to_owned(),
                question_type: QuestionType::Rating,
                is_required: true,
                order: 1,
                options: None,
            },
            Question {
                id: Some(2),
                question_text: "Which features do you use most?".to_owned(),
                question_type: QuestionType::Mcq,
                is_required: true,
                order: 2,
                options: Some(vec![
                    "Dashboard".to_owned(),
                    "Reports".to_owned(),
                    "Settings".to_owned(),
                    "Analytics".to_owned(),
                ]),
            },
            Question {
                id: Some(3),
                question_text: "What could we improve?".to_owned(),
                question_type: QuestionType::Textarea,
                is_required: false,
                order: 3,
                options: None,
            },
            Question {
                id: Some(4),
                question_text: "Upload any relevant documents".to_owned(),
                question_type: QuestionType::File,
                is_required: false,
                order: 4,
                options: None,
            },
        ],
    }
}

/// Question list fixture for the builder.
pub fn questions() -> Vec<Question> {
    vec![
        Question {
            id: Some(1),
            question_text: "How satisfied are you with our service?".to_owned(),
            question_type: QuestionType::Rating,
            is_required: true,
            order: 1,
            options: None,
        },
        Question {
            id: Some(2),
            question_text: "What could we improve?".to_owned(),
            question_type: QuestionType::Textarea,
            is_required: false,
            order: 2,
            options: None,
        },
    ]
}

/// Response list fixture.
pub fn responses() -> Vec<SurveyResponse> {
    vec![
        SurveyResponse {
            id: 1,
            respondent_name: None,
            respondent_email: Some("john@example.com".to_owned()),
            submitted_at: "2024-01-15T14:30:00Z".to_owned(),
            answers: vec![
                ResponseAnswer {
                    question: "How satisfied are you with our service?".to_owned(),
                    answer: "5".to_owned(),
                    question_type: QuestionType::Rating,
                },
                ResponseAnswer {
                    question: "What could we improve?".to_owned(),
                    answer: "Better response time".to_owned(),
                    question_type: QuestionType::Textarea,
                },
            ],
        },
        SurveyResponse {
            id: 2,
            respondent_name: None,
            respondent_email: Some("jane@example.com".to_owned()),
            submitted_at: "2024-01-14T10:15:00Z".to_owned(),
            answers: vec![
                ResponseAnswer {
                    question: "How satisfied are you with our service?".to_owned(),
                    answer: "4".to_owned(),
                    question_type: QuestionType::Rating,
                },
                ResponseAnswer {
                    question: "What could we improve?".to_owned(),
                    answer: "More features".to_owned(),
                    question_type: QuestionType::Textarea,
                },
            ],
        },
    ]
}

/// Analytics fixture.
pub fn survey_stats() -> SurveyStats {
    SurveyStats {
        total_responses: 28,
        questions: vec![
            QuestionStats {
                question: "How satisfied are you with our service?".to_owned(),
                question_type: QuestionType::Rating,
                stats: vec![
                    AnswerCount { answer: "1".to_owned(), count: 2 },
                    AnswerCount { answer: "2".to_owned(), count: 1 },
                    AnswerCount { answer: "3".to_owned(), count: 5 },
                    AnswerCount { answer: "4".to_owned(), count: 12 },
                    AnswerCount { answer: "5".to_owned(), count: 8 },
                ],
            },
            QuestionStats {
                question: "Which features do you use most?".to_owned(),
                question_type: QuestionType::Mcq,
                stats: vec![
                    AnswerCount { answer: "Dashboard".to_owned(), count: 15 },
                    AnswerCount { answer: "Reports".to_owned(), count: 12 },
                    AnswerCount { answer: "Settings".to_owned(), count: 8 },
                    AnswerCount { answer: "Analytics".to_owned(), count: 10 },
                ],
            },
        ],
    }
}
