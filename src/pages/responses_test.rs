use super::{latest_submission, render_answer};
use crate::net::types::{QuestionType, ResponseAnswer, SurveyResponse};

fn answer(text: &str, question_type: QuestionType) -> ResponseAnswer {
    ResponseAnswer {
        question: "Q".to_owned(),
        answer: text.to_owned(),
        question_type,
    }
}

fn response(id: i64, submitted_at: &str) -> SurveyResponse {
    SurveyResponse {
        id,
        respondent_name: None,
        respondent_email: None,
        submitted_at: submitted_at.to_owned(),
        answers: Vec::new(),
    }
}

#[test]
fn rating_answers_render_as_stars() {
    assert_eq!(render_answer(&answer("3", QuestionType::Rating)), "★★★☆☆");
    assert_eq!(render_answer(&answer("5", QuestionType::Rating)), "★★★★★");
    assert_eq!(render_answer(&answer("1", QuestionType::Rating)), "★☆☆☆☆");
}

#[test]
fn out_of_range_rating_falls_back_to_text() {
    assert_eq!(render_answer(&answer("9", QuestionType::Rating)), "9");
    assert_eq!(render_answer(&answer("great", QuestionType::Rating)), "great");
}

#[test]
fn blank_answers_render_a_dash() {
    assert_eq!(render_answer(&answer("", QuestionType::Text)), "-");
    assert_eq!(render_answer(&answer("   ", QuestionType::Textarea)), "-");
}

#[test]
fn plain_answers_render_verbatim() {
    assert_eq!(
        render_answer(&answer("Dashboard,Reports", QuestionType::Checkbox)),
        "Dashboard,Reports"
    );
}

#[test]
fn latest_submission_picks_the_max_timestamp() {
    let list = [
        response(1, "2026-08-01T10:00:00Z"),
        response(2, "2026-08-15T09:30:00Z"),
        response(3, "2026-08-03T17:45:00Z"),
    ];
    assert_eq!(
        latest_submission(&list),
        Some("2026-08-15T09:30:00Z".to_owned())
    );
}

#[test]
fn latest_submission_is_none_for_empty_lists() {
    assert_eq!(latest_submission(&[]), None);
}
