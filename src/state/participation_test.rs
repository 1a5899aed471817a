use super::*;
use crate::net::types::QuestionType;

fn question(id: i64, text: &str, qtype: QuestionType, required: bool) -> Question {
    Question {
        id: Some(id),
        question_text: text.to_owned(),
        question_type: qtype,
        is_required: required,
        order: id,
        options: None,
    }
}

// =============================================================
// Checkbox serialization
// =============================================================

#[test]
fn checkbox_toggle_adds_then_removes_option() {
    let mut draft = AnswerDraft::default();
    draft.toggle_checkbox(1, "Reports");
    assert_eq!(draft.value(1), "Reports");
    assert!(draft.checkbox_selected(1, "Reports"));

    draft.toggle_checkbox(1, "Reports");
    assert_eq!(draft.value(1), "");
    assert!(!draft.checkbox_selected(1, "Reports"));
}

#[test]
fn checkbox_toggle_round_trip_restores_prior_value() {
    let mut draft = AnswerDraft::default();
    draft.toggle_checkbox(1, "Dashboard");
    draft.toggle_checkbox(1, "Settings");
    let before = draft.value(1).to_owned();

    draft.toggle_checkbox(1, "Reports");
    draft.toggle_checkbox(1, "Reports");
    assert_eq!(draft.value(1), before);
}

#[test]
fn checkbox_preserves_selection_order() {
    assert_eq!(toggle_checkbox_value("", "B"), "B");
    assert_eq!(toggle_checkbox_value("B", "A"), "B,A");
    assert_eq!(toggle_checkbox_value("B,A", "B"), "A");
}

// =============================================================
// Rating selection
// =============================================================

#[test]
fn rating_reselection_is_idempotent_not_a_toggle() {
    let mut draft = AnswerDraft::default();
    draft.select_rating(1, 4);
    assert_eq!(draft.value(1), "4");
    draft.select_rating(1, 4);
    assert_eq!(draft.value(1), "4");
}

// =============================================================
// Required-question validation
// =============================================================

#[test]
fn validation_reports_first_unmet_required_in_survey_order() {
    let questions = vec![
        question(1, "Optional one", QuestionType::Text, false),
        question(2, "Required A", QuestionType::Text, true),
        question(3, "Required B", QuestionType::Rating, true),
    ];
    let draft = AnswerDraft::default();

    let offender = first_unanswered_required(&questions, &draft).expect("offender");
    assert_eq!(offender.id, Some(2));
    assert_eq!(validation_message(offender), "Please answer: Required A");
}

#[test]
fn validation_skips_answered_required_and_moves_to_next() {
    let questions = vec![
        question(2, "Required A", QuestionType::Text, true),
        question(3, "Required B", QuestionType::Rating, true),
    ];
    let mut draft = AnswerDraft::default();
    draft.set(2, "fine".to_owned());

    let offender = first_unanswered_required(&questions, &draft).expect("offender");
    assert_eq!(offender.id, Some(3));
}

#[test]
fn whitespace_only_answer_fails_required_validation() {
    let questions = vec![question(1, "Required", QuestionType::Text, true)];
    let mut draft = AnswerDraft::default();
    draft.set(1, "   ".to_owned());

    assert!(first_unanswered_required(&questions, &draft).is_some());
}

#[test]
fn optional_questions_are_never_validated() {
    let questions = vec![
        question(1, "Optional", QuestionType::Textarea, false),
        question(2, "Optional file", QuestionType::File, false),
    ];
    let draft = AnswerDraft::default();

    assert!(first_unanswered_required(&questions, &draft).is_none());
}

// =============================================================
// Submission payload
// =============================================================

#[test]
fn build_answers_covers_all_questions_with_empty_strings() {
    let questions = vec![
        question(1, "Required text", QuestionType::Text, true),
        question(2, "Optional file", QuestionType::File, false),
    ];
    let mut draft = AnswerDraft::default();
    draft.set(1, "hello".to_owned());

    let answers = build_answers(&questions, &draft);
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].question, 1);
    assert_eq!(answers[0].answer, "hello");
    assert_eq!(answers[1].question, 2);
    assert_eq!(answers[1].answer, "");
}

#[test]
fn submission_gate_blocks_until_required_filled_then_passes() {
    let questions = vec![
        question(1, "Required text", QuestionType::Text, true),
        question(2, "Optional file", QuestionType::File, false),
    ];
    let mut draft = AnswerDraft::default();

    // Empty required answer blocks submission before any payload is built.
    assert!(first_unanswered_required(&questions, &draft).is_some());

    draft.set(1, "done".to_owned());
    assert!(first_unanswered_required(&questions, &draft).is_none());
    assert_eq!(build_answers(&questions, &draft).len(), 2);
}

#[test]
fn participation_phase_defaults_to_loading() {
    assert_eq!(ParticipationPhase::default(), ParticipationPhase::Loading);
}
