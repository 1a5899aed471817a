use super::*;

fn saved_question(id: i64, text: &str) -> Question {
    Question {
        id: Some(id),
        question_text: text.to_owned(),
        question_type: QuestionType::Text,
        is_required: false,
        order: 1,
        options: None,
    }
}

#[test]
fn new_draft_is_new_and_cannot_save_blank_text() {
    let draft = QuestionDraft::new(3);
    assert!(draft.is_new());
    assert_eq!(draft.order, 3);
    assert!(!draft.can_save());
}

#[test]
fn draft_from_existing_question_keeps_identity() {
    let q = Question {
        id: Some(9),
        question_text: "Pick one".to_owned(),
        question_type: QuestionType::Mcq,
        is_required: true,
        order: 2,
        options: Some(vec!["A".to_owned()]),
    };
    let draft = QuestionDraft::from_question(&q);
    assert!(!draft.is_new());
    assert!(draft.can_save());
    assert_eq!(draft.options, vec!["A".to_owned()]);
}

#[test]
fn payload_drops_blank_options_for_choice_types() {
    let mut draft = QuestionDraft::new(1);
    draft.question_text = "Pick".to_owned();
    draft.question_type = QuestionType::Checkbox;
    draft.options = vec!["A".to_owned(), "   ".to_owned(), String::new(), "B".to_owned()];

    let payload = draft.to_payload(7);
    assert_eq!(payload.survey, 7);
    assert_eq!(payload.options, Some(vec!["A".to_owned(), "B".to_owned()]));
}

#[test]
fn payload_omits_options_for_non_choice_types() {
    let mut draft = QuestionDraft::new(1);
    draft.question_text = "Say more".to_owned();
    draft.question_type = QuestionType::Textarea;
    draft.options = vec!["stale".to_owned()];

    assert_eq!(draft.to_payload(7).options, None);
}

#[test]
fn type_round_trip_through_non_choice_type_loses_options() {
    // mcq with options -> text -> back to mcq without re-entering options.
    let mut draft = QuestionDraft::new(1);
    draft.question_text = "Pick".to_owned();
    draft.question_type = QuestionType::Mcq;
    draft.options = vec!["A".to_owned(), "B".to_owned()];

    draft.question_type = QuestionType::Text;
    let saved_as_text = draft.to_payload(7);
    assert_eq!(saved_as_text.options, None);

    // The server now has no options; a re-fetched question reflects that.
    let refetched = Question {
        id: Some(1),
        question_text: "Pick".to_owned(),
        question_type: QuestionType::Mcq,
        is_required: false,
        order: 1,
        options: None,
    };
    let draft = QuestionDraft::from_question(&refetched);
    assert_eq!(draft.to_payload(7).options, Some(Vec::new()));
}

#[test]
fn option_edits_are_index_safe() {
    let mut draft = QuestionDraft::new(1);
    draft.add_option();
    draft.add_option();
    draft.set_option(1, "B".to_owned());
    draft.set_option(5, "ignored".to_owned());
    draft.remove_option(0);
    draft.remove_option(9);

    assert_eq!(draft.options, vec!["B".to_owned()]);
}

#[test]
fn apply_saved_replaces_matching_id() {
    let mut questions = vec![saved_question(1, "old"), saved_question(2, "keep")];
    apply_saved(&mut questions, saved_question(1, "new"));

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question_text, "new");
    assert_eq!(questions[1].question_text, "keep");
}

#[test]
fn apply_saved_appends_new_question() {
    let mut questions = vec![saved_question(1, "one")];
    apply_saved(&mut questions, saved_question(2, "two"));
    assert_eq!(questions.len(), 2);
}

#[test]
fn remove_question_drops_only_matching_id() {
    let mut questions = vec![saved_question(1, "one"), saved_question(2, "two")];
    remove_question(&mut questions, 1);
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, Some(2));
}
