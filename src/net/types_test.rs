use super::*;

#[test]
fn question_type_round_trips_through_wire_values() {
    for t in QuestionType::ALL {
        assert_eq!(QuestionType::parse(t.as_str()), Some(t));
    }
    assert_eq!(QuestionType::parse("essay"), None);
}

#[test]
fn question_type_serde_uses_lowercase_tags() {
    let json = serde_json::to_string(&QuestionType::Mcq).expect("serialize");
    assert_eq!(json, "\"mcq\"");
    let t: QuestionType = serde_json::from_str("\"rating\"").expect("deserialize");
    assert_eq!(t, QuestionType::Rating);
}

#[test]
fn only_choice_types_carry_options() {
    assert!(QuestionType::Mcq.needs_options());
    assert!(QuestionType::Checkbox.needs_options());
    assert!(QuestionType::Dropdown.needs_options());
    assert!(!QuestionType::Text.needs_options());
    assert!(!QuestionType::Textarea.needs_options());
    assert!(!QuestionType::Rating.needs_options());
    assert!(!QuestionType::File.needs_options());
}

#[test]
fn question_without_id_deserializes() {
    let q: Question = serde_json::from_str(
        r#"{"question_text":"Name?","question_type":"text","is_required":true}"#,
    )
    .expect("question");
    assert_eq!(q.id, None);
    assert_eq!(q.order, 0);
    assert_eq!(q.options, None);
}

#[test]
fn question_payload_omits_options_when_none() {
    let payload = QuestionPayload {
        survey: 7,
        question_text: "Name?".to_owned(),
        question_type: QuestionType::Text,
        is_required: false,
        order: 1,
        options: None,
    };
    let json = serde_json::to_value(&payload).expect("serialize");
    assert!(json.get("options").is_none());
}

#[test]
fn question_payload_keeps_options_when_present() {
    let payload = QuestionPayload {
        survey: 7,
        question_text: "Pick one".to_owned(),
        question_type: QuestionType::Mcq,
        is_required: true,
        order: 2,
        options: Some(vec!["A".to_owned(), "B".to_owned()]),
    };
    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(json["options"], serde_json::json!(["A", "B"]));
}

#[test]
fn list_response_flattens_paginated_envelope() {
    let list: ListResponse<Survey> = serde_json::from_str(
        r#"{"results":[{"id":1,"title":"S","is_active":true}]}"#,
    )
    .expect("paginated list");
    let items = list.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
}

#[test]
fn list_response_accepts_bare_array() {
    let list: ListResponse<Survey> =
        serde_json::from_str(r#"[{"id":2,"title":"T","is_active":false}]"#).expect("bare list");
    let items = list.into_items();
    assert_eq!(items.len(), 1);
    assert!(!items[0].is_active);
}

#[test]
fn activity_item_maps_type_field_to_kind() {
    let item: ActivityItem = serde_json::from_str(
        r#"{"id":1,"type":"survey_created","description":"d","timestamp":"2h ago"}"#,
    )
    .expect("activity");
    assert_eq!(item.kind, "survey_created");
}

#[test]
fn token_resolution_unwraps_nested_survey() {
    let body: TokenResolution = serde_json::from_str(
        r#"{"survey":{"id":3,"title":"Feedback","questions":[]}}"#,
    )
    .expect("token resolution");
    assert_eq!(body.survey.id, 3);
    assert!(body.survey.questions.is_empty());
}
