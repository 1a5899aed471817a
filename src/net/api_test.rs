use super::*;

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header("abc123"), "Token abc123");
}

#[test]
fn survey_endpoint_formats_expected_path() {
    assert_eq!(survey_endpoint(42), "/api/surveys/42/");
}

#[test]
fn questions_endpoint_filters_by_survey() {
    assert_eq!(questions_endpoint(7), "/api/survey-questions/?survey=7");
}

#[test]
fn question_endpoint_formats_expected_path() {
    assert_eq!(question_endpoint(9), "/api/survey-questions/9/");
}

#[test]
fn responses_endpoint_filters_by_survey() {
    assert_eq!(responses_endpoint(3), "/api/survey-responses/?survey=3");
}

#[test]
fn stats_endpoint_filters_by_survey() {
    assert_eq!(stats_endpoint(3), "/api/survey-question-stats/?survey=3");
}

#[test]
fn export_endpoint_appends_csv_format_only_when_asked() {
    assert_eq!(export_endpoint(5, true), "/api/export-responses/?survey=5&format=csv");
    assert_eq!(export_endpoint(5, false), "/api/export-responses/?survey=5");
}

#[test]
fn customer_token_endpoint_embeds_token() {
    assert_eq!(customer_token_endpoint("tok-1"), "/api/customer-tokens/tok-1/");
}

#[test]
fn status_failed_message_formats_status() {
    assert_eq!(status_failed_message("export", 503), "export failed: 503");
}

#[test]
fn token_lookup_maps_404_to_not_found() {
    assert_eq!(token_lookup_error_for_status(404), TokenLookupError::NotFound);
}

#[test]
fn token_lookup_keeps_other_statuses_as_bad_status() {
    assert_eq!(
        token_lookup_error_for_status(500),
        TokenLookupError::BadStatus(500)
    );
    assert_eq!(
        token_lookup_error_for_status(403),
        TokenLookupError::BadStatus(403)
    );
}

#[test]
fn token_lookup_separates_server_rejection_from_transport_failure() {
    // A bad status is a definitive answer; a transport error is not.
    assert_ne!(
        token_lookup_error_for_status(500),
        TokenLookupError::Transport("request failed".to_owned())
    );
    assert_ne!(token_lookup_error_for_status(500), TokenLookupError::NotFound);
}
