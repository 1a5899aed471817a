use super::*;

#[test]
fn export_filename_embeds_survey_and_suffix() {
    assert_eq!(export_filename(3, "responses"), "survey-3-responses.csv");
    assert_eq!(export_filename(12, "analytics"), "survey-12-analytics.csv");
}
