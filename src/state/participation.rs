//! Answer-draft model for the public participation form.
//!
//! DESIGN
//! ======
//! Each question maps to exactly one string value. Multi-select checkbox
//! answers are comma-joined into that single string; an option label that
//! itself contains a comma is not representable and round-trips lossily.
//! File selections live outside the draft, keyed separately, because they
//! ship through a different endpoint.

#[cfg(test)]
#[path = "participation_test.rs"]
mod participation_test;

use std::collections::HashMap;

use crate::net::types::{AnswerPayload, Question};

/// Lifecycle of one participation page load.
///
/// `Error` and `Submitted` are terminal for the page load; recovering from
/// either means re-navigating to the tokenized link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParticipationPhase {
    #[default]
    Loading,
    Error,
    Ready,
    Submitting,
    Submitted,
}

/// Files attached to file-type questions, keyed by question id.
///
/// Selections live outside [`AnswerDraft`] because they ship as one
/// multipart upload per question, independent of the answer submission.
/// The backing map only exists in the browser build.
#[derive(Clone, Debug, Default)]
pub struct FileSelections {
    #[cfg(feature = "hydrate")]
    files: HashMap<i64, web_sys::File>,
}

impl FileSelections {
    /// Attach or clear (with `None`) the file for a question.
    #[cfg(feature = "hydrate")]
    pub fn set(&mut self, question_id: i64, file: Option<web_sys::File>) {
        match file {
            Some(file) => {
                self.files.insert(question_id, file);
            }
            None => {
                self.files.remove(&question_id);
            }
        }
    }

    /// Attached files in arbitrary order.
    #[cfg(feature = "hydrate")]
    pub fn iter(&self) -> impl Iterator<Item = (i64, &web_sys::File)> {
        self.files.iter().map(|(id, file)| (*id, file))
    }
}

/// In-progress answers for one survey instance, keyed by question id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerDraft {
    values: HashMap<i64, String>,
}

impl AnswerDraft {
    /// Current value for a question, empty string if untouched.
    pub fn value(&self, question_id: i64) -> &str {
        self.values.get(&question_id).map_or("", String::as_str)
    }

    /// Overwrite a question's value (text, textarea, mcq, dropdown).
    pub fn set(&mut self, question_id: i64, value: String) {
        self.values.insert(question_id, value);
    }

    /// Select a rating 1-5. Selecting the same value again is idempotent,
    /// not a toggle.
    pub fn select_rating(&mut self, question_id: i64, rating: u8) {
        self.set(question_id, rating.to_string());
    }

    /// Flip one checkbox option in the comma-joined value.
    pub fn toggle_checkbox(&mut self, question_id: i64, option: &str) {
        let next = toggle_checkbox_value(self.value(question_id), option);
        self.set(question_id, next);
    }

    /// Whether a checkbox option is currently selected.
    pub fn checkbox_selected(&self, question_id: i64, option: &str) -> bool {
        split_checkbox_value(self.value(question_id)).any(|v| v == option)
    }
}

fn split_checkbox_value(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').filter(|v| !v.is_empty())
}

/// Add `option` to the comma-joined selection if absent, remove it if
/// present. Order of first selection is preserved.
pub fn toggle_checkbox_value(current: &str, option: &str) -> String {
    let mut parts: Vec<&str> = split_checkbox_value(current).collect();
    if parts.iter().any(|p| *p == option) {
        parts.retain(|p| *p != option);
    } else {
        parts.push(option);
    }
    parts.join(",")
}

/// First required question, in survey order, whose draft value is missing
/// or blank after trimming. Only the first offender is reported; optional
/// questions are never validated.
pub fn first_unanswered_required<'a>(
    questions: &'a [Question],
    draft: &AnswerDraft,
) -> Option<&'a Question> {
    questions.iter().find(|q| {
        q.is_required
            && q.id
                .is_none_or(|id| draft.value(id).trim().is_empty())
    })
}

/// Validation message naming the unmet question.
pub fn validation_message(question: &Question) -> String {
    format!("Please answer: {}", question.question_text)
}

/// Full ordered answer list for submission, one entry per question,
/// empty strings for unanswered optional questions.
pub fn build_answers(questions: &[Question], draft: &AnswerDraft) -> Vec<AnswerPayload> {
    questions
        .iter()
        .filter_map(|q| {
            let id = q.id?;
            Some(AnswerPayload {
                question: id,
                answer: draft.value(id).to_owned(),
            })
        })
        .collect()
}
