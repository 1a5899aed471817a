//! Draft model for the question builder's inline editor.

#[cfg(test)]
#[path = "question_editor_test.rs"]
mod question_editor_test;

use crate::net::types::{Question, QuestionPayload, QuestionType};

/// Mutable copy of a question being created or edited.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionDraft {
    pub id: Option<i64>,
    pub question_text: String,
    pub question_type: QuestionType,
    pub is_required: bool,
    pub order: i64,
    pub options: Vec<String>,
}

impl QuestionDraft {
    /// Fresh draft appended at `order`, defaulting to a text question.
    pub fn new(order: i64) -> Self {
        Self {
            id: None,
            question_text: String::new(),
            question_type: QuestionType::Text,
            is_required: false,
            order,
            options: Vec::new(),
        }
    }

    /// Editable copy of an existing question.
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            question_type: question.question_type,
            is_required: question.is_required,
            order: question.order,
            options: question.options.clone().unwrap_or_default(),
        }
    }

    /// Create-vs-update is decided purely by identifier presence.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Save is enabled once the question text is non-blank.
    pub fn can_save(&self) -> bool {
        !self.question_text.trim().is_empty()
    }

    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    pub fn set_option(&mut self, index: usize, value: String) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = value;
        }
    }

    pub fn remove_option(&mut self, index: usize) {
        if index < self.options.len() {
            self.options.remove(index);
        }
    }

    /// Build the save payload.
    ///
    /// For choice-bearing types, blank-after-trim options are dropped. For
    /// every other type the options field is omitted entirely, so switching
    /// a question away from a choice type discards its options server-side.
    pub fn to_payload(&self, survey_id: i64) -> QuestionPayload {
        let options = if self.question_type.needs_options() {
            Some(
                self.options
                    .iter()
                    .filter(|opt| !opt.trim().is_empty())
                    .cloned()
                    .collect(),
            )
        } else {
            None
        };
        QuestionPayload {
            survey: survey_id,
            question_text: self.question_text.clone(),
            question_type: self.question_type,
            is_required: self.is_required,
            order: self.order,
            options,
        }
    }
}

/// Merge a saved question back into the list: replace by id, else append.
pub fn apply_saved(questions: &mut Vec<Question>, saved: Question) {
    if let Some(existing) = questions
        .iter_mut()
        .find(|q| q.id.is_some() && q.id == saved.id)
    {
        *existing = saved;
    } else {
        questions.push(saved);
    }
}

/// Drop a deleted question from the list by id.
pub fn remove_question(questions: &mut Vec<Question>, id: i64) {
    questions.retain(|q| q.id != Some(id));
}
