use std::collections::HashMap;

use crate::model::QuestionId;

/// Mutable overlay of user answers on top of the immutable catalog.
///
/// Missing entries read as the empty string ("unanswered").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: HashMap<QuestionId, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the answer for `id`. Last write wins; an empty value clears it.
    pub fn set(&mut self, id: QuestionId, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.answers.remove(&id);
        } else {
            self.answers.insert(id, value);
        }
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> &str {
        self.answers.get(&id).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_reads_empty() {
        let sheet = AnswerSheet::new();
        assert_eq!(sheet.get(QuestionId::new(3)), "");
        assert!(!sheet.is_answered(QuestionId::new(3)));
    }

    #[test]
    fn last_write_wins() {
        let mut sheet = AnswerSheet::new();
        sheet.set(QuestionId::new(3), "True");
        sheet.set(QuestionId::new(3), "False");
        assert_eq!(sheet.get(QuestionId::new(3)), "False");
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn empty_value_clears() {
        let mut sheet = AnswerSheet::new();
        sheet.set(QuestionId::new(3), "snow");
        sheet.set(QuestionId::new(3), "");
        assert!(sheet.is_empty());
        assert_eq!(sheet.get(QuestionId::new(3)), "");
    }
}
