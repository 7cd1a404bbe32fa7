use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank has no questions")]
    NoQuestions,

    #[error("question {question} has no answer options")]
    NoAnswerOptions { question: QuestionId },
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// Validated, read-only collection of questions.
///
/// Always holds at least one question, and every question holds at least one
/// answer option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::NoQuestions` for an empty list.
    /// Returns `BankError::NoAnswerOptions` for the first question without options.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::NoQuestions);
        }
        if let Some(index) = questions.iter().position(|q| q.options().is_empty()) {
            return Err(BankError::NoAnswerOptions {
                question: QuestionId::new(index),
            });
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.index())
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Ids of every question in bank order.
    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        (0..self.questions.len()).map(QuestionId::new)
    }

    /// Questions whose option list does not mark exactly one answer correct.
    pub fn ambiguous(&self) -> impl Iterator<Item = (QuestionId, &Question)> + '_ {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.has_single_answer())
            .map(|(i, q)| (QuestionId::new(i), q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerOption;

    fn two_option_question(text: &str) -> Question {
        Question::new(
            text,
            vec![
                AnswerOption::new("yes", true, "because"),
                AnswerOption::new("no", false, "not so"),
            ],
        )
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuestionBank::new(Vec::new()).unwrap_err();
        assert_eq!(err, BankError::NoQuestions);
    }

    #[test]
    fn question_without_options_is_rejected() {
        let questions = vec![two_option_question("a"), Question::new("b", Vec::new())];
        let err = QuestionBank::new(questions).unwrap_err();
        assert_eq!(
            err,
            BankError::NoAnswerOptions {
                question: QuestionId::new(1)
            }
        );
    }

    #[test]
    fn lookups_follow_bank_order() {
        let bank =
            QuestionBank::new(vec![two_option_question("a"), two_option_question("b")]).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
        assert_eq!(bank.get(QuestionId::new(1)).unwrap().text(), "b");
        assert!(bank.get(QuestionId::new(2)).is_none());
        assert_eq!(bank.ids().collect::<Vec<_>>(), vec![QuestionId::new(0), QuestionId::new(1)]);
    }

    #[test]
    fn ambiguous_lists_questions_without_single_key() {
        let no_key = Question::new("c", vec![AnswerOption::new("x", false, "")]);
        let bank = QuestionBank::new(vec![two_option_question("a"), no_key]).unwrap();
        let ambiguous: Vec<_> = bank.ambiguous().map(|(id, _)| id).collect();
        assert_eq!(ambiguous, vec![QuestionId::new(1)]);
    }
}
