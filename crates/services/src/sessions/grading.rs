/// Outcome of grading one submitted answer.
///
/// Carries everything a presenter needs to mark the chosen option, mark the
/// answer key, lock the options and reveal the rationale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingResult {
    pub selected_index: usize,
    /// `None` when the question marks no option correct.
    pub correct_index: Option<usize>,
    pub is_correct: bool,
    /// Rationale of the answer key, whatever was selected.
    pub rationale: String,
}

/// How a single option should be shown after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Correct,
    Incorrect,
    Neutral,
}

impl GradingResult {
    #[must_use]
    pub fn feedback_for(&self, option_index: usize) -> OptionFeedback {
        if option_index == self.selected_index {
            if self.is_correct {
                OptionFeedback::Correct
            } else {
                OptionFeedback::Incorrect
            }
        } else if self.correct_index == Some(option_index) {
            OptionFeedback::Correct
        } else {
            OptionFeedback::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded(
        selected_index: usize,
        correct_index: Option<usize>,
        is_correct: bool,
    ) -> GradingResult {
        GradingResult {
            selected_index,
            correct_index,
            is_correct,
            rationale: "because".into(),
        }
    }

    #[test]
    fn wrong_pick_marks_pick_and_key() {
        let result = graded(0, Some(2), false);
        assert_eq!(result.feedback_for(0), OptionFeedback::Incorrect);
        assert_eq!(result.feedback_for(1), OptionFeedback::Neutral);
        assert_eq!(result.feedback_for(2), OptionFeedback::Correct);
    }

    #[test]
    fn right_pick_marks_only_key() {
        let result = graded(1, Some(1), true);
        assert_eq!(result.feedback_for(0), OptionFeedback::Neutral);
        assert_eq!(result.feedback_for(1), OptionFeedback::Correct);
    }

    #[test]
    fn secondary_correct_pick_is_not_marked_wrong() {
        let result = graded(2, Some(0), true);
        assert_eq!(result.feedback_for(0), OptionFeedback::Correct);
        assert_eq!(result.feedback_for(2), OptionFeedback::Correct);
    }
}
