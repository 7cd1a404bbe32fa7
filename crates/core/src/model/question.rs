
/// Shown when a question has no option marked correct.
pub const MISSING_RATIONALE: &str = "No explanation available.";

//
// ─── ANSWER OPTION ─────────────────────────────────────────────────────────────
//

/// One selectable answer of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    text: String,
    is_correct: bool,
    rationale: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(text: impl Into<String>, is_correct: bool, rationale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_correct,
            rationale: rationale.into(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A question and its ordered answer options. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<AnswerOption>,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Index of the answer key.
    ///
    /// When several options are marked correct the first one wins; `None` when
    /// no option is marked correct.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(AnswerOption::is_correct)
    }

    /// Rationale of the answer key, or [`MISSING_RATIONALE`].
    #[must_use]
    pub fn rationale(&self) -> &str {
        self.correct_index()
            .and_then(|index| self.options.get(index))
            .map_or(MISSING_RATIONALE, AnswerOption::rationale)
    }

    /// Number of options marked correct.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|opt| opt.is_correct()).count()
    }

    /// True when exactly one option is marked correct.
    #[must_use]
    pub fn has_single_answer(&self) -> bool {
        self.correct_count() == 1
    }
}
