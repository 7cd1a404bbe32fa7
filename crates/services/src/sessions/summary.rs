use chrono::{DateTime, Utc};
use std::fmt;

/// Final score of a finished quiz attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    pub correct_count: usize,
    pub total_questions: usize,
    /// `100 * correct_count / total_questions`.
    pub percentage: f64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl QuizResults {
    #[must_use]
    pub fn new(
        correct_count: usize,
        total_questions: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            correct_count,
            total_questions,
            percentage: percentage(correct_count, total_questions),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.completed_at.signed_duration_since(self.started_at)
    }
}

// Counts are bounded by the bank size.
#[allow(clippy::cast_precision_loss)]
fn percentage(correct_count: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    100.0 * correct_count as f64 / total_questions as f64
}

impl fmt::Display for QuizResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You answered {} of {} questions correctly ({:.0}%)",
            self.correct_count, self.total_questions, self.percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    #[test]
    fn percentage_follows_counts() {
        let results = QuizResults::new(3, 5, fixed_now(), fixed_now());
        assert!((results.percentage - 60.0).abs() < f64::EPSILON);
        assert_eq!(results.to_string(), "You answered 3 of 5 questions correctly (60%)");
    }

    #[test]
    fn duration_spans_the_attempt() {
        let end = fixed_now() + chrono::Duration::seconds(90);
        let results = QuizResults::new(0, 1, fixed_now(), end);
        assert_eq!(results.duration(), chrono::Duration::seconds(90));
        assert_eq!(results.percentage, 0.0);
    }
}
