use std::fmt;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    NotStarted,
    /// One-based number of the question on screen.
    Question(usize),
    Finished,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: Position,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.position, Position::Finished)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::NotStarted => write!(f, "Quiz not started"),
            Position::Question(number) => write!(f, "Question {number} of {}", self.total),
            Position::Finished => write!(f, "Quiz finished!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_position_text() {
        let progress = Progress {
            position: Position::Question(2),
            total: 5,
        };
        assert_eq!(progress.to_string(), "Question 2 of 5");

        let progress = Progress {
            position: Position::Finished,
            total: 5,
        };
        assert!(progress.is_finished());
        assert_eq!(progress.to_string(), "Quiz finished!");
    }
}
