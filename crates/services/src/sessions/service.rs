use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use std::fmt;

use quiz_core::Clock;
use quiz_core::model::{Question, QuestionBank, QuestionId};

use super::grading::GradingResult;
use super::progress::{Position, Progress};
use super::sampling::draw_sample;
use super::summary::QuizResults;
use crate::error::{QuizError, StateError, ValidationError};

/// Lifecycle of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt.
///
/// Owns the sampled questions and steps through them one at a time. Each
/// question is graded at most once and must be graded before the session
/// advances past it.
pub struct QuizSession {
    clock: Clock,
    status: SessionStatus,
    sample_ids: Vec<QuestionId>,
    sample: Vec<Question>,
    current: usize,
    correct_count: usize,
    grading: Option<GradingResult>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            status: SessionStatus::NotStarted,
            sample_ids: Vec::new(),
            sample: Vec::new(),
            current: 0,
            correct_count: 0,
            grading: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// Sample `sample_size` questions from `bank` and begin the attempt.
    ///
    /// # Errors
    ///
    /// Returns `StateError::AlreadyStarted` unless the session is `NotStarted`.
    /// Returns `ConfigError::SampleTooLarge` / `ConfigError::EmptySample` for an
    /// unusable sample size.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        bank: &QuestionBank,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if self.status != SessionStatus::NotStarted {
            return Err(StateError::AlreadyStarted.into());
        }

        let ids = draw_sample(bank, sample_size, rng)?;
        self.sample = ids.iter().filter_map(|id| bank.get(*id).cloned()).collect();
        self.sample_ids = ids;
        self.current = 0;
        self.correct_count = 0;
        self.grading = None;
        self.started_at = Some(self.clock.now());
        self.status = SessionStatus::InProgress;

        info!(
            "quiz started with {} of {} questions: {:?}",
            self.sample.len(),
            bank.len(),
            self.sample_ids
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StateError::NotStarted` or `StateError::Finished` outside `InProgress`.
    pub fn current_question(&self) -> Result<&Question, StateError> {
        match self.status {
            SessionStatus::NotStarted => Err(StateError::NotStarted),
            SessionStatus::Finished => Err(StateError::Finished),
            SessionStatus::InProgress => self.sample.get(self.current).ok_or(StateError::Finished),
        }
    }

    /// Grade `option_index` against the current question.
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotStarted` / `StateError::Finished` outside `InProgress`.
    /// Returns `StateError::AlreadyGraded` if the current question was already answered.
    /// Returns `ValidationError::OptionOutOfRange` for an index past the last option.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<GradingResult, QuizError> {
        let result = {
            let question = self.current_question()?;
            if self.grading.is_some() {
                return Err(StateError::AlreadyGraded.into());
            }
            let selected =
                question
                    .option(option_index)
                    .ok_or(ValidationError::OptionOutOfRange {
                        index: option_index,
                        len: question.options().len(),
                    })?;

            GradingResult {
                selected_index: option_index,
                correct_index: question.correct_index(),
                is_correct: selected.is_correct(),
                rationale: question.rationale().to_string(),
            }
        };

        if result.is_correct {
            self.correct_count += 1;
        }
        debug!(
            "question {} graded: option {} ({})",
            self.current + 1,
            option_index,
            if result.is_correct { "correct" } else { "incorrect" }
        );

        self.grading = Some(result.clone());
        Ok(result)
    }

    /// Move past the graded current question.
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotGraded` if the current question has no answer yet.
    /// Returns `StateError::NotStarted` / `StateError::Finished` outside `InProgress`.
    pub fn advance(&mut self) -> Result<SessionStatus, StateError> {
        self.current_question()?;
        if self.grading.take().is_none() {
            return Err(StateError::NotGraded);
        }

        self.current += 1;
        if self.current >= self.sample.len() {
            self.status = SessionStatus::Finished;
            self.completed_at = Some(self.clock.now());
            info!(
                "quiz finished: {} of {} correct",
                self.correct_count,
                self.sample.len()
            );
        }
        Ok(self.status)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        let position = match self.status {
            SessionStatus::NotStarted => Position::NotStarted,
            SessionStatus::InProgress => Position::Question(self.current + 1),
            SessionStatus::Finished => Position::Finished,
        };
        Progress {
            position,
            total: self.sample.len(),
        }
    }

    /// # Errors
    ///
    /// Returns `StateError::NotFinished` until the last question has been passed.
    pub fn results(&self) -> Result<QuizResults, StateError> {
        match (self.status, self.started_at, self.completed_at) {
            (SessionStatus::Finished, Some(started_at), Some(completed_at)) => Ok(QuizResults::new(
                self.correct_count,
                self.sample.len(),
                started_at,
                completed_at,
            )),
            _ => Err(StateError::NotFinished),
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Total number of questions in this attempt.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.sample.len()
    }

    #[must_use]
    pub fn sample(&self) -> &[Question] {
        &self.sample
    }

    /// Bank ids of the sampled questions, in presentation order.
    #[must_use]
    pub fn sample_ids(&self) -> &[QuestionId] {
        &self.sample_ids
    }

    /// True once the current question has been answered.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.grading.is_some()
    }

    #[must_use]
    pub fn last_grading(&self) -> Option<&GradingResult> {
        self.grading.as_ref()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("status", &self.status)
            .field("sample_ids", &self.sample_ids)
            .field("current", &self.current)
            .field("correct_count", &self.correct_count)
            .field("graded", &self.grading.is_some())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
