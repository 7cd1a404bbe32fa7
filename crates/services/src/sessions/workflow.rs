use log::warn;

use quiz_core::Clock;
use quiz_core::model::Question;

use super::grading::GradingResult;
use super::progress::{Position, Progress};
use super::service::QuizSession;
use super::summary::QuizResults;
use crate::error::{QuizError, StateError, ValidationError};
use crate::loader::BankLoader;
use crate::settings::QuizSettings;

/// Presentation layer driven by [`QuizRunner`].
///
/// The `render_*` methods are output only. `choose_option` and
/// `confirm_advance` are the user events the session waits on.
pub trait QuizPresenter {
    fn render_progress(&mut self, progress: &Progress);

    fn render_question(&mut self, number: usize, question: &Question);

    /// Wait for an option to be picked. `None` abandons the attempt.
    fn choose_option(&mut self, question: &Question) -> Option<usize>;

    /// The last pick was rejected; the presenter is asked to choose again.
    fn render_rejection(&mut self, error: &ValidationError);

    fn render_feedback(&mut self, question: &Question, grading: &GradingResult);

    /// Wait for the request to move on. `false` abandons the attempt.
    fn confirm_advance(&mut self) -> bool;

    fn render_results(&mut self, results: &QuizResults);
}

/// Loads a bank, starts a session and walks it through a presenter.
#[derive(Clone, Debug, Default)]
pub struct QuizRunner {
    loader: BankLoader,
    clock: Clock,
}

impl QuizRunner {
    #[must_use]
    pub fn new(loader: BankLoader, clock: Clock) -> Self {
        Self { loader, clock }
    }

    /// Load the configured bank and start a session on it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Load` when the bank cannot be loaded; the caller
    /// decides whether to try again.
    /// Returns `QuizError::Config` when the sample does not fit the bank.
    pub async fn start(&self, settings: &QuizSettings) -> Result<QuizSession, QuizError> {
        let bank = self.loader.load(settings.bank_source()).await?;
        let mut rng = settings.rng();
        let mut session = QuizSession::new(self.clock);
        session.start(&bank, settings.sample_size(), &mut rng)?;
        Ok(session)
    }

    /// Drive a started session to the end.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Abandoned` when the presenter stops early.
    /// Returns `QuizError::State` when the session was not started or already finished.
    pub fn run<P: QuizPresenter + ?Sized>(
        session: &mut QuizSession,
        presenter: &mut P,
    ) -> Result<QuizResults, QuizError> {
        loop {
            let progress = session.progress();
            presenter.render_progress(&progress);
            let number = match progress.position {
                Position::Finished => break,
                Position::NotStarted => return Err(StateError::NotStarted.into()),
                Position::Question(number) => number,
            };

            let question = session.current_question()?.clone();
            presenter.render_question(number, &question);

            let grading = loop {
                let choice = presenter
                    .choose_option(&question)
                    .ok_or(QuizError::Abandoned)?;
                match session.submit_answer(choice) {
                    Ok(grading) => break grading,
                    Err(QuizError::Validation(err)) => {
                        warn!("rejected answer: {err}");
                        presenter.render_rejection(&err);
                    }
                    Err(err) => return Err(err),
                }
            };
            presenter.render_feedback(&question, &grading);

            if !presenter.confirm_advance() {
                return Err(QuizError::Abandoned);
            }
            session.advance()?;
        }

        let results = session.results()?;
        presenter.render_results(&results);
        Ok(results)
    }
}
