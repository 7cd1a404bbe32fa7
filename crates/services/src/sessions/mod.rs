mod grading;
mod progress;
mod sampling;
mod service;
mod summary;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{QuizError, StateError, ValidationError};
pub use grading::{GradingResult, OptionFeedback};
pub use progress::{Position, Progress};
pub use sampling::draw_sample;
pub use service::{QuizSession, SessionStatus};
pub use summary::QuizResults;
pub use workflow::{QuizPresenter, QuizRunner};
