#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod sessions;
pub mod settings;

pub use quiz_core::Clock;

pub use error::{ConfigError, LoadError, MalformedBank, QuizError, StateError, ValidationError};
pub use loader::{BankLoader, parse_bank};
pub use settings::QuizSettings;

pub use sessions::{
    GradingResult, OptionFeedback, Position, Progress, QuizPresenter, QuizResults, QuizRunner,
    QuizSession, SessionStatus,
};
