mod bank;
mod ids;
mod question;
mod source;

pub use bank::{BankError, QuestionBank};
pub use ids::QuestionId;
pub use question::{AnswerOption, MISSING_RATIONALE, Question};
pub use source::{BankSource, SourceError};
