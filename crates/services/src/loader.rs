use std::path::Path;

use log::{debug, info, warn};
use reqwest::{Client, Url};
use serde::Deserialize;

use quiz_core::model::{AnswerOption, BankSource, Question, QuestionBank};

use crate::error::{LoadError, MalformedBank};

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct BankDocument {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    question: String,
    #[serde(default)]
    answer_options: Vec<OptionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionRecord {
    text: String,
    #[serde(default)]
    is_correct: bool,
    #[serde(default)]
    rationale: String,
}

impl From<OptionRecord> for AnswerOption {
    fn from(record: OptionRecord) -> Self {
        AnswerOption::new(record.text, record.is_correct, record.rationale)
    }
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let options = record
            .answer_options
            .into_iter()
            .map(AnswerOption::from)
            .collect();
        Question::new(record.question, options)
    }
}

/// Parse and validate a question bank document.
///
/// Questions that do not mark exactly one option correct are accepted and logged.
///
/// # Errors
///
/// Returns `LoadError::Malformed` for invalid JSON, an empty question list, or a
/// question without answer options.
pub fn parse_bank(bytes: &[u8]) -> Result<QuestionBank, LoadError> {
    let document: BankDocument = serde_json::from_slice(bytes).map_err(MalformedBank::Syntax)?;
    let questions = document.questions.into_iter().map(Question::from).collect();
    let bank = QuestionBank::new(questions).map_err(MalformedBank::Invalid)?;

    for (id, question) in bank.ambiguous() {
        warn!(
            "question {id} marks {} options correct; grading against the first",
            question.correct_count()
        );
    }

    Ok(bank)
}

//
// ─── LOADER ────────────────────────────────────────────────────────────────────
//

/// Reads question banks from local files or over HTTP(S).
#[derive(Clone, Debug, Default)]
pub struct BankLoader {
    client: Client,
}

impl BankLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the document behind `source` and turn it into a bank.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Unavailable` when the document cannot be read or the
    /// server answers with a non-success status.
    /// Returns `LoadError::Malformed` when the document is not a valid bank.
    pub async fn load(&self, source: &BankSource) -> Result<QuestionBank, LoadError> {
        debug!("loading question bank from {source}");
        let bytes = match source {
            BankSource::File(path) => read_file(path).await?,
            BankSource::Url(url) => self.fetch(url).await?,
        };
        let bank = parse_bank(&bytes)?;
        info!("loaded {} questions from {source}", bank.len());
        Ok(bank)
    }

    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Unavailable {
                status: Some(status),
                reason: format!("{url} answered with status {status}"),
            });
        }

        let body = response.bytes().await.map_err(unavailable)?;
        Ok(body.to_vec())
    }
}

fn unavailable(err: reqwest::Error) -> LoadError {
    LoadError::Unavailable {
        status: err.status(),
        reason: err.to_string(),
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path)
        .await
        .map_err(|err| LoadError::Unavailable {
            status: None,
            reason: format!("{}: {err}", path.display()),
        })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
