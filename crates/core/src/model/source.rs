use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question bank source cannot be empty")]
    Empty,
}

/// Where a question bank document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankSource {
    File(PathBuf),
    Url(Url),
}

impl BankSource {
    /// Interpret a raw locator: `http(s)://` URLs are remote, anything else is a path.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Empty` for a blank locator.
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceError::Empty);
        }
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Url(url)),
            _ => Ok(Self::File(PathBuf::from(trimmed))),
        }
    }

    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
