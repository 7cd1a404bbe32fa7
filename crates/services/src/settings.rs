use std::env;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::BankSource;

use crate::error::ConfigError;

pub const DEFAULT_SAMPLE_SIZE: usize = 5;
pub const DEFAULT_BANK_SOURCE: &str = "data/quiz_data.json";

pub const ENV_BANK_SOURCE: &str = "QUIZ_BANK_SOURCE";
pub const ENV_SAMPLE_SIZE: &str = "QUIZ_SAMPLE_SIZE";
pub const ENV_SEED: &str = "QUIZ_SEED";

/// How a quiz attempt is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    bank_source: BankSource,
    sample_size: usize,
    seed: Option<u64>,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySample` for a zero sample size.
    pub fn new(
        bank_source: BankSource,
        sample_size: usize,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if sample_size == 0 {
            return Err(ConfigError::EmptySample);
        }
        Ok(Self {
            bank_source,
            sample_size,
            seed,
        })
    }

    /// Defaults overridden by `QUIZ_BANK_SOURCE`, `QUIZ_SAMPLE_SIZE` and `QUIZ_SEED`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`QuizSettings::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(raw) = lookup(ENV_BANK_SOURCE) {
            settings = settings.with_bank_source(&raw)?;
        }
        if let Some(raw) = lookup(ENV_SAMPLE_SIZE) {
            settings = settings.with_sample_size(&raw)?;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            settings = settings.with_seed(&raw)?;
        }
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Source` for a blank locator.
    pub fn with_bank_source(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.bank_source = BankSource::parse(raw)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSampleSize` for non-numeric input and
    /// `ConfigError::EmptySample` for zero.
    pub fn with_sample_size(mut self, raw: &str) -> Result<Self, ConfigError> {
        let sample_size: usize = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidSampleSize {
                raw: raw.to_string(),
            })?;
        if sample_size == 0 {
            return Err(ConfigError::EmptySample);
        }
        self.sample_size = sample_size;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` for non-numeric input.
    pub fn with_seed(mut self, raw: &str) -> Result<Self, ConfigError> {
        let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidSeed {
            raw: raw.to_string(),
        })?;
        self.seed = Some(seed);
        Ok(self)
    }

    #[must_use]
    pub fn bank_source(&self) -> &BankSource {
        &self.bank_source
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seeded generator when a seed is configured, OS entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            bank_source: BankSource::file(DEFAULT_BANK_SOURCE),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}
