use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{QuestionBank, QuestionId};

use crate::error::ConfigError;

/// Draw `sample_size` distinct questions uniformly at random.
///
/// Runs a Fisher–Yates shuffle over the bank ids and stops after
/// `sample_size` swaps, so each ordered sample is equally likely.
///
/// # Errors
///
/// Returns `ConfigError::EmptySample` for a zero sample size.
/// Returns `ConfigError::SampleTooLarge` when the bank is smaller than the sample.
pub fn draw_sample<R: Rng + ?Sized>(
    bank: &QuestionBank,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<QuestionId>, ConfigError> {
    if sample_size == 0 {
        return Err(ConfigError::EmptySample);
    }
    if sample_size > bank.len() {
        return Err(ConfigError::SampleTooLarge {
            requested: sample_size,
            available: bank.len(),
        });
    }

    let mut ids: Vec<QuestionId> = bank.ids().collect();
    let (picked, _rest) = ids.partial_shuffle(rng, sample_size);
    Ok(picked.to_vec())
}
