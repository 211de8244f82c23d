use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::common::error::JobError;

/// Default exclusive upper bound for a job's sleep interval, in milliseconds.
pub const DEFAULT_MAX_INTERVAL_MS: i64 = 5000;

/// Random sleep interval source.
///
/// Seeded once when constructed and never reseeded, so successive draws stay
/// independent however quickly they are requested.
pub struct IntervalGenerator {
    rng: StdRng,
    seed: u64,
}

impl IntervalGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeds from the wall clock (nanoseconds since the UNIX epoch).
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros()) as u64;
        Self::from_seed(seed)
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_clock(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a duration in `[0, max_ms)` milliseconds.
    pub fn next_interval(&mut self, max_ms: i64) -> Result<Duration, JobError> {
        random_duration(&mut self.rng, max_ms)
    }
}

/// Draws a duration in `[0, max_ms)` milliseconds from `rng`.
///
/// A non-positive bound is rejected with [`JobError::InvalidArgument`].
pub fn random_duration<R: Rng + ?Sized>(rng: &mut R, max_ms: i64) -> Result<Duration, JobError> {
    if max_ms <= 0 {
        return Err(JobError::InvalidArgument(format!(
            "interval upper bound must be positive, got {}",
            max_ms
        )));
    }
    let ms = rng.random_range(0..max_ms as u64);
    Ok(Duration::from_millis(ms))
}
