//! Synthetic write failures for the simulated payment store.
//!
//! A [`FaultPolicy`] decides, per write attempt, whether the write goes
//! through or fails with one of the repository failure classes. Writes fail
//! with probability [`FailureRate`]; a failed write is a `TimeoutError` or a
//! `StorageFault` with equal odds. With the default rate of one half that is
//! 50% success, 25% timeout, 25% storage fault.

use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::domain::ports::PaymentRepositoryError;

/// Failure rate used when none is configured.
pub const DEFAULT_FAILURE_RATE: f64 = 0.5;

/// Returned when a failure rate is not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("failure rate must be a probability between 0 and 1, got {0}")]
pub struct InvalidFailureRate(pub f64);

/// Probability that a simulated write fails.
///
/// # Examples
/// ```
/// use payments::outbound::persistence::FailureRate;
///
/// assert!(FailureRate::new(0.25).is_ok());
/// assert!(FailureRate::new(1.5).is_err());
/// assert!(FailureRate::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureRate(f64);

impl FailureRate {
    /// Validate that `rate` lies in `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self, InvalidFailureRate> {
        if (0.0..=1.0).contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(InvalidFailureRate(rate))
        }
    }

    /// Return the probability.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for FailureRate {
    fn default() -> Self {
        Self(DEFAULT_FAILURE_RATE)
    }
}

impl TryFrom<f64> for FailureRate {
    type Error = InvalidFailureRate;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Decides the fate of each simulated write.
#[cfg_attr(test, mockall::automock)]
pub trait FaultPolicy: Send + Sync {
    /// Draw the outcome for one write attempt. `None` lets the write through.
    fn next_fault(&self) -> Option<PaymentRepositoryError>;
}

fn draw_fault<R>(rng: &mut R, rate: FailureRate) -> Option<PaymentRepositoryError>
where
    R: Rng + ?Sized,
{
    if !rng.random_bool(rate.get()) {
        return None;
    }
    if rng.random_bool(0.5) {
        Some(PaymentRepositoryError::TimeoutError)
    } else {
        Some(PaymentRepositoryError::StorageFault)
    }
}

/// Draws fresh thread-local randomness on every write.
///
/// No state is carried between calls, so outcomes are independent but not
/// reproducible. This is the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyFaults {
    rate: FailureRate,
}

impl EntropyFaults {
    /// Create a policy failing writes with probability `rate`.
    #[must_use]
    pub const fn new(rate: FailureRate) -> Self {
        Self { rate }
    }
}

impl FaultPolicy for EntropyFaults {
    fn next_fault(&self) -> Option<PaymentRepositoryError> {
        draw_fault(&mut rand::rng(), self.rate)
    }
}

/// Draws from a seeded `ChaCha8` generator so a seed fixes the sequence of
/// outcomes.
#[derive(Debug)]
pub struct SeededFaults {
    rate: FailureRate,
    rng: Mutex<ChaCha8Rng>,
}

impl SeededFaults {
    /// Create a reproducible policy from `seed`.
    ///
    /// # Examples
    /// ```
    /// use payments::outbound::persistence::{FailureRate, FaultPolicy, SeededFaults};
    ///
    /// let first = SeededFaults::new(FailureRate::default(), 7);
    /// let second = SeededFaults::new(FailureRate::default(), 7);
    /// for _ in 0..16 {
    ///     assert_eq!(first.next_fault(), second.next_fault());
    /// }
    /// ```
    #[must_use]
    pub fn new(rate: FailureRate, seed: u64) -> Self {
        Self {
            rate,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl FaultPolicy for SeededFaults {
    fn next_fault(&self) -> Option<PaymentRepositoryError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw_fault(&mut *rng, self.rate)
    }
}

/// Never fails a write.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFaults;

impl FaultPolicy for NoFaults {
    fn next_fault(&self) -> Option<PaymentRepositoryError> {
        None
    }
}
