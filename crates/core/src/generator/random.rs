//! Injectable source of randomness.
//!
//! Every draw the generator makes goes through [`RandomSource`], so tests can
//! script the draws and callers can pin a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson};

/// Draws used by the generator.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Sample from `Normal(mean, std_dev)`.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Sample a count from `Poisson(lambda)`.
    fn poisson(&mut self, lambda: f64) -> u64;

    /// Uniform index in `[0, len)`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `[low, high)`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;
}

/// Picks one element of a non-empty table uniformly.
pub(crate) fn choose<S, T>(source: &mut S, items: &[T]) -> T
where
    S: RandomSource + ?Sized,
    T: Copy,
{
    items[source.pick(items.len())]
}

/// [`RandomSource`] backed by a `rand` generator.
///
/// Invalid distribution parameters degrade to the distribution's mean
/// (`normal` with a negative or NaN `std_dev`) or zero (`poisson` with a
/// non-positive `lambda`) instead of panicking.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Deterministic source for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the source and returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        // rand_distr accepts a negative std_dev and mirrors the samples
        if std_dev.is_nan() || std_dev < 0.0 {
            return mean;
        }
        Normal::new(mean, std_dev).map_or(mean, |dist| dist.sample(&mut self.rng))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn poisson(&mut self, lambda: f64) -> u64 {
        Poisson::new(lambda).map_or(0, |dist| {
            let count: f64 = dist.sample(&mut self.rng);
            count as u64
        })
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..high)
    }
}
