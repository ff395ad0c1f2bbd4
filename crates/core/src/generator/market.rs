//! Market condition factors.
//!
//! A day's factor is `trend * seasonal * noise`:
//! - trend grows linearly from 1.0 to `1.0 + TREND_GROWTH` across the range,
//! - seasonal completes one full sine cycle across the range,
//! - noise is drawn per day from `Normal(1, MARKET_NOISE_STD_DEV)`.
//!
//! Factors are not clamped; noise can take them below 1.

use serde::Serialize;
use std::f64::consts::TAU;
use std::ops::Index;

use super::random::RandomSource;

/// Total growth of the trend component over the range.
pub const TREND_GROWTH: f64 = 0.2;

/// Amplitude of the seasonal component.
pub const SEASONAL_AMPLITUDE: f64 = 0.2;

/// Standard deviation of the per-day market noise.
pub const MARKET_NOISE_STD_DEV: f64 = 0.05;

/// One multiplicative market factor per generated day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MarketFactorSeries(Vec<f64>);

impl MarketFactorSeries {
    /// Draws a fresh series of `periods` factors.
    ///
    /// All noise draws happen before the series is assembled.
    pub fn compute<S>(periods: usize, source: &mut S) -> Self
    where
        S: RandomSource + ?Sized,
    {
        let noise: Vec<f64> = (0..periods)
            .map(|_| source.normal(1.0, MARKET_NOISE_STD_DEV))
            .collect();

        let factors = noise
            .into_iter()
            .enumerate()
            .map(|(day, noise)| trend(day, periods) * seasonal(day, periods) * noise)
            .collect();

        Self(factors)
    }

    /// Number of days covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no day is covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Factor for a day index.
    #[must_use]
    pub fn get(&self, day: usize) -> Option<f64> {
        self.0.get(day).copied()
    }

    /// Factors in day order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Underlying factors.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Index<usize> for MarketFactorSeries {
    type Output = f64;

    fn index(&self, day: usize) -> &f64 {
        &self.0[day]
    }
}

impl From<MarketFactorSeries> for Vec<f64> {
    fn from(series: MarketFactorSeries) -> Self {
        series.0
    }
}

/// Fraction of the range elapsed at `day`, in `[0, 1]`.
///
/// A single-day range stays at 0.
#[allow(clippy::cast_precision_loss)]
fn position(day: usize, periods: usize) -> f64 {
    if periods <= 1 {
        0.0
    } else {
        day as f64 / (periods - 1) as f64
    }
}

/// Linear growth component.
#[must_use]
pub fn trend(day: usize, periods: usize) -> f64 {
    1.0 + TREND_GROWTH * position(day, periods)
}

/// Seasonal component; one full cycle across the range.
#[must_use]
pub fn seasonal(day: usize, periods: usize) -> f64 {
    1.0 + SEASONAL_AMPLITUDE * (TAU * position(day, periods)).sin()
}
