//! Synthetic revenue, cost and profit metrics generation.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod market;
pub mod params;
pub mod random;
pub mod summary;
pub mod types;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod benchmark;

pub use catalog::{CostCategory, CostProfile, CustomerSegment, ProductLine, ProductPricing, Region};
pub use engine::DataGenerator;
pub use error::GeneratorError;
pub use market::MarketFactorSeries;
pub use params::GeneratorParams;
pub use random::{RandomSource, RngSource};
pub use summary::MetricsSummary;
pub use types::{CostRecord, Dataset, MetricsRecord, RevenueRecord};
