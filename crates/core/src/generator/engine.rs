//! Generator for revenue, cost and metrics tables.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::f64::consts::TAU;
use tracing::debug;

use super::catalog::{CostCategory, CustomerSegment, ProductLine, Region};
use super::error::GeneratorError;
use super::market::MarketFactorSeries;
use super::params::GeneratorParams;
use super::random::{RandomSource, choose};
use super::types::{CostRecord, Dataset, MetricsRecord, RevenueRecord};

/// Mean number of transactions per day.
pub const MEAN_DAILY_TRANSACTIONS: f64 = 20.0;

/// Standard deviation of the per-transaction price noise.
pub const PRICE_NOISE_STD_DEV: f64 = 0.05;

/// Smallest number of units in a transaction.
pub const MIN_UNITS_SOLD: u32 = 1;

/// Exclusive upper bound on units in a transaction.
pub const MAX_UNITS_SOLD_EXCLUSIVE: u32 = 10;

/// Operating cost of a day at market factor 1.0.
pub const DAILY_BASE_COST: f64 = 5000.0;

/// Peak winter premium on raw materials.
pub const RAW_MATERIALS_WINTER_PREMIUM: f64 = 0.15;

/// Synthetic financial data generator.
///
/// Holds immutable parameters only. Each operation draws from the random
/// source it is handed and returns a brand new table, so one generator can be
/// reused across calls and sources.
///
/// The default covers 365 days starting 2022-01-01.
#[derive(Debug, Clone, Default)]
pub struct DataGenerator {
    params: GeneratorParams,
}

impl DataGenerator {
    /// Creates a generator for `periods` days starting at `start_date`
    /// (`YYYY-MM-DD`).
    pub fn new(start_date: &str, periods: i64) -> Result<Self, GeneratorError> {
        GeneratorParams::new(start_date, periods).map(Self::from_params)
    }

    /// Creates a generator from validated parameters.
    #[must_use]
    pub const fn from_params(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Generation parameters.
    #[must_use]
    pub const fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Calendar days covered, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.params
            .start_date()
            .iter_days()
            .take(self.params.periods())
    }

    /// Draws a fresh market factor series for the covered days.
    pub fn compute_market_factors<S>(&self, source: &mut S) -> MarketFactorSeries
    where
        S: RandomSource + ?Sized,
    {
        MarketFactorSeries::compute(self.params.periods(), source)
    }

    /// Generates daily sales transactions.
    ///
    /// Each day draws a Poisson count of transactions. Every transaction picks
    /// product, region and segment independently and prices the product with
    /// the segment multiplier, the day's market factor and its own noise.
    pub fn generate_revenue_data<S>(&self, source: &mut S) -> Vec<RevenueRecord>
    where
        S: RandomSource + ?Sized,
    {
        let factors = self.compute_market_factors(source);
        let mut records = Vec::new();

        for (date, factor) in self.dates().zip(factors.iter()) {
            let transactions = source.poisson(MEAN_DAILY_TRANSACTIONS);

            for _ in 0..transactions {
                let product_line = choose(source, &ProductLine::ALL);
                let region = choose(source, &Region::ALL);
                let customer_segment = choose(source, &CustomerSegment::ALL);

                let price = product_line.pricing().base_price
                    * customer_segment.price_multiplier()
                    * factor;
                let revenue = price * source.normal(1.0, PRICE_NOISE_STD_DEV);
                let units_sold = source.uniform_int(MIN_UNITS_SOLD, MAX_UNITS_SOLD_EXCLUSIVE);

                records.push(RevenueRecord {
                    date,
                    product_line,
                    region,
                    customer_segment,
                    revenue,
                    units_sold,
                });
            }
        }

        debug!(
            periods = self.params.periods(),
            rows = records.len(),
            "Generated revenue records"
        );
        records
    }

    /// Generates one cost entry per day and category.
    ///
    /// Days are outer, categories inner in [`CostCategory::ALL`] order. The
    /// market factor series is drawn fresh and is independent of the one
    /// used for revenue.
    pub fn generate_cost_data<S>(&self, source: &mut S) -> Vec<CostRecord>
    where
        S: RandomSource + ?Sized,
    {
        let factors = self.compute_market_factors(source);
        let mut records = Vec::with_capacity(self.params.periods() * CostCategory::ALL.len());

        for (day, (date, market_factor)) in self.dates().zip(factors.iter()).enumerate() {
            let daily_base_cost = DAILY_BASE_COST * market_factor;

            for cost_category in CostCategory::ALL {
                let profile = cost_category.profile();
                let mut amount = daily_base_cost
                    * profile.base_percent
                    * source.normal(1.0, profile.volatility);

                if cost_category == CostCategory::RawMaterials {
                    amount *= self.raw_materials_premium(day);
                }

                records.push(CostRecord {
                    date,
                    cost_category,
                    amount,
                    market_factor,
                });
            }
        }

        debug!(
            periods = self.params.periods(),
            rows = records.len(),
            "Generated cost records"
        );
        records
    }

    /// Generates fresh revenue and cost tables and derives daily metrics.
    ///
    /// The two tables are drawn independently, each with its own market
    /// factor series.
    pub fn generate_metrics<S>(&self, source: &mut S) -> Vec<MetricsRecord>
    where
        S: RandomSource + ?Sized,
    {
        let revenue = self.generate_revenue_data(source);
        let costs = self.generate_cost_data(source);
        self.aggregate_metrics(&revenue, &costs)
    }

    /// Generates revenue and cost tables and the metrics derived from exactly
    /// those tables.
    pub fn generate_dataset<S>(&self, source: &mut S) -> Dataset
    where
        S: RandomSource + ?Sized,
    {
        let revenue = self.generate_revenue_data(source);
        let costs = self.generate_cost_data(source);
        let metrics = self.aggregate_metrics(&revenue, &costs);
        Dataset {
            revenue,
            costs,
            metrics,
        }
    }

    /// Sums revenue and costs per day and joins the totals on date.
    ///
    /// Every covered day starts with zero revenue, so a day without
    /// transactions still yields a record (with a NaN margin). Only days that
    /// also have cost entries are emitted. Output is in date order.
    #[must_use]
    pub fn aggregate_metrics(
        &self,
        revenue: &[RevenueRecord],
        costs: &[CostRecord],
    ) -> Vec<MetricsRecord> {
        let mut daily_revenue: BTreeMap<NaiveDate, f64> =
            self.dates().map(|date| (date, 0.0)).collect();
        for record in revenue {
            *daily_revenue.entry(record.date).or_insert(0.0) += record.revenue;
        }

        let mut daily_costs: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for record in costs {
            *daily_costs.entry(record.date).or_insert(0.0) += record.amount;
        }

        let metrics: Vec<MetricsRecord> = daily_revenue
            .into_iter()
            .filter_map(|(date, day_revenue)| {
                daily_costs
                    .get(&date)
                    .map(|&day_costs| MetricsRecord::new(date, day_revenue, day_costs))
            })
            .collect();

        let undefined = metrics.iter().filter(|m| !m.has_defined_margin()).count();
        if undefined > 0 {
            debug!(days = undefined, "Zero-revenue days carry an undefined margin");
        }
        metrics
    }

    /// Raw materials seasonal multiplier; peaks at day 0 of each cycle.
    #[allow(clippy::cast_precision_loss)]
    fn raw_materials_premium(&self, day: usize) -> f64 {
        let cycle = f64::from(self.params.raw_materials_season_days());
        1.0 + RAW_MATERIALS_WINTER_PREMIUM * (TAU * day as f64 / cycle).cos()
    }
}
