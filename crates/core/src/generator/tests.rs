//! Property-based tests for the generator module.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use std::collections::HashSet;

use super::catalog::CostCategory;
use super::engine::DataGenerator;
use super::random::RngSource;

fn start_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~30 years
    (0u64..11_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset)
    })
}

fn generator(start: NaiveDate, periods: i64) -> DataGenerator {
    DataGenerator::new(&start.format("%Y-%m-%d").to_string(), periods).unwrap()
}

fn last_day(start: NaiveDate, periods: i64) -> NaiveDate {
    start + Days::new(periods.unsigned_abs() - 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Cost table has exactly one row per (day, category).
    #[test]
    fn test_cost_row_count(
        start in start_date(),
        periods in 1i64..=120,
        seed in any::<u64>(),
    ) {
        let generator = generator(start, periods);
        let costs = generator.generate_cost_data(&mut RngSource::seeded(seed));

        let expected = usize::try_from(periods).unwrap() * CostCategory::ALL.len();
        prop_assert_eq!(costs.len(), expected);

        let pairs: HashSet<_> = costs.iter().map(|c| (c.date, c.cost_category)).collect();
        prop_assert_eq!(pairs.len(), expected);
    }

    /// Every record falls inside [start, start + periods - 1].
    #[test]
    fn test_dates_within_range(
        start in start_date(),
        periods in 1i64..=60,
        seed in any::<u64>(),
    ) {
        let generator = generator(start, periods);
        let end = last_day(start, periods);
        prop_assert_eq!(generator.params().end_date(), end);

        let dataset = generator.generate_dataset(&mut RngSource::seeded(seed));
        let in_range = |d: NaiveDate| d >= start && d <= end;

        prop_assert!(dataset.revenue.iter().all(|r| in_range(r.date)));
        prop_assert!(dataset.costs.iter().all(|c| in_range(c.date)));
        prop_assert!(dataset.metrics.iter().all(|m| in_range(m.date)));
    }

    /// Market factor series covers every day.
    #[test]
    fn test_market_factor_length(periods in 1i64..=1_000, seed in any::<u64>()) {
        let generator = generator(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), periods);
        let factors = generator.compute_market_factors(&mut RngSource::seeded(seed));
        prop_assert_eq!(factors.len(), usize::try_from(periods).unwrap());
    }

    /// At most one metrics row per day; gross profit is exactly revenue minus costs.
    #[test]
    fn test_metrics_identity(periods in 1i64..=90, seed in any::<u64>()) {
        let generator = generator(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), periods);
        let metrics = generator.generate_metrics(&mut RngSource::seeded(seed));

        prop_assert!(metrics.len() <= usize::try_from(periods).unwrap());
        for record in &metrics {
            prop_assert_eq!(
                record.gross_profit.to_bits(),
                (record.revenue - record.costs).to_bits()
            );
        }
        prop_assert!(metrics.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// Units sold stay in 1..=9.
    #[test]
    fn test_units_sold_range(periods in 1i64..=60, seed in any::<u64>()) {
        let generator = generator(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), periods);
        let revenue = generator.generate_revenue_data(&mut RngSource::seeded(seed));
        prop_assert!(revenue.iter().all(|r| (1..=9).contains(&r.units_sold)));
    }
}

#[test]
fn test_different_seeds_same_shape_different_values() {
    let generator = DataGenerator::new("2022-01-01", 365).unwrap();

    let costs_a = generator.generate_cost_data(&mut RngSource::seeded(1));
    let costs_b = generator.generate_cost_data(&mut RngSource::seeded(2));
    assert_eq!(costs_a.len(), costs_b.len());
    assert!(
        costs_a
            .iter()
            .zip(&costs_b)
            .all(|(a, b)| a.date == b.date && a.cost_category == b.cost_category)
    );
    assert_ne!(costs_a, costs_b);

    let metrics_a = generator.generate_metrics(&mut RngSource::seeded(1));
    let metrics_b = generator.generate_metrics(&mut RngSource::seeded(2));
    assert_eq!(metrics_a.len(), 365);
    assert_eq!(metrics_b.len(), 365);
    assert_ne!(metrics_a, metrics_b);
}

#[test]
fn test_same_seed_reproduces_everything() {
    let generator = DataGenerator::new("2022-01-01", 365).unwrap();
    let a = generator.generate_dataset(&mut RngSource::seeded(2022));
    let b = generator.generate_dataset(&mut RngSource::seeded(2022));
    assert_eq!(a.revenue, b.revenue);
    assert_eq!(a.costs, b.costs);
    assert_eq!(a.metrics.len(), b.metrics.len());
    // Bitwise so NaN margins on zero-revenue days compare equal.
    for (x, y) in a.metrics.iter().zip(&b.metrics) {
        assert_eq!(x.date, y.date);
        assert_eq!(x.revenue.to_bits(), y.revenue.to_bits());
        assert_eq!(x.costs.to_bits(), y.costs.to_bits());
        assert_eq!(x.gross_profit.to_bits(), y.gross_profit.to_bits());
        assert_eq!(x.profit_margin.to_bits(), y.profit_margin.to_bits());
    }
}

#[test]
fn test_revenue_and_cost_factors_are_independent() {
    let generator = DataGenerator::new("2022-01-01", 30).unwrap();
    let mut source = RngSource::seeded(8);
    let first = generator.compute_market_factors(&mut source);
    let costs = generator.generate_cost_data(&mut source);

    let cost_factors: Vec<f64> = costs.iter().step_by(5).map(|c| c.market_factor).collect();
    assert_ne!(first.as_slice(), cost_factors.as_slice());
}

#[test]
fn test_transaction_volume_near_mean() {
    let generator = DataGenerator::new("2022-01-01", 365).unwrap();
    let revenue = generator.generate_revenue_data(&mut RngSource::seeded(365));
    // 7300 expected; Poisson sum stddev is ~85.
    assert!((6_800..=7_800).contains(&revenue.len()), "got {}", revenue.len());
}
