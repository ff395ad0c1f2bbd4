//! Period-level rollup of daily metrics.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::{MetricsRecord, profit_margin};

/// Totals over a run of daily metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    /// First day included, if any.
    pub first_date: Option<NaiveDate>,
    /// Last day included, if any.
    pub last_date: Option<NaiveDate>,
    /// Number of days included.
    pub days: usize,
    /// Total revenue.
    pub total_revenue: f64,
    /// Total costs.
    pub total_costs: f64,
    /// Total revenue minus total costs.
    pub gross_profit: f64,
    /// Overall margin in percent; NaN when total revenue is zero.
    pub profit_margin: f64,
    /// Mean daily revenue; zero for an empty run.
    pub average_daily_revenue: f64,
    /// Days whose margin is the NaN sentinel.
    pub undefined_margin_days: usize,
}

impl MetricsSummary {
    /// Rolls up daily metrics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_metrics(metrics: &[MetricsRecord]) -> Self {
        let total_revenue: f64 = metrics.iter().map(|m| m.revenue).sum();
        let total_costs: f64 = metrics.iter().map(|m| m.costs).sum();
        let gross_profit = total_revenue - total_costs;
        let days = metrics.len();

        Self {
            first_date: metrics.iter().map(|m| m.date).min(),
            last_date: metrics.iter().map(|m| m.date).max(),
            days,
            total_revenue,
            total_costs,
            gross_profit,
            profit_margin: profit_margin(gross_profit, total_revenue),
            average_daily_revenue: if days == 0 {
                0.0
            } else {
                total_revenue / days as f64
            },
            undefined_margin_days: metrics.iter().filter(|m| !m.has_defined_margin()).count(),
        }
    }
}
