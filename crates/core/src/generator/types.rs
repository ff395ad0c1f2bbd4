//! Generated record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{CostCategory, CustomerSegment, ProductLine, Region};
use super::error::GeneratorError;

/// A single sales transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Transaction day.
    pub date: NaiveDate,
    /// Product sold.
    pub product_line: ProductLine,
    /// Sales region.
    pub region: Region,
    /// Customer segment.
    pub customer_segment: CustomerSegment,
    /// Transaction revenue. Not clamped; noise may in theory push it negative.
    pub revenue: f64,
    /// Units sold, 1 to 9 inclusive.
    pub units_sold: u32,
}

/// One cost category's spend on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    /// Cost day.
    pub date: NaiveDate,
    /// Cost category.
    pub cost_category: CostCategory,
    /// Amount spent.
    pub amount: f64,
    /// Market factor of the day the amount was derived from.
    pub market_factor: f64,
}

/// Daily profit metrics derived from revenue and cost totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Metrics day.
    pub date: NaiveDate,
    /// Sum of the day's transaction revenue.
    pub revenue: f64,
    /// Sum of the day's cost amounts; the `amount` column, also read as `costs`.
    #[serde(rename = "amount", alias = "costs")]
    pub costs: f64,
    /// `revenue - costs`.
    pub gross_profit: f64,
    /// `gross_profit / revenue * 100`.
    ///
    /// NaN when `revenue` is exactly zero; serialized as `null`.
    #[serde(with = "nan_as_null")]
    pub profit_margin: f64,
}

impl MetricsRecord {
    /// Derives gross profit and margin from a day's totals.
    #[must_use]
    pub fn new(date: NaiveDate, revenue: f64, costs: f64) -> Self {
        let gross_profit = revenue - costs;
        Self {
            date,
            revenue,
            costs,
            gross_profit,
            profit_margin: profit_margin(gross_profit, revenue),
        }
    }

    /// False when the margin is the NaN sentinel.
    #[must_use]
    pub fn has_defined_margin(&self) -> bool {
        !self.profit_margin.is_nan()
    }

    /// Margin, or `UndefinedMetric` for a zero-revenue day.
    pub fn checked_profit_margin(&self) -> Result<f64, GeneratorError> {
        if self.has_defined_margin() {
            Ok(self.profit_margin)
        } else {
            Err(GeneratorError::UndefinedMetric { date: self.date })
        }
    }
}

/// Margin in percent; NaN when `revenue` is exactly zero.
#[must_use]
pub fn profit_margin(gross_profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        f64::NAN
    } else {
        gross_profit / revenue * 100.0
    }
}

/// Revenue and cost tables together with the metrics derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Transactions.
    pub revenue: Vec<RevenueRecord>,
    /// Cost entries.
    pub costs: Vec<CostRecord>,
    /// Daily metrics joined from `revenue` and `costs`.
    pub metrics: Vec<MetricsRecord>,
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
