//! Text and JSON rendering of table samples.

use std::io::{self, Write};

use serde::Serialize;

use finsynth_core::generator::{CostRecord, MetricsRecord, MetricsSummary, RevenueRecord};

/// Row counts of the full tables behind a sample.
#[derive(Debug, Serialize)]
pub struct RowCounts {
    pub revenue: usize,
    pub costs: usize,
    pub metrics: usize,
}

/// First rows of each table plus the period summary.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub rows: RowCounts,
    pub revenue: &'a [RevenueRecord],
    pub costs: &'a [CostRecord],
    pub metrics: &'a [MetricsRecord],
    pub summary: &'a MetricsSummary,
}

impl<'a> Report<'a> {
    /// Takes the first `rows` records of each table.
    pub fn head(
        revenue: &'a [RevenueRecord],
        costs: &'a [CostRecord],
        metrics: &'a [MetricsRecord],
        summary: &'a MetricsSummary,
        rows: usize,
    ) -> Self {
        Self {
            rows: RowCounts {
                revenue: revenue.len(),
                costs: costs.len(),
                metrics: metrics.len(),
            },
            revenue: &revenue[..rows.min(revenue.len())],
            costs: &costs[..rows.min(costs.len())],
            metrics: &metrics[..rows.min(metrics.len())],
            summary,
        }
    }

    /// Writes the sample as aligned text columns.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\nRevenue Data Sample ({} rows total):", self.rows.revenue)?;
        writeln!(
            out,
            "{:<10}  {:<10}  {:<6}  {:<10}  {:>10}  {:>5}",
            "date", "product", "region", "segment", "revenue", "units"
        )?;
        for r in self.revenue {
            writeln!(
                out,
                "{:<10}  {:<10}  {:<6}  {:<10}  {:>10.2}  {:>5}",
                r.date, r.product_line, r.region, r.customer_segment, r.revenue, r.units_sold
            )?;
        }

        writeln!(out, "\nCost Data Sample ({} rows total):", self.rows.costs)?;
        writeln!(
            out,
            "{:<10}  {:<14}  {:>10}  {:>8}",
            "date", "category", "amount", "market"
        )?;
        for c in self.costs {
            writeln!(
                out,
                "{:<10}  {:<14}  {:>10.2}  {:>8.4}",
                c.date, c.cost_category, c.amount, c.market_factor
            )?;
        }

        writeln!(out, "\nMetrics Sample ({} rows total):", self.rows.metrics)?;
        writeln!(
            out,
            "{:<10}  {:>10}  {:>10}  {:>12}  {:>8}",
            "date", "revenue", "costs", "gross_profit", "margin"
        )?;
        for m in self.metrics {
            writeln!(
                out,
                "{:<10}  {:>10.2}  {:>10.2}  {:>12.2}  {:>8}",
                m.date,
                m.revenue,
                m.costs,
                m.gross_profit,
                format_margin(m.profit_margin)
            )?;
        }

        let s = self.summary;
        writeln!(out, "\nSummary:")?;
        if let (Some(first), Some(last)) = (s.first_date, s.last_date) {
            writeln!(out, "  period          {first} .. {last} ({} days)", s.days)?;
        }
        writeln!(out, "  total revenue   {:.2}", s.total_revenue)?;
        writeln!(out, "  total costs     {:.2}", s.total_costs)?;
        writeln!(out, "  gross profit    {:.2}", s.gross_profit)?;
        writeln!(out, "  profit margin   {}", format_margin(s.profit_margin))?;
        writeln!(out, "  avg daily rev   {:.2}", s.average_daily_revenue)?;
        if s.undefined_margin_days > 0 {
            writeln!(out, "  zero-revenue days {}", s.undefined_margin_days)?;
        }
        Ok(())
    }
}

fn format_margin(margin: f64) -> String {
    if margin.is_nan() {
        "n/a".to_string()
    } else {
        format!("{margin:.2}%")
    }
}
