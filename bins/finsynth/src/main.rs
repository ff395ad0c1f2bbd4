//! Synthetic financial data demo.
//!
//! Generates revenue, cost and metrics tables and prints the first rows of
//! each, followed by a period summary.
//!
//! Usage: cargo run --bin finsynth -- --periods 90 --seed 7

mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use finsynth_core::generator::{DataGenerator, GeneratorParams, MetricsSummary, RngSource};
use finsynth_shared::{AppConfig, AppError, AppResult, OutputFormat};

use render::Report;

/// Prints sample synthetic revenue, cost and profit metrics tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First generated day (format: YYYY-MM-DD).
    #[arg(long)]
    start_date: Option<String>,

    /// Number of generated days.
    #[arg(long, allow_negative_numbers = true)]
    periods: Option<i64>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Length of the raw materials price cycle in days.
    #[arg(long)]
    raw_materials_season_days: Option<u32>,

    /// Rows printed per table.
    #[arg(long)]
    head: Option<usize>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl Cli {
    /// Applies command-line overrides on top of loaded configuration.
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(start_date) = self.start_date {
            config.generator.start_date = start_date;
        }
        if let Some(periods) = self.periods {
            config.generator.periods = periods;
        }
        if self.seed.is_some() {
            config.generator.seed = self.seed;
        }
        if let Some(days) = self.raw_materials_season_days {
            config.generator.raw_materials_season_days = days;
        }
        if let Some(head) = self.head {
            config.output.head_rows = head;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout carries the tables
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finsynth=info,finsynth_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = cli.apply(AppConfig::load()?);
    let settings = &config.generator;

    let params = GeneratorParams::new(&settings.start_date, settings.periods)
        .and_then(|p| p.with_raw_materials_season_days(settings.raw_materials_season_days))?;
    let generator = DataGenerator::from_params(params);

    let mut source = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    info!(
        start_date = %params.start_date(),
        end_date = %params.end_date(),
        periods = params.periods(),
        seed = ?settings.seed,
        "Generating synthetic financial data"
    );

    let revenue = generator.generate_revenue_data(&mut source);
    let costs = generator.generate_cost_data(&mut source);
    let metrics = generator.generate_metrics(&mut source);
    let summary = MetricsSummary::from_metrics(&metrics);

    info!(
        revenue_rows = revenue.len(),
        cost_rows = costs.len(),
        metrics_rows = metrics.len(),
        "Generation complete"
    );

    let report = Report::head(&revenue, &costs, &metrics, &summary, config.output.head_rows);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Table => report.write_table(&mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)
                .map_err(|e| AppError::Output(e.to_string()))?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
