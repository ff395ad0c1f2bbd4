//! Application configuration management.

use finsynth_core::generator::params::{
    DEFAULT_PERIODS, DEFAULT_RAW_MATERIALS_SEASON_DAYS, DEFAULT_START_DATE,
};
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Generation parameters.
    #[serde(default)]
    pub generator: GeneratorSettings,
    /// Output rendering.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Generation parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// First generated day (`YYYY-MM-DD`).
    #[serde(default = "default_start_date")]
    pub start_date: String,
    /// Number of generated days.
    #[serde(default = "default_periods")]
    pub periods: i64,
    /// Seed for reproducible output; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Length of the raw materials price cycle in days.
    #[serde(default = "default_raw_materials_season_days")]
    pub raw_materials_season_days: u32,
}

fn default_start_date() -> String {
    DEFAULT_START_DATE.to_string()
}

const fn default_periods() -> i64 {
    DEFAULT_PERIODS
}

const fn default_raw_materials_season_days() -> u32 {
    DEFAULT_RAW_MATERIALS_SEASON_DAYS
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            periods: default_periods(),
            seed: None,
            raw_materials_season_days: default_raw_materials_season_days(),
        }
    }
}

/// How generated tables are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text columns.
    #[default]
    Table,
    /// One JSON document.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Rows printed per table.
    #[serde(default = "default_head_rows")]
    pub head_rows: usize,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_head_rows() -> usize {
    5
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            head_rows: default_head_rows(),
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`
    /// (both optional) and `FINSYNTH__SECTION__KEY` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FINSYNTH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
