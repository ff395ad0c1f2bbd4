//! Application-wide error types.

use finsynth_core::generator::GeneratorError;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generation parameters were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generated data could not be rendered or written.
    #[error("Output error: {0}")]
    Output(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (sysexits.h values).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 64,
            Self::Internal(_) => 70,
            Self::Output(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Returns the error code for log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Output(_) => "OUTPUT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::InvalidDate { .. }
            | GeneratorError::InvalidPeriod(_)
            | GeneratorError::DateRangeOverflow { .. }
            | GeneratorError::InvalidSeasonLength => Self::Validation(err.to_string()),
            GeneratorError::UndefinedMetric { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
