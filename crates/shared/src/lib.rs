//! Shared errors and configuration for Finsynth.
//!
//! This crate provides common pieces used by the binaries:
//! - Application-wide error types with stable error and exit codes
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, GeneratorSettings, OutputFormat, OutputSettings};
pub use error::{AppError, AppResult};
