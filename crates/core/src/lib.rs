//! Core generation logic for Finsynth.
//!
//! This crate contains pure generation logic with ZERO I/O.
//! All record types, reference tables and sampling live here.
//!
//! # Modules
//!
//! - `generator` - Revenue, cost and profit metrics synthesis

pub mod generator;

pub use generator::{DataGenerator, GeneratorError, RngSource};
