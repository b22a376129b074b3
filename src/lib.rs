//! # Demeter - Product Catalog Seed Generator
//!
//! Demeter synthesizes fake e-commerce product records from fixed lookup
//! tables and emits them as a single multi-row SQL `INSERT` statement,
//! ready to pipe into a database client.
//!
//! ## Features
//!
//! - **Deterministic**: one locally owned random source, seeded once; a
//!   fixed seed reproduces the output byte for byte
//! - **Unique names**: adjective resampling with a numeric-suffix fallback,
//!   verified against every name produced in the run
//! - **Profiles**: clothing-only records with local image paths, or
//!   full-catalog records with remote placeholder images, each with its own
//!   column layout
//! - **Validation**: catalog tables and generator parameters are checked
//!   before any record is sampled
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use demeter::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let sql = demeter::generate_seed_sql(&settings)?;
//!     print!("{}", sql);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::product_sampler::{ProductSampler, SampleError};
use crate::adapters::sql_writer::SqlWriter;
use crate::config::Settings;

/// Run one generation pass and render the result as SQL text.
pub fn generate_seed_sql(settings: &Settings) -> Result<String, SampleError> {
    let profile = settings.generator.profile.resolve();

    let mut sampler = ProductSampler::new(&settings.catalog, &profile, settings.generator.seed);
    let products = sampler.generate(settings.generator.count)?;

    tracing::info!(records = products.len(), "catalog records generated");

    let writer = SqlWriter::new(profile.column_layout);
    Ok(writer.render(&products))
}
