use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod catalog;
pub mod validator;

pub use catalog::{CatalogConfig, CategoryConfig, PriceRange, StockBounds};

use crate::cli::Cli;
use crate::domain::profile::ProfileKind;

/// Top-level application settings.
///
/// Every field falls back to a compiled-in default, so a missing config file
/// yields the canonical catalog with seed 42 and 1000 records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: GeneratorSettings::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Seed for the pseudo-random source. Fixed seed, fixed output.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of product records to emit.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Which generation preset to run.
    #[serde(default)]
    pub profile: ProfileKind,
}

fn default_seed() -> u64 {
    42
}

fn default_count() -> usize {
    1000
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            count: default_count(),
            profile: ProfileKind::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        let settings = Self::load(Path::new("demeter.toml"))?;
        Self::run_validation(&settings)?;
        Ok(settings)
    }

    /// Create settings from CLI arguments (config file plus CLI overrides).
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // Apply CLI overrides (CLI > env vars > config file > defaults)
        settings.apply_cli_overrides(cli);

        Self::run_validation(&settings)?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("generator.seed", default_seed() as i64)?
            .set_default("generator.count", default_count() as i64)?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        Ok(settings)
    }

    fn run_validation(settings: &Settings) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(settings).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(count) = cli.count {
            self.generator.count = count;
        }
        if let Some(seed) = cli.seed {
            self.generator.seed = seed;
        }
        if let Some(profile) = cli.profile {
            self.generator.profile = profile;
        }
    }
}
