use clap::Parser;
use std::path::PathBuf;

use crate::domain::profile::ProfileKind;

/// Demeter - deterministic product catalog seed generator
#[derive(Parser, Debug, Clone)]
#[command(name = "demeter", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "DEMETER_CONFIG", default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Number of product records to generate
    #[arg(short = 'n', long, env = "DEMETER_COUNT")]
    pub count: Option<usize>,

    /// Seed for the pseudo-random source
    #[arg(long, env = "DEMETER_SEED")]
    pub seed: Option<u64>,

    /// Generation profile preset
    #[arg(long, env = "DEMETER_PROFILE", value_enum)]
    pub profile: Option<ProfileKind>,

    /// Write the SQL statement to a file instead of stdout
    #[arg(short, long, env = "DEMETER_OUTPUT")]
    pub output: Option<PathBuf>,
}
