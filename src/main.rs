use clap::Parser;
use demeter::cli::Cli;
use demeter::config::Settings;
use std::fs;
use std::io::Write;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // stdout carries the SQL statement; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    info!(
        seed = settings.generator.seed,
        count = settings.generator.count,
        profile = ?settings.generator.profile,
        "generating catalog seed data"
    );

    let sql = demeter::generate_seed_sql(&settings)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &sql)?;
            info!(path = %path.display(), "SQL statement written");
        }
        None => {
            std::io::stdout().write_all(sql.as_bytes())?;
        }
    }

    Ok(())
}
