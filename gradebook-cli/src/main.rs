use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use gradebook_cli::app::{self, Command};
use gradebook_cli::config::Config;
use gradebook_cli::logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Semester GPA and overall CGPA calculator.
///
/// Restores the saved state, applies one command, prints the result and
/// saves the state again.
#[derive(Debug, Parser)]
#[command(name = "gradebook", version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Storage backend, overriding the configuration (`fs` or `memory`).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Storage location, overriding the configuration.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level or filter directive, overriding the configuration.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    logging::init_logging(&config.logging.level);
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }

    let mut storage = config.storage_config();
    if let Some(backend) = cli.backend {
        storage.backend = backend;
    }
    if let Some(dir) = cli.data_dir {
        storage.location = dir.display().to_string();
    }

    let mut store = app::open_store(&storage)?;
    let command = cli.command.unwrap_or(Command::Show);
    debug!(?command, "running command");

    let output = app::execute(&mut store, command, app::system_theme())?;
    print!("{output}");

    Ok(())
}
