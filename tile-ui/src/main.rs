use std::{io, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, info};

use tile_core::Language;
use tile_ui::{AppConfig, Wizard, app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimates how many tiles and boxes are needed to cover a floor or wall.
///
/// Walks through tile type, area (typed or measured from a photo) and tile
/// size, then prints the estimate.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language to start in: en, ta, hi, fr or es.
    #[arg(long)]
    lang: Option<String>,

    /// Log filter directive, e.g. `debug` or `tile_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not write log records to the console.
    #[arg(long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(code) = &cli.lang {
        config.language =
            Language::parse(code).ok_or_else(|| anyhow!("unsupported language '{code}'"))?;
    }
    debug!(
        language = config.language.code(),
        temp_dir = %config.temp_dir.display(),
        "configuration loaded"
    );

    let services = app::build_services(&config)?;

    let mut wizard = Wizard::new(
        io::stdin().lock(),
        io::stdout().lock(),
        &services.translator,
        services.mailer.as_ref(),
        config.language,
    )
    .with_temp_dir(config.temp_dir.clone());

    info!("starting wizard");
    wizard.run().await
}
