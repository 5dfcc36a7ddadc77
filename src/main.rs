//! Quoridor - command-line entry point

use anyhow::Result;
use clap::Parser;
use quoridor::cli::{Cli, Command};
use quoridor::{selfplay, Settings};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Selfplay(args) => {
            let mut settings = load_settings(args.config.as_deref())?;
            args.apply(&mut settings);
            let record = selfplay::play(&settings)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Config { config } => {
            let settings = load_settings(config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}

/// Explicit paths must load; the default location falls back to defaults
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(Settings::load_from(path)?),
        None => Ok(Settings::load_or_default()),
    }
}
