//! Lode vault server.
//!
//! Loads settings (fail-fast on a missing vault root), wires the tool
//! registry over one document store, and serves line-delimited JSON tool
//! calls over stdio.

#![deny(unsafe_code)]

mod dispatch;
mod wire;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lode_settings::{load_settings, load_settings_from_path};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "lode-server", about = "File-backed memory vault server")]
struct Args {
    /// Path to a settings file (default: ~/.lode/settings.json).
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match args.settings.as_deref().map_or_else(load_settings, load_settings_from_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("lode-server: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = settings.validate() {
        error!(%e, "refusing to start");
        eprintln!("lode-server: {e}");
        return ExitCode::FAILURE;
    }

    let registry = dispatch::build_registry(&settings);
    info!(
        root = %settings.vault.root_dir,
        tools = registry.len(),
        "vault server ready"
    );

    match dispatch::serve_stdio(&registry).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "stdio loop failed");
            ExitCode::FAILURE
        }
    }
}
