//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for URL Exporter using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use tokio::sync::watch;

/// URL Exporter - export the URLs of every item tagged with a taxonomy term
#[derive(Parser, Debug)]
#[command(name = "url-exporter")]
#[command(version, about, long_about = None)]
#[command(author = "URL Exporter Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "url-exporter.toml", env = "URL_EXPORTER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "URL_EXPORTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the URLs for one taxonomy term
    Export(commands::export::ExportArgs),

    /// Run the reference Count/Page service
    Serve(commands::serve::ServeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Resolve once the shutdown flag is set
///
/// Never resolves if the sender is dropped without signalling.
pub(crate) async fn shutdown_requested(mut shutdown: watch::Receiver<bool>) {
    while !*shutdown.borrow() {
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
