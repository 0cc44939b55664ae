//! Serve command implementation
//!
//! Runs the reference Count/Page service until interrupted.

use crate::config::load_config;
use crate::server::{build_store, start_server};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the bind address (e.g. 127.0.0.1:8080)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Override the JSON content fixture
    #[arg(long)]
    pub content: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }
        if let Some(content) = &self.content {
            config.server.content_path = Some(content.clone());
        }

        if let Err(e) = config.validate() {
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let store = match build_store(&config.server) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load content");
                eprintln!("Failed to load content: {e}");
                return Ok(2);
            }
        };

        println!("🌐 Serving export service on {}", config.server.bind_address);

        match start_server(Arc::new(config.server), store, shutdown_signal).await {
            Ok(()) => Ok(0),
            Err(e) => {
                tracing::error!(error = %e, "Export service failed");
                eprintln!("Export service failed: {e}");
                Ok(4)
            }
        }
    }
}
