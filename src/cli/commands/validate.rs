//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the URL Exporter configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates, so a load failure and a validation
    /// failure both exit with code 2.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Service Endpoint: {}", config.service.endpoint);
        println!(
            "  Nonce: {}",
            if config.service.nonce.is_some() { "set" } else { "not set" }
        );
        println!(
            "  API Key: {}",
            if config.service.api_key.is_some() { "set" } else { "not set" }
        );
        println!(
            "  Timeouts: count {}s, page {}s",
            config.service.count_timeout_seconds, config.service.page_timeout_seconds
        );
        println!("  Page Size: {}", config.service.page_size);
        println!("  Server Bind Address: {}", config.server.bind_address);
        println!("  Server Admin Keys: {}", config.server.admin_keys.len());
        println!(
            "  Server Content: {}",
            config.server.content_path.as_deref().unwrap_or("(empty)")
        );
        println!();
        Ok(0)
    }
}
