//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "url-exporter.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing URL Exporter configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - URL_EXPORTER_NONCE");
                println!("     - URL_EXPORTER_API_KEY");
                println!("  3. Validate configuration: url-exporter validate-config");
                println!("  4. Run export: url-exporter export --taxonomy category --term-id 12");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

/// Sample configuration written by `init`
pub fn sample_config() -> &'static str {
    r#"# URL Exporter Configuration File

[application]
log_level = "info"

[service]
# AJAX endpoint of the Count/Page service
endpoint = "http://localhost:8080/wp-admin/admin-ajax.php"
nonce = "${URL_EXPORTER_NONCE}"
api_key = "${URL_EXPORTER_API_KEY}"
count_timeout_seconds = 30
page_timeout_seconds = 60
# 1-100; the service never returns more than 100 per page
page_size = 50
tls_verify = true

[server]
bind_address = "127.0.0.1:8080"
nonce = "${URL_EXPORTER_NONCE}"
admin_keys = ["${URL_EXPORTER_API_KEY}"]
# content_path = "content.json"
date_format = "%B %-d, %Y"
default_per_page = 50

[clipboard]
# Written when no system clipboard utility is available
# fallback_path = "./exported-urls.txt"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
}
