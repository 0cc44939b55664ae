//! Configuration management for URL Exporter.
//!
//! URL Exporter uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `URL_EXPORTER_<SECTION>_<KEY>` environment overrides
//! - Default values for every optional setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ServiceConfig`] - Count/Page service endpoint, token, timeouts, page size
//! - [`ServerConfig`] - Reference Count/Page server
//! - [`ClipboardConfig`] - Clipboard fallback target
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [service]
//! endpoint = "https://blog.example.com/wp-admin/admin-ajax.php"
//! nonce = "${URL_EXPORTER_NONCE}"
//! api_key = "${URL_EXPORTER_API_KEY}"
//! count_timeout_seconds = 30
//! page_timeout_seconds = 60
//! page_size = 50
//!
//! [server]
//! bind_address = "127.0.0.1:8080"
//! nonce = "${URL_EXPORTER_NONCE}"
//! admin_keys = ["${URL_EXPORTER_API_KEY}"]
//! content_path = "content.json"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ClipboardConfig, ExporterConfig, LoggingConfig, ServerConfig,
    ServiceConfig, MAX_PAGE_SIZE,
};
pub use secret::{secret_matches, secret_string, secret_string_opt, SecretString, SecretValue};
