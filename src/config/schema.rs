//! Configuration schema types
//!
//! This module defines the configuration structure for URL Exporter.

use crate::config::SecretString;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Largest page size the Page service will ever serve
pub const MAX_PAGE_SIZE: u32 = 100;

/// Main URL Exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Count/Page service connection used by the export client
    #[serde(default)]
    pub service: ServiceConfig,

    /// Reference Count/Page server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Clipboard settings
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.service.validate()?;
        self.server.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Connection settings for the Count and Page services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Full URL of the AJAX endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Anti-forgery token sent with every request
    #[serde(default)]
    pub nonce: Option<SecretString>,

    /// API key identifying the administrative caller
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Bounded wait for the count request
    #[serde(default = "default_count_timeout_seconds")]
    pub count_timeout_seconds: u64,

    /// Bounded wait for each page request
    #[serde(default = "default_page_timeout_seconds")]
    pub page_timeout_seconds: u64,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// TLS certificate verification enabled
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("service.endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err("service.endpoint must start with http:// or https://".to_string());
        }

        if self.count_timeout_seconds == 0 {
            return Err("service.count_timeout_seconds must be > 0".to_string());
        }

        if self.page_timeout_seconds == 0 {
            return Err("service.page_timeout_seconds must be > 0".to_string());
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(format!(
                "service.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            ));
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            nonce: None,
            api_key: None,
            count_timeout_seconds: default_count_timeout_seconds(),
            page_timeout_seconds: default_page_timeout_seconds(),
            page_size: default_page_size(),
            tls_verify: true,
        }
    }
}

/// Reference Count/Page server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Anti-forgery token callers must present
    #[serde(default)]
    pub nonce: Option<SecretString>,

    /// API keys granted the administrative capability
    #[serde(default)]
    pub admin_keys: Vec<SecretString>,

    /// JSON content fixture served by the in-memory store
    #[serde(default)]
    pub content_path: Option<String>,

    /// chrono format string applied to publication dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Page size reported in count responses and used when `per_page` is absent
    #[serde(default = "default_page_size")]
    pub default_per_page: u32,
}

impl ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "server.bind_address '{}' is not a valid socket address",
                self.bind_address
            ));
        }

        if self.date_format.trim().is_empty() {
            return Err("server.date_format cannot be empty".to_string());
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!(
                "server.date_format '{}' is not a valid strftime format",
                self.date_format
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.default_per_page) {
            return Err(format!(
                "server.default_per_page must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.default_per_page
            ));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            nonce: None,
            admin_keys: Vec::new(),
            content_path: None,
            date_format: default_date_format(),
            default_per_page: default_page_size(),
        }
    }
}

/// Clipboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClipboardConfig {
    /// File written when the system clipboard is unavailable
    #[serde(default)]
    pub fallback_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "http://localhost:8080/wp-admin/admin-ajax.php".to_string()
}

fn default_count_timeout_seconds() -> u64 {
    30
}

fn default_page_timeout_seconds() -> u64 {
    60
}

fn default_page_size() -> u32 {
    50
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
