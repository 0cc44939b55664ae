//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use super::secret::secret_string;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig
/// 4. Applies environment variable overrides (URL_EXPORTER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use url_exporter::config::loader::load_config;
///
/// let config = load_config("url-exporter.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExporterError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExporterError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using the URL_EXPORTER_* prefix
///
/// Environment variables follow the pattern: URL_EXPORTER_<SECTION>_<KEY>,
/// for example URL_EXPORTER_SERVICE_ENDPOINT or URL_EXPORTER_SERVICE_PAGE_SIZE.
/// Unparseable numeric values are ignored and the file value is kept.
fn apply_env_overrides(config: &mut ExporterConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("URL_EXPORTER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Service overrides
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_ENDPOINT") {
        config.service.endpoint = val;
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_NONCE") {
        config.service.nonce = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_API_KEY") {
        config.service.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_COUNT_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.service.count_timeout_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_PAGE_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.service.page_timeout_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.service.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVICE_TLS_VERIFY") {
        config.service.tls_verify = val.parse().unwrap_or(true);
    }

    // Server overrides
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVER_BIND_ADDRESS") {
        config.server.bind_address = val;
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVER_NONCE") {
        config.server.nonce = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVER_ADMIN_KEYS") {
        config.server.admin_keys = val
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| secret_string(k.to_string()))
            .collect();
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_SERVER_CONTENT_PATH") {
        config.server.content_path = Some(val);
    }

    // Clipboard overrides
    if let Ok(val) = std::env::var("URL_EXPORTER_CLIPBOARD_FALLBACK_PATH") {
        config.clipboard.fallback_path = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("URL_EXPORTER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("URL_EXPORTER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
