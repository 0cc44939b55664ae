//! Logging and observability
//!
//! Structured logging with:
//! - Human-readable console output on stderr
//! - Optional JSON file logging with rotation
//! - Configurable log levels (overridable through `RUST_LOG`)
//!
//! # Example
//!
//! ```no_run
//! use url_exporter::logging::init_logging;
//! use url_exporter::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(taxonomy = "category", term_id = 12, "Starting export");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a fetched page of an export
///
/// # Example
///
/// ```no_run
/// use url_exporter::log_page_fetched;
///
/// log_page_fetched!(1u64, 2u32, 100usize, 120u64);
/// ```
#[macro_export]
macro_rules! log_page_fetched {
    ($generation:expr, $page:expr, $loaded:expr, $total:expr) => {
        tracing::debug!(
            generation = $generation,
            page = $page,
            loaded = $loaded,
            total = $total,
            "Page fetched"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use url_exporter::log_error_with_context;
/// use url_exporter::domain::ExporterError;
///
/// let error = ExporterError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
