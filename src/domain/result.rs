//! Result type alias for URL Exporter

use super::errors::ExporterError;

/// Result type alias for URL Exporter operations
///
/// # Examples
///
/// ```
/// use url_exporter::domain::result::Result;
/// use url_exporter::domain::errors::ExporterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExporterError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExporterError>;
