//! Domain models and types for URL Exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`Taxonomy`], [`TermId`])
//! - **Export models** ([`ExportRequest`], [`UrlRecord`], [`CountResponse`], [`PageResponse`])
//! - **Error types** ([`ExporterError`], [`ServiceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Raw trigger input is validated once, when the request is built:
//!
//! ```rust
//! use url_exporter::domain::ExportRequest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ExportRequest::parse("category", 12)?;
//! assert_eq!(request.term_id.get(), 12);
//!
//! assert!(ExportRequest::parse("category", 0).is_err());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ExporterError, ServiceError};
pub use ids::{Taxonomy, TermId};
pub use record::{CountResponse, ExportRequest, PageResponse, UrlRecord};
pub use result::Result;
