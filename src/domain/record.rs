//! Export request and response models
//!
//! These are the client-side views of what the Count and Page services
//! return, decoupled from the JSON wire envelope.

use super::errors::ExporterError;
use super::ids::{Taxonomy, TermId};
use super::result::Result;
use serde::{Deserialize, Serialize};

/// Identifies the term whose URLs are exported
///
/// Immutable for the duration of one export operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Taxonomy the term belongs to
    pub taxonomy: Taxonomy,

    /// Term identifier within the taxonomy
    pub term_id: TermId,
}

impl ExportRequest {
    /// Create a request from already validated identifiers
    pub fn new(taxonomy: Taxonomy, term_id: TermId) -> Self {
        Self { taxonomy, term_id }
    }

    /// Validate raw trigger input and build a request
    ///
    /// # Errors
    ///
    /// Returns a validation error when the taxonomy is blank or the term id is zero.
    pub fn parse(taxonomy: &str, term_id: u64) -> Result<Self> {
        let taxonomy = Taxonomy::new(taxonomy).map_err(ExporterError::Validation)?;
        let term_id = TermId::new(term_id).map_err(ExporterError::Validation)?;
        Ok(Self::new(taxonomy, term_id))
    }
}

impl std::fmt::Display for ExportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.taxonomy, self.term_id)
    }
}

/// One exported content item, snapshotted at fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// Permalink of the item
    pub url: String,

    /// Item title
    pub title: String,

    /// Formatted publication date
    pub date: String,
}

impl UrlRecord {
    /// Create a new record
    pub fn new(url: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            date: date.into(),
        }
    }
}

/// Result of a count request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountResponse {
    /// Number of published items tagged with the term
    pub total_count: u64,

    /// Human-readable term name
    pub term_label: String,

    /// Page size suggested by the service
    pub batch_size: u32,
}

/// Result of a page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// Records on this page, in server sort order
    pub records: Vec<UrlRecord>,

    /// Whether another page follows
    pub has_more: bool,

    /// 1-based page number that was served
    pub current_page: u32,

    /// Number of pages at the served page size
    pub total_pages: u32,

    /// Total matching items
    pub total_count: u64,

    /// Human-readable term name
    pub term_label: String,
}
