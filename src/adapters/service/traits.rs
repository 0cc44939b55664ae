//! Count/Page service trait definition
//!
//! [`UrlService`] abstracts how the export client reaches the Count and Page
//! services, so the orchestrator can be driven by the HTTP client in
//! production and by scripted fakes in tests.

use crate::domain::{CountResponse, ExportRequest, PageResponse, ServiceError};
use async_trait::async_trait;

/// Client-side view of the Count and Page services
///
/// Implementations perform exactly one request per call and never retry;
/// timeouts are enforced by the caller.
#[async_trait]
pub trait UrlService: Send + Sync {
    /// Total number of published items tagged with the requested term
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] for transport failures and for well-formed
    /// error responses.
    async fn fetch_count(&self, request: &ExportRequest) -> Result<CountResponse, ServiceError>;

    /// One page of records, newest first
    ///
    /// `page` is 1-based. The service may serve fewer than `per_page`
    /// records per page (it clamps the page size).
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] for transport failures and for well-formed
    /// error responses.
    async fn fetch_page(
        &self,
        request: &ExportRequest,
        page: u32,
        per_page: u32,
    ) -> Result<PageResponse, ServiceError>;

    /// Human-readable location of the service, for logging
    fn endpoint(&self) -> &str;
}
