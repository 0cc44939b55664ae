//! Count/Page service adapter
//!
//! This module provides the trait the export orchestrator talks to, the JSON
//! wire models shared with the reference server, and the HTTP client.

pub mod client;
pub mod models;
pub mod traits;

pub use client::{HttpUrlService, API_KEY_HEADER};
pub use models::{CountData, Envelope, ErrorCode, ErrorData, PageData, RequestType, ACTION};
pub use traits::UrlService;
