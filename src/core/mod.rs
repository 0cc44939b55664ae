//! Core business logic for URL Exporter.
//!
//! # Modules
//!
//! - [`export`] - Export sessions, batch orchestration and reporting
//!
//! # Export Workflow
//!
//! 1. **Begin Session**: supersede any export already in flight
//! 2. **Count**: ask the Count service for the total and term label
//! 3. **Page**: fetch pages sequentially until the service reports no more
//! 4. **Render**: hand the accumulated records to the view
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url_exporter::adapters::service::HttpUrlService;
//! use url_exporter::config::load_config;
//! use url_exporter::core::export::{BatchOrchestrator, OrchestratorConfig};
//! use url_exporter::domain::ExportRequest;
//! use url_exporter::presentation::{ExportModal, Labels};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("url-exporter.toml")?;
//! let service = Arc::new(HttpUrlService::new(&config.service)?);
//! let modal = Arc::new(ExportModal::new(Labels::default()));
//!
//! let orchestrator = BatchOrchestrator::new(
//!     service,
//!     modal.clone(),
//!     OrchestratorConfig::from_config(&config.service),
//! );
//!
//! let summary = orchestrator
//!     .start_export(ExportRequest::parse("category", 12)?)
//!     .await;
//! println!("Loaded {} URLs", summary.records_loaded());
//! # Ok(())
//! # }
//! ```

pub mod export;
