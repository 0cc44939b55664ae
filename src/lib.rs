// URL Exporter - Taxonomy term URL export client and reference service
// Copyright (c) 2025 URL Exporter Contributors
// Licensed under the MIT License

//! # URL Exporter
//!
//! URL Exporter collects the public URL, title and publication date of every
//! published item tagged with a taxonomy term, and presents them as a table
//! that can be copied row by row or all at once.
//!
//! ## Overview
//!
//! - **Counting** the items of a term through the Count service
//! - **Paging** through them sequentially via the Page service
//! - **Presenting** the result in a modal with progress, warning and error states
//! - **Serving** the Count/Page contract from an in-memory content store
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export sessions and the batch orchestrator
//! - [`adapters`] - Count/Page service client and wire models
//! - [`presentation`] - Export modal, HTML rendering and clipboard
//! - [`server`] - Reference Count/Page service
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url_exporter::adapters::service::HttpUrlService;
//! use url_exporter::config::load_config;
//! use url_exporter::core::export::{BatchOrchestrator, OrchestratorConfig};
//! use url_exporter::domain::ExportRequest;
//! use url_exporter::presentation::{ExportModal, Labels, ModalEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("url-exporter.toml")?;
//!     let modal = Arc::new(ExportModal::new(Labels::default()));
//!     let orchestrator = BatchOrchestrator::new(
//!         Arc::new(HttpUrlService::new(&config.service)?),
//!         modal.clone(),
//!         OrchestratorConfig::from_config(&config.service),
//!     );
//!
//!     let summary = orchestrator
//!         .start_export(ExportRequest::parse("category", 12)?)
//!         .await;
//!     println!("Exported {} URLs", summary.records_loaded());
//!
//!     if let Some(copy) = modal.handle_event(ModalEvent::CopyAll) {
//!         println!("{}", copy.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], built on [`domain::ExporterError`].
//! Service failures never escape an export: the orchestrator turns them
//! into an [`core::export::ExportOutcome`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod presentation;
pub mod server;
