//! Export orchestration
//!
//! This module provides the core export logic for URL Exporter, including:
//! - Session state with generation-based staleness checks
//! - The batch orchestrator that drives count and page requests
//! - The view trait the orchestrator reports to
//! - Outcome and summary reporting

pub mod orchestrator;
pub mod outcome;
pub mod session;
pub mod summary;
pub mod view;

pub use orchestrator::{BatchOrchestrator, OrchestratorConfig, PROGRESS_THRESHOLD};
pub use outcome::{ExportFailure, ExportOutcome, FailureKind};
pub use session::{ExportSession, Progress, SessionSlot};
pub use summary::ExportSummary;
pub use view::ExportView;
