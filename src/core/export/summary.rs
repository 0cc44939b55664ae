//! Export summary and reporting
//!
//! This module defines the record of one export run for logging and CLI output.

use super::outcome::ExportOutcome;
use crate::domain::ExportRequest;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// What was exported
    pub request: ExportRequest,

    /// Session generation the run belonged to
    pub generation: u64,

    /// Number of page requests issued
    pub pages_fetched: u32,

    /// Duration of the run
    pub duration: Duration,

    /// How the run ended
    pub outcome: ExportOutcome,
}

impl ExportSummary {
    /// Create a new summary
    pub fn new(request: ExportRequest, generation: u64, outcome: ExportOutcome) -> Self {
        Self {
            request,
            generation,
            pages_fetched: 0,
            duration: Duration::from_secs(0),
            outcome,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the page request count
    pub fn with_pages_fetched(mut self, pages_fetched: u32) -> Self {
        self.pages_fetched = pages_fetched;
        self
    }

    /// Records that reached the table
    pub fn records_loaded(&self) -> usize {
        self.outcome.records().len()
    }

    /// Total reported by the Count service, when known
    pub fn total_count(&self) -> Option<u64> {
        match &self.outcome {
            ExportOutcome::Completed { total_count, .. }
            | ExportOutcome::Partial { total_count, .. } => Some(*total_count),
            ExportOutcome::NoResults => Some(0),
            ExportOutcome::Failed(_) | ExportOutcome::Abandoned => None,
        }
    }

    /// Check if the export finished without losing anything
    pub fn is_successful(&self) -> bool {
        matches!(
            self.outcome,
            ExportOutcome::Completed { .. } | ExportOutcome::NoResults
        )
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            taxonomy = %self.request.taxonomy,
            term_id = %self.request.term_id,
            generation = self.generation,
            outcome = self.outcome.kind(),
            records = self.records_loaded(),
            total = self.total_count().unwrap_or(0),
            pages = self.pages_fetched,
            duration_ms = self.duration.as_millis() as u64,
            "Export finished"
        );

        if let Some(failure) = self.outcome.failure() {
            tracing::warn!(
                generation = self.generation,
                kind = %failure.kind,
                error = %failure.detail,
                "Export ended with an error"
            );
        }
    }
}
