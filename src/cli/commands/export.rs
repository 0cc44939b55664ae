//! Export command implementation
//!
//! This module implements the `export` command, which runs one export
//! against the configured Count/Page service.

use crate::adapters::service::HttpUrlService;
use crate::cli::shutdown_requested;
use crate::config::load_config;
use crate::core::export::{
    BatchOrchestrator, ExportOutcome, ExportSummary, FailureKind, OrchestratorConfig,
};
use crate::domain::ExportRequest;
use crate::presentation::{CopyService, ExportModal, Labels, ModalEvent};
use clap::Args;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Taxonomy the term belongs to (e.g. category, post_tag)
    #[arg(short, long)]
    pub taxonomy: String,

    /// Term identifier
    #[arg(long)]
    pub term_id: u64,

    /// Write the rendered export modal to this HTML file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Copy every exported URL to the clipboard
    #[arg(long)]
    pub copy_all: bool,

    /// Print the exported URLs, one per line
    #[arg(long)]
    pub print_urls: bool,

    /// Override the service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(endpoint) = &self.endpoint {
            tracing::info!(endpoint = %endpoint, "Overriding service endpoint from CLI");
            config.service.endpoint = endpoint.clone();
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let request = match ExportRequest::parse(&self.taxonomy, self.term_id) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let service = match HttpUrlService::new(&config.service) {
            Ok(s) => Arc::new(s),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create service client");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4);
            }
        };

        let modal = Arc::new(ExportModal::new(Labels::default()));
        let orchestrator = BatchOrchestrator::new(
            service,
            modal.clone(),
            OrchestratorConfig::from_config(&config.service),
        );

        println!("🚀 Exporting URLs for {request}...");

        let summary = tokio::select! {
            summary = orchestrator.start_export(request) => summary,
            _ = shutdown_requested(shutdown_signal) => {
                tracing::info!("Export interrupted by user signal");
                println!();
                println!("⚠️  Export interrupted.");
                return Ok(130);
            }
        };

        Self::print_summary(&summary);

        if self.print_urls {
            for url in modal.rendered_urls() {
                println!("{url}");
            }
        }

        if self.copy_all {
            match modal.handle_event(ModalEvent::CopyAll) {
                Some(copy) => {
                    let copied = CopyService::from_config(&config.clipboard)
                        .copy(&copy.text)
                        .await;
                    modal.copy_finished(copy.target, copied, Instant::now());
                    if copied {
                        println!("📋 Copied {} URLs", summary.records_loaded());
                    }
                }
                None => tracing::debug!("Nothing to copy"),
            }
        }

        if let Some(output) = &self.output {
            if let Err(e) = tokio::fs::write(output, modal.render_html()).await {
                tracing::error!(error = %e, path = %output, "Failed to write HTML output");
                eprintln!("Failed to write {output}: {e}");
                return Ok(5);
            }
            println!("📝 Wrote {output}");
        }

        Ok(exit_code(&summary.outcome))
    }

    fn print_summary(summary: &ExportSummary) {
        println!();
        println!("📊 Export Summary:");
        println!("  Term: {}", summary.request);
        if let Some(total) = summary.total_count() {
            println!("  Total: {total}");
        }
        println!("  Loaded: {}", summary.records_loaded());
        println!("  Pages: {}", summary.pages_fetched);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        let labels = Labels::default();
        match &summary.outcome {
            ExportOutcome::Completed { term_label, .. } => {
                println!("✅ Exported {} URLs from {term_label}", summary.records_loaded());
            }
            ExportOutcome::NoResults => println!("ℹ️  {}", labels.no_results),
            ExportOutcome::Partial {
                records,
                total_count,
                ..
            } => {
                println!(
                    "⚠️  {}",
                    labels.partial_load(records.len() as u64, *total_count)
                );
            }
            ExportOutcome::Failed(failure) => {
                println!("❌ {}", failure.user_message(&labels.error));
            }
            ExportOutcome::Abandoned => println!("⚠️  Export superseded"),
        }
    }
}

/// Map an outcome to the process exit code
///
/// 0 success, 1 partial, 2 rejected credentials or parameters,
/// 4 service unreachable, 5 anything else.
pub fn exit_code(outcome: &ExportOutcome) -> i32 {
    match outcome {
        ExportOutcome::Completed { .. } | ExportOutcome::NoResults => 0,
        ExportOutcome::Partial { .. } => 1,
        ExportOutcome::Failed(failure) => match failure.kind {
            FailureKind::Permission | FailureKind::InvalidParameters | FailureKind::NotFound => 2,
            FailureKind::Transport => 4,
            FailureKind::Server => 5,
        },
        ExportOutcome::Abandoned => 5,
    }
}
