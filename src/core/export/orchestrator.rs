//! Batch orchestrator - drives one export from count to rendered table
//!
//! The orchestrator asks the Count service how many items a term has, then
//! pulls pages from the Page service one at a time until the service says
//! there are no more. Every response is checked against the session
//! generation before it touches state or the view.

use super::outcome::{ExportFailure, ExportOutcome};
use super::session::{Progress, SessionSlot};
use super::summary::ExportSummary;
use super::view::ExportView;
use crate::adapters::service::UrlService;
use crate::config::ServiceConfig;
use crate::domain::{CountResponse, ExportRequest, PageResponse, ServiceError};
use crate::log_page_fetched;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Exports above this many items show a progress indicator
pub const PROGRESS_THRESHOLD: u64 = 50;

/// Orchestrator tuning
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Bounded wait for the Count service
    pub count_timeout: Duration,

    /// Bounded wait for each Page service call
    pub page_timeout: Duration,

    /// Records requested per page
    pub page_size: u32,

    /// Totals strictly above this show the progress indicator
    pub progress_threshold: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            count_timeout: Duration::from_secs(30),
            page_timeout: Duration::from_secs(60),
            page_size: 50,
            progress_threshold: PROGRESS_THRESHOLD,
        }
    }
}

impl OrchestratorConfig {
    /// Build from the `[service]` configuration section
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            count_timeout: Duration::from_secs(config.count_timeout_seconds),
            page_timeout: Duration::from_secs(config.page_timeout_seconds),
            page_size: config.page_size,
            ..Default::default()
        }
    }
}

/// What the page loop does after handling one response
enum Step {
    Next,
    Done(ExportOutcome),
}

/// Drives exports against a [`UrlService`] and reports to an [`ExportView`]
///
/// Cloning is cheap and clones share the same session slot, so starting an
/// export on any clone supersedes an export running on another.
#[derive(Clone)]
pub struct BatchOrchestrator {
    service: Arc<dyn UrlService>,
    view: Arc<dyn ExportView>,
    sessions: Arc<SessionSlot>,
    config: OrchestratorConfig,
}

impl BatchOrchestrator {
    /// Create a new orchestrator with its own session slot
    pub fn new(
        service: Arc<dyn UrlService>,
        view: Arc<dyn ExportView>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            service,
            view,
            sessions: Arc::new(SessionSlot::new()),
            config,
        }
    }

    pub fn sessions(&self) -> &Arc<SessionSlot> {
        &self.sessions
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run an export to completion
    ///
    /// Starting an export abandons any export already in flight on this
    /// orchestrator; the abandoned run returns [`ExportOutcome::Abandoned`]
    /// without having touched the view after it was superseded.
    pub async fn start_export(&self, request: ExportRequest) -> ExportSummary {
        let start_time = Instant::now();
        let generation = self.sessions.begin(request.clone());

        tracing::info!(
            generation,
            taxonomy = %request.taxonomy,
            term_id = %request.term_id,
            endpoint = self.service.endpoint(),
            "Starting export"
        );
        self.view.show_loading();

        let mut pages_fetched = 0;
        let outcome = self.run(generation, &request, &mut pages_fetched).await;

        let summary = ExportSummary::new(request, generation, outcome)
            .with_pages_fetched(pages_fetched)
            .with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }

    async fn run(
        &self,
        generation: u64,
        request: &ExportRequest,
        pages_fetched: &mut u32,
    ) -> ExportOutcome {
        let count = bounded(self.config.count_timeout, self.service.fetch_count(request)).await;

        let proceed = self
            .sessions
            .with_current(generation, |session| match count {
                Err(error) => {
                    session.finish();
                    Some(self.fail(generation, &error))
                }
                Ok(CountResponse {
                    total_count,
                    term_label,
                    ..
                }) => {
                    session.set_totals(total_count, term_label);

                    if total_count == 0 {
                        session.finish();
                        self.view.show_no_results();
                        return Some(ExportOutcome::NoResults);
                    }

                    if total_count > self.config.progress_threshold {
                        self.view.show_progress(session.progress());
                    }
                    None
                }
            });

        match proceed {
            None => return self.abandoned(generation, "count"),
            Some(Some(outcome)) => return outcome,
            Some(None) => {}
        }

        let mut page = 1;
        loop {
            let response = bounded(
                self.config.page_timeout,
                self.service
                    .fetch_page(request, page, self.config.page_size),
            )
            .await;
            *pages_fetched += 1;

            let step = self
                .sessions
                .with_current(generation, |session| match response {
                    Ok(PageResponse {
                        records,
                        has_more,
                        term_label,
                        ..
                    }) => {
                        let received = records.len();
                        session.append(records);
                        session.adopt_term_label(&term_label);

                        let progress = session.progress();
                        log_page_fetched!(generation, page, progress.loaded, progress.total);
                        self.view.update_progress(progress);

                        if has_more && received == 0 {
                            tracing::warn!(
                                generation,
                                page,
                                "Service reported more pages but returned none; stopping"
                            );
                        } else if has_more {
                            return Step::Next;
                        }

                        session.finish();
                        self.view.hide_progress();

                        // Counted items can all be filtered out of the pages
                        if session.loaded_count() == 0 {
                            tracing::info!(
                                generation,
                                total = session.total_count(),
                                "Pages returned no records; showing empty result"
                            );
                            self.view.show_no_results();
                            return Step::Done(ExportOutcome::NoResults);
                        }

                        self.view
                            .render_records(session.records(), session.term_label());
                        Step::Done(ExportOutcome::Completed {
                            records: session.records().to_vec(),
                            total_count: session.total_count(),
                            term_label: session.term_label().to_string(),
                        })
                    }
                    Err(error) => {
                        session.finish();
                        self.view.hide_progress();

                        if session.loaded_count() == 0 {
                            return Step::Done(self.fail(generation, &error));
                        }

                        let progress = session.progress();
                        tracing::warn!(
                            generation,
                            page,
                            loaded = progress.loaded,
                            total = progress.total,
                            error = %error,
                            "Page failed; showing partial results"
                        );
                        self.view
                            .render_records(session.records(), session.term_label());
                        self.view.show_warning(progress);

                        Step::Done(ExportOutcome::Partial {
                            records: session.records().to_vec(),
                            total_count: session.total_count(),
                            term_label: session.term_label().to_string(),
                            failure: ExportFailure::from(&error),
                        })
                    }
                });

            match step {
                None => return self.abandoned(generation, "page"),
                Some(Step::Next) => page += 1,
                Some(Step::Done(outcome)) => return outcome,
            }
        }
    }

    fn fail(&self, generation: u64, error: &ServiceError) -> ExportOutcome {
        let failure = ExportFailure::from(error);
        tracing::error!(
            generation,
            kind = %failure.kind,
            error = %error,
            "Export failed"
        );
        self.view.hide_progress();
        self.view.show_error(&failure);
        ExportOutcome::Failed(failure)
    }

    fn abandoned(&self, generation: u64, stage: &str) -> ExportOutcome {
        tracing::debug!(generation, stage, "Discarding response for superseded export");
        ExportOutcome::Abandoned
    }
}

/// Await a service call, converting an elapsed deadline into a timeout error
async fn bounded<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, ServiceError>>,
) -> Result<T, ServiceError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ServiceError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::outcome::FailureKind;
    use crate::domain::UrlRecord;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq)]
    enum Signal {
        Loading,
        ShowProgress(u32),
        Progress(u64, u64, u32),
        HideProgress,
        NoResults,
        Error(String),
        Render(usize, String),
        Warning(u64, u64),
    }

    #[derive(Default)]
    struct RecordingView {
        signals: Mutex<Vec<Signal>>,
    }

    impl RecordingView {
        fn push(&self, signal: Signal) {
            self.signals.lock().unwrap().push(signal);
        }

        fn signals(&self) -> Vec<Signal> {
            self.signals.lock().unwrap().clone()
        }

        fn percents(&self) -> Vec<u32> {
            self.signals()
                .into_iter()
                .filter_map(|s| match s {
                    Signal::ShowProgress(p) | Signal::Progress(_, _, p) => Some(p),
                    _ => None,
                })
                .collect()
        }
    }

    impl ExportView for RecordingView {
        fn show_loading(&self) {
            self.push(Signal::Loading);
        }
        fn show_progress(&self, progress: Progress) {
            self.push(Signal::ShowProgress(progress.percent()));
        }
        fn update_progress(&self, progress: Progress) {
            self.push(Signal::Progress(
                progress.loaded,
                progress.total,
                progress.percent(),
            ));
        }
        fn hide_progress(&self) {
            self.push(Signal::HideProgress);
        }
        fn show_no_results(&self) {
            self.push(Signal::NoResults);
        }
        fn show_error(&self, failure: &ExportFailure) {
            self.push(Signal::Error(
                failure.user_message("Error loading URLs").to_string(),
            ));
        }
        fn render_records(&self, records: &[UrlRecord], term_label: &str) {
            self.push(Signal::Render(records.len(), term_label.to_string()));
        }
        fn show_warning(&self, progress: Progress) {
            self.push(Signal::Warning(progress.loaded, progress.total));
        }
    }

    /// Serves `total` synthetic records, optionally failing at one page
    struct FakeService {
        total: u64,
        fail_count: Option<ServiceError>,
        fail_page: Option<(u32, ServiceError)>,
        page_calls: Mutex<Vec<(u32, u32)>>,
    }

    impl FakeService {
        fn with_total(total: u64) -> Self {
            Self {
                total,
                fail_count: None,
                fail_page: None,
                page_calls: Mutex::new(Vec::new()),
            }
        }

        fn page_calls(&self) -> Vec<(u32, u32)> {
            self.page_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UrlService for FakeService {
        async fn fetch_count(&self, _request: &ExportRequest) -> Result<CountResponse, ServiceError> {
            if let Some(error) = &self.fail_count {
                return Err(error.clone());
            }
            Ok(CountResponse {
                total_count: self.total,
                term_label: "News".to_string(),
                batch_size: 50,
            })
        }

        async fn fetch_page(
            &self,
            _request: &ExportRequest,
            page: u32,
            per_page: u32,
        ) -> Result<PageResponse, ServiceError> {
            self.page_calls.lock().unwrap().push((page, per_page));
            if let Some((failing, error)) = &self.fail_page {
                if *failing == page {
                    return Err(error.clone());
                }
            }

            let offset = u64::from(page - 1) * u64::from(per_page);
            let end = (offset + u64::from(per_page)).min(self.total);
            let records = (offset..end)
                .map(|i| UrlRecord::new(format!("https://example.com/{i}"), format!("Post {i}"), "May 1, 2025"))
                .collect();
            let total_pages = self.total.div_ceil(u64::from(per_page)) as u32;

            Ok(PageResponse {
                records,
                has_more: page < total_pages,
                current_page: page,
                total_pages,
                total_count: self.total,
                term_label: "News".to_string(),
            })
        }

        fn endpoint(&self) -> &str {
            "fake://service"
        }
    }

    fn request(term_id: u64) -> ExportRequest {
        ExportRequest::parse("category", term_id).unwrap()
    }

    fn orchestrator(
        service: Arc<dyn UrlService>,
        view: Arc<RecordingView>,
    ) -> BatchOrchestrator {
        BatchOrchestrator::new(service, view, OrchestratorConfig::default())
    }

    #[tokio::test]
    async fn test_fetches_every_page_in_order() {
        let service = Arc::new(FakeService::with_total(120));
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(service.clone(), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        assert_eq!(service.page_calls(), vec![(1, 50), (2, 50), (3, 50)]);
        assert_eq!(summary.pages_fetched, 3);
        assert!(summary.is_successful());

        let records = summary.outcome.records();
        assert_eq!(records.len(), 120);
        assert_eq!(records[0].url, "https://example.com/0");
        assert_eq!(records[119].url, "https://example.com/119");
        assert_eq!(view.percents(), vec![0, 42, 83, 100]);
        assert_eq!(
            view.signals().last(),
            Some(&Signal::Render(120, "News".to_string()))
        );
    }

    #[tokio::test]
    async fn test_small_export_skips_progress_indicator() {
        let service = Arc::new(FakeService::with_total(50));
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(service.clone(), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        assert_eq!(service.page_calls().len(), 1);
        assert_eq!(summary.records_loaded(), 50);
        assert!(!view.signals().iter().any(|s| matches!(s, Signal::ShowProgress(_))));
    }

    #[tokio::test]
    async fn test_zero_count_shows_no_results_without_paging() {
        let service = Arc::new(FakeService::with_total(0));
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(service.clone(), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        assert_eq!(summary.outcome, ExportOutcome::NoResults);
        assert!(service.page_calls().is_empty());
        assert_eq!(view.signals(), vec![Signal::Loading, Signal::NoResults]);
    }

    #[tokio::test]
    async fn test_count_failure_shows_server_message() {
        let mut service = FakeService::with_total(10);
        service.fail_count = Some(ServiceError::NotFound("Term not found".to_string()));
        let service = Arc::new(service);
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(service.clone(), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        let failure = summary.outcome.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert!(service.page_calls().is_empty());
        assert!(view
            .signals()
            .contains(&Signal::Error("Term not found".to_string())));
    }

    #[tokio::test]
    async fn test_later_page_failure_renders_partial_results() {
        let mut service = FakeService::with_total(120);
        service.fail_page = Some((3, ServiceError::Transport("connection reset".to_string())));
        let service = Arc::new(service);
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(service.clone(), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        match &summary.outcome {
            ExportOutcome::Partial {
                records,
                total_count,
                failure,
                ..
            } => {
                assert_eq!(records.len(), 100);
                assert_eq!(*total_count, 120);
                assert_eq!(failure.kind, FailureKind::Transport);
            }
            other => panic!("expected partial outcome, got {other:?}"),
        }

        let signals = view.signals();
        let n = signals.len();
        assert_eq!(signals[n - 2], Signal::Render(100, "News".to_string()));
        assert_eq!(signals[n - 1], Signal::Warning(100, 120));
    }

    #[tokio::test]
    async fn test_first_page_failure_shows_generic_error() {
        let mut service = FakeService::with_total(120);
        service.fail_page = Some((1, ServiceError::Transport("connection refused".to_string())));
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(Arc::new(service), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        assert!(matches!(summary.outcome, ExportOutcome::Failed(_)));
        assert!(view
            .signals()
            .contains(&Signal::Error("Error loading URLs".to_string())));
        assert!(!view
            .signals()
            .iter()
            .any(|s| matches!(s, Signal::Render(..))));
    }

    /// Page service that returns `has_more` with an empty page
    struct EmptyPageService;

    #[async_trait]
    impl UrlService for EmptyPageService {
        async fn fetch_count(&self, _request: &ExportRequest) -> Result<CountResponse, ServiceError> {
            Ok(CountResponse {
                total_count: 10,
                term_label: "News".to_string(),
                batch_size: 50,
            })
        }

        async fn fetch_page(
            &self,
            _request: &ExportRequest,
            page: u32,
            _per_page: u32,
        ) -> Result<PageResponse, ServiceError> {
            Ok(PageResponse {
                records: Vec::new(),
                has_more: true,
                current_page: page,
                total_pages: 5,
                total_count: 10,
                term_label: "News".to_string(),
            })
        }

        fn endpoint(&self) -> &str {
            "fake://empty"
        }
    }

    #[tokio::test]
    async fn test_empty_page_with_more_flag_terminates() {
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(Arc::new(EmptyPageService), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        assert_eq!(summary.pages_fetched, 1);
        assert_eq!(summary.outcome, ExportOutcome::NoResults);
        assert_eq!(summary.records_loaded(), 0);
    }

    /// Count reports items but the only page comes back empty and final
    struct FilteredPageService;

    #[async_trait]
    impl UrlService for FilteredPageService {
        async fn fetch_count(&self, _request: &ExportRequest) -> Result<CountResponse, ServiceError> {
            Ok(CountResponse {
                total_count: 3,
                term_label: "News".to_string(),
                batch_size: 50,
            })
        }

        async fn fetch_page(
            &self,
            _request: &ExportRequest,
            page: u32,
            _per_page: u32,
        ) -> Result<PageResponse, ServiceError> {
            Ok(PageResponse {
                records: Vec::new(),
                has_more: false,
                current_page: page,
                total_pages: 1,
                total_count: 3,
                term_label: "News".to_string(),
            })
        }

        fn endpoint(&self) -> &str {
            "fake://filtered"
        }
    }

    #[tokio::test]
    async fn test_empty_final_page_shows_no_results() {
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(Arc::new(FilteredPageService), view.clone());

        let summary = orchestrator.start_export(request(12)).await;

        assert_eq!(summary.pages_fetched, 1);
        assert_eq!(summary.outcome, ExportOutcome::NoResults);
        assert!(summary.is_successful());
        assert_eq!(view.signals().last(), Some(&Signal::NoResults));
        assert!(!view
            .signals()
            .iter()
            .any(|s| matches!(s, Signal::Render(..))));
    }

    #[tokio::test]
    async fn test_empty_final_page_renders_no_results_in_modal() {
        use crate::presentation::{ExportModal, Labels, ModalEvent};

        let modal = Arc::new(ExportModal::new(Labels::default()));
        let orchestrator = BatchOrchestrator::new(
            Arc::new(FilteredPageService),
            modal.clone(),
            OrchestratorConfig::default(),
        );

        orchestrator.start_export(request(12)).await;

        let html = modal.render_html();
        assert!(html.contains("No posts found"));
        assert!(!html.contains("url-exporter-table"));
        assert!(modal.rendered_urls().is_empty());
        assert_eq!(modal.error_message().as_deref(), Some("No posts found"));
        assert!(modal.handle_event(ModalEvent::CopyAll).is_none());
    }

    /// Count service that never answers
    struct HangingService;

    #[async_trait]
    impl UrlService for HangingService {
        async fn fetch_count(&self, _request: &ExportRequest) -> Result<CountResponse, ServiceError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(ServiceError::Transport("unreachable".to_string()))
        }

        async fn fetch_page(
            &self,
            _request: &ExportRequest,
            _page: u32,
            _per_page: u32,
        ) -> Result<PageResponse, ServiceError> {
            Err(ServiceError::Transport("unreachable".to_string()))
        }

        fn endpoint(&self) -> &str {
            "fake://hanging"
        }
    }

    #[tokio::test]
    async fn test_count_timeout_fails_export() {
        let view = Arc::new(RecordingView::default());
        let config = OrchestratorConfig {
            count_timeout: Duration::from_millis(20),
            ..Default::default()
        };
        let orchestrator = BatchOrchestrator::new(Arc::new(HangingService), view.clone(), config);

        let summary = orchestrator.start_export(request(12)).await;

        let failure = summary.outcome.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::Transport);
        assert!(failure.server_message.is_none());
        assert!(view
            .signals()
            .contains(&Signal::Error("Error loading URLs".to_string())));
    }

    /// Holds the count response for term 1 until released
    struct GatedService {
        gate: Notify,
        inner: FakeService,
    }

    #[async_trait]
    impl UrlService for GatedService {
        async fn fetch_count(&self, request: &ExportRequest) -> Result<CountResponse, ServiceError> {
            if request.term_id.get() == 1 {
                self.gate.notified().await;
            }
            self.inner.fetch_count(request).await
        }

        async fn fetch_page(
            &self,
            request: &ExportRequest,
            page: u32,
            per_page: u32,
        ) -> Result<PageResponse, ServiceError> {
            self.inner.fetch_page(request, page, per_page).await
        }

        fn endpoint(&self) -> &str {
            "fake://gated"
        }
    }

    #[tokio::test]
    async fn test_superseded_export_is_discarded() {
        let service = Arc::new(GatedService {
            gate: Notify::new(),
            inner: FakeService::with_total(3),
        });
        let view = Arc::new(RecordingView::default());
        let orchestrator = orchestrator(service.clone(), view.clone());

        let first = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.start_export(request(1)).await })
        };

        // Let the first export register its session and block on the count
        while orchestrator.sessions().current_generation() == 0 {
            tokio::task::yield_now().await;
        }

        let second = orchestrator.start_export(request(2)).await;
        assert!(second.is_successful());
        let signals_after_second = view.signals();

        service.gate.notify_one();
        let first = first.await.unwrap();

        assert_eq!(first.outcome, ExportOutcome::Abandoned);
        assert_eq!(view.signals(), signals_after_second);

        let session = orchestrator.sessions().snapshot().unwrap();
        assert_eq!(session.request().term_id.get(), 2);
        assert_eq!(session.records().len(), 3);
    }

    /// Holds the page response for term 1 until released
    struct StalePageService {
        page_requested: Notify,
        release: Notify,
    }

    #[async_trait]
    impl UrlService for StalePageService {
        async fn fetch_count(&self, _request: &ExportRequest) -> Result<CountResponse, ServiceError> {
            Ok(CountResponse {
                total_count: 1,
                term_label: "News".to_string(),
                batch_size: 50,
            })
        }

        async fn fetch_page(
            &self,
            request: &ExportRequest,
            page: u32,
            _per_page: u32,
        ) -> Result<PageResponse, ServiceError> {
            let url = if request.term_id.get() == 1 {
                self.page_requested.notify_one();
                self.release.notified().await;
                "https://example.com/stale"
            } else {
                "https://example.com/fresh"
            };

            Ok(PageResponse {
                records: vec![UrlRecord::new(url, "Post", "May 1, 2025")],
                has_more: false,
                current_page: page,
                total_pages: 1,
                total_count: 1,
                term_label: "News".to_string(),
            })
        }

        fn endpoint(&self) -> &str {
            "fake://stale-page"
        }
    }

    #[tokio::test]
    async fn test_stale_page_is_not_merged_into_new_export() {
        use crate::presentation::{ExportModal, Labels};

        let service = Arc::new(StalePageService {
            page_requested: Notify::new(),
            release: Notify::new(),
        });
        let modal = Arc::new(ExportModal::new(Labels::default()));
        let orchestrator =
            BatchOrchestrator::new(service.clone(), modal.clone(), OrchestratorConfig::default());

        let first = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.start_export(request(1)).await })
        };
        service.page_requested.notified().await;

        let second = orchestrator.start_export(request(2)).await;
        assert!(second.is_successful());

        service.release.notify_one();
        let first = first.await.unwrap();

        assert_eq!(first.outcome, ExportOutcome::Abandoned);
        assert_eq!(first.pages_fetched, 1);
        assert_eq!(modal.rendered_urls(), vec!["https://example.com/fresh".to_string()]);

        let session = orchestrator.sessions().snapshot().unwrap();
        assert_eq!(session.generation(), second.generation);
        assert_eq!(session.loaded_count(), 1);
        assert_eq!(session.records()[0].url, "https://example.com/fresh");
        assert!(!session.is_in_progress());
    }
}
