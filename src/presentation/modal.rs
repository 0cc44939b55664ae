//! Export modal
//!
//! A headless model of the export dialog. The orchestrator drives it through
//! [`ExportView`]; user interaction arrives as [`ModalEvent`]s. The current
//! state renders to HTML with [`ExportModal::render_html`].

use super::html;
use super::labels::Labels;
use crate::core::export::{ExportFailure, ExportView, Progress};
use crate::domain::UrlRecord;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// How long the "copied" feedback stays up
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Keys the modal reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// User interaction with the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    OverlayClick,
    CloseButton,
    /// Click inside the dialog body; never closes it
    ContentClick,
    KeyUp(Key),
    /// Per-row copy button, by rendered row index
    CopyRow(usize),
    CopyAll,
}

/// What a copy request applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Row(usize),
    All,
}

/// Text the caller should place on the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub target: CopyTarget,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Empty,
    Loading,
    NoResults,
    Error(String),
    Table {
        records: Vec<UrlRecord>,
        term_label: String,
    },
}

#[derive(Debug, Clone, Copy)]
struct CopyFeedback {
    target: CopyTarget,
    shown_at: Instant,
}

#[derive(Debug)]
struct ModalState {
    open: bool,
    body: Body,
    progress: Option<Progress>,
    warning: Option<String>,
    feedback: Option<CopyFeedback>,
}

/// Export dialog state
pub struct ExportModal {
    labels: Labels,
    state: Mutex<ModalState>,
}

impl ExportModal {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            state: Mutex::new(ModalState {
                open: false,
                body: Body::Empty,
                progress: None,
                warning: None,
                feedback: None,
            }),
        }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn lock(&self) -> MutexGuard<'_, ModalState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    /// Visible progress, if the indicator is shown
    pub fn progress(&self) -> Option<Progress> {
        self.lock().progress
    }

    pub fn warning(&self) -> Option<String> {
        self.lock().warning.clone()
    }

    /// Error message currently displayed
    pub fn error_message(&self) -> Option<String> {
        match &self.lock().body {
            Body::Error(message) => Some(message.clone()),
            Body::NoResults => Some(self.labels.no_results.clone()),
            _ => None,
        }
    }

    /// URLs of the rendered table, top to bottom
    pub fn rendered_urls(&self) -> Vec<String> {
        match &self.lock().body {
            Body::Table { records, .. } => records.iter().map(|r| r.url.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// Apply a user interaction
    ///
    /// Any interaction clears earlier copy feedback. Copy events return the
    /// text to place on the clipboard; report the result back through
    /// [`ExportModal::copy_finished`].
    pub fn handle_event(&self, event: ModalEvent) -> Option<CopyRequest> {
        let mut state = self.lock();
        if !state.open {
            return None;
        }
        state.feedback = None;

        match event {
            ModalEvent::OverlayClick | ModalEvent::CloseButton | ModalEvent::KeyUp(Key::Escape) => {
                state.open = false;
                None
            }
            ModalEvent::ContentClick | ModalEvent::KeyUp(Key::Other) => None,
            ModalEvent::CopyRow(index) => match &state.body {
                Body::Table { records, .. } => records.get(index).map(|r| CopyRequest {
                    target: CopyTarget::Row(index),
                    text: r.url.clone(),
                }),
                _ => None,
            },
            ModalEvent::CopyAll => match &state.body {
                Body::Table { records, .. } if !records.is_empty() => Some(CopyRequest {
                    target: CopyTarget::All,
                    text: records
                        .iter()
                        .map(|r| r.url.as_str())
                        .collect::<Vec<_>>()
                        .join("\n"),
                }),
                _ => None,
            },
        }
    }

    /// Record the result of a copy started by [`ExportModal::handle_event`]
    pub fn copy_finished(&self, target: CopyTarget, copied: bool, now: Instant) {
        if copied {
            self.lock().feedback = Some(CopyFeedback {
                target,
                shown_at: now,
            });
        }
    }

    /// Copy target showing "copied" feedback at `now`
    pub fn active_feedback(&self, now: Instant) -> Option<CopyTarget> {
        let state = self.lock();
        state
            .feedback
            .filter(|f| now.saturating_duration_since(f.shown_at) < COPY_FEEDBACK_DURATION)
            .map(|f| f.target)
    }

    /// Render the modal as it currently looks
    pub fn render_html(&self) -> String {
        self.render_html_at(Instant::now())
    }

    pub fn render_html_at(&self, now: Instant) -> String {
        let feedback = self.active_feedback(now);
        let state = self.lock();
        let labels = &self.labels;

        let progress = state
            .progress
            .map(|p| html::render_progress(p, labels))
            .unwrap_or_default();

        let mut body = state
            .warning
            .as_deref()
            .map(html::render_warning)
            .unwrap_or_default();

        body.push_str(&match &state.body {
            Body::Empty => String::new(),
            Body::Loading => html::render_loading(labels),
            Body::NoResults => html::render_no_results(labels),
            Body::Error(message) => html::render_error(message),
            Body::Table {
                records,
                term_label,
            } => {
                let copied_row = match feedback {
                    Some(CopyTarget::Row(index)) => Some(index),
                    _ => None,
                };
                html::render_table(records, term_label, labels, copied_row)
            }
        });

        let copy_all_label = if feedback == Some(CopyTarget::All) {
            format!("✓ {}", labels.copied)
        } else {
            labels.copy_all.clone()
        };

        format!(
            concat!(
                "<div class=\"url-exporter-modal{show}\">",
                "<div class=\"url-exporter-modal-overlay\"></div>",
                "<div class=\"url-exporter-modal-content\">",
                "<div class=\"url-exporter-modal-header\"><h2>{title}</h2>",
                "<button type=\"button\" class=\"url-exporter-close\" aria-label=\"{close}\">&times;</button></div>",
                "{progress}",
                "<div class=\"url-exporter-modal-body\">{body}</div>",
                "<div class=\"url-exporter-modal-footer\">",
                "<button type=\"button\" class=\"button url-exporter-copy-all\">{copy_all}</button>",
                "</div></div></div>"
            ),
            show = if state.open { " show" } else { "" },
            title = html::escape_html(&labels.modal_title),
            close = html::escape_html(&labels.close),
            progress = progress,
            body = body,
            copy_all = html::escape_html(&copy_all_label),
        )
    }
}

impl ExportView for ExportModal {
    fn show_loading(&self) {
        let mut state = self.lock();
        state.open = true;
        state.body = Body::Loading;
        state.progress = None;
        state.warning = None;
        state.feedback = None;
    }

    fn show_progress(&self, progress: Progress) {
        self.lock().progress = Some(progress);
    }

    fn update_progress(&self, progress: Progress) {
        let mut state = self.lock();
        if state.progress.is_some() {
            state.progress = Some(progress);
        }
    }

    fn hide_progress(&self) {
        self.lock().progress = None;
    }

    fn show_no_results(&self) {
        self.lock().body = Body::NoResults;
    }

    fn show_error(&self, failure: &ExportFailure) {
        self.lock().body = Body::Error(failure.user_message(&self.labels.error).to_string());
    }

    fn render_records(&self, records: &[UrlRecord], term_label: &str) {
        self.lock().body = Body::Table {
            records: records.to_vec(),
            term_label: term_label.to_string(),
        };
    }

    fn show_warning(&self, progress: Progress) {
        self.lock().warning = Some(self.labels.partial_load(progress.loaded, progress.total));
    }
}
