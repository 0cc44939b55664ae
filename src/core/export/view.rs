//! Signals the orchestrator sends to whatever is displaying the export

use super::outcome::ExportFailure;
use super::session::Progress;
use crate::domain::UrlRecord;

/// Receiver of export state changes
///
/// Calls arrive in order for a single session and are made while the
/// session slot is held, so implementations must return promptly and must
/// not start another export from inside a callback.
pub trait ExportView: Send + Sync {
    /// Open the modal in its loading state
    fn show_loading(&self);

    /// Reveal the progress indicator for large exports
    fn show_progress(&self, progress: Progress);

    /// Report records loaded so far
    fn update_progress(&self, progress: Progress);

    fn hide_progress(&self);

    fn show_no_results(&self);

    fn show_error(&self, failure: &ExportFailure);

    /// Render the accumulated records as a table
    fn render_records(&self, records: &[UrlRecord], term_label: &str);

    /// Announce that only part of the term loaded
    fn show_warning(&self, progress: Progress);
}
