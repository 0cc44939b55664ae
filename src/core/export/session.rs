//! Export session state
//!
//! A session lives from the moment the user starts an export until it is
//! superseded by the next one. Every asynchronous response is matched
//! against the session's generation before it may touch shared state, so a
//! slow reply from an abandoned export can never render into the current one.

use crate::domain::{ExportRequest, UrlRecord};
use std::sync::{Mutex, MutexGuard};

/// Loaded/total pair reported to the progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Records accumulated so far
    pub loaded: u64,

    /// Total reported by the Count service
    pub total: u64,
}

impl Progress {
    /// Create a new progress snapshot
    pub fn new(loaded: u64, total: u64) -> Self {
        Self { loaded, total }
    }

    /// Percentage complete, rounded to the nearest integer
    ///
    /// A total of zero reports 0% rather than dividing by zero.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        // round-half-up in integer arithmetic: (200·loaded + total) / (2·total)
        let loaded = u128::from(self.loaded);
        let total = u128::from(self.total);
        ((loaded * 200 + total) / (total * 2)) as u32
    }
}

/// State of one export run
#[derive(Debug, Clone)]
pub struct ExportSession {
    generation: u64,
    request: ExportRequest,
    total_count: u64,
    term_label: String,
    records: Vec<UrlRecord>,
    in_progress: bool,
}

impl ExportSession {
    fn new(generation: u64, request: ExportRequest) -> Self {
        Self {
            generation,
            request,
            total_count: 0,
            term_label: String::new(),
            records: Vec::new(),
            in_progress: true,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &ExportRequest {
        &self.request
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn term_label(&self) -> &str {
        &self.term_label
    }

    pub fn records(&self) -> &[UrlRecord] {
        &self.records
    }

    pub fn loaded_count(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.loaded_count(), self.total_count)
    }

    /// Record the Count service's answer
    pub(crate) fn set_totals(&mut self, total_count: u64, term_label: impl Into<String>) {
        self.total_count = total_count;
        self.term_label = term_label.into();
    }

    /// Append one page of records in server order
    pub(crate) fn append(&mut self, records: Vec<UrlRecord>) {
        self.records.extend(records);
    }

    /// Fill in the term label from a page when the count left it blank
    pub(crate) fn adopt_term_label(&mut self, term_label: &str) {
        if self.term_label.is_empty() && !term_label.is_empty() {
            self.term_label = term_label.to_string();
        }
    }

    pub(crate) fn finish(&mut self) {
        self.in_progress = false;
    }
}

#[derive(Debug, Default)]
struct SlotState {
    last_generation: u64,
    current: Option<ExportSession>,
}

/// Holder for the single current export session
///
/// Starting an export replaces whatever session was there. Mutation goes
/// through [`SessionSlot::with_current`], which only runs its closure when
/// the caller's generation is still the current one.
#[derive(Debug, Default)]
pub struct SessionSlot {
    state: Mutex<SlotState>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // A panic inside a view callback must not wedge every later export
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Begin a new session, superseding any previous one
    ///
    /// Returns the generation the caller must present on every later access.
    pub fn begin(&self, request: ExportRequest) -> u64 {
        let mut state = self.lock();
        state.last_generation += 1;
        let generation = state.last_generation;

        if let Some(previous) = state.current.as_ref().filter(|s| s.is_in_progress()) {
            tracing::debug!(
                superseded = previous.generation(),
                generation,
                "Superseding in-flight export"
            );
        }

        state.current = Some(ExportSession::new(generation, request));
        generation
    }

    /// Whether `generation` still identifies the current session
    pub fn is_current(&self, generation: u64) -> bool {
        self.lock()
            .current
            .as_ref()
            .is_some_and(|s| s.generation() == generation)
    }

    /// Run `f` against the current session if `generation` still owns it
    ///
    /// Returns `None` for a stale generation without calling `f`. The slot
    /// stays locked for the duration of `f`, so `f` must not call back into
    /// this slot.
    pub fn with_current<R>(
        &self,
        generation: u64,
        f: impl FnOnce(&mut ExportSession) -> R,
    ) -> Option<R> {
        let mut state = self.lock();
        match state.current.as_mut() {
            Some(session) if session.generation() == generation => Some(f(session)),
            _ => None,
        }
    }

    /// Copy of the current session, if any
    pub fn snapshot(&self) -> Option<ExportSession> {
        self.lock().current.clone()
    }

    /// Generation handed out most recently
    pub fn current_generation(&self) -> u64 {
        self.lock().last_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn request(term_id: u64) -> ExportRequest {
        ExportRequest::parse("category", term_id).unwrap()
    }

    #[test_case(0, 0 => 0 ; "empty total")]
    #[test_case(50, 120 => 42 ; "first page")]
    #[test_case(100, 120 => 83 ; "second page")]
    #[test_case(120, 120 => 100 ; "complete")]
    #[test_case(1, 3 => 33 ; "rounds down")]
    #[test_case(1, 200 => 1 ; "rounds half up")]
    fn test_progress_percent(loaded: u64, total: u64) -> u32 {
        Progress::new(loaded, total).percent()
    }

    #[test]
    fn test_begin_increments_generation() {
        let slot = SessionSlot::new();
        let first = slot.begin(request(1));
        let second = slot.begin(request(2));

        assert_eq!(first + 1, second);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
        assert_eq!(slot.current_generation(), second);
    }

    #[test]
    fn test_stale_generation_cannot_mutate() {
        let slot = SessionSlot::new();
        let stale = slot.begin(request(1));
        let current = slot.begin(request(2));

        let touched = slot.with_current(stale, |session| {
            session.append(vec![UrlRecord::new("https://a", "A", "May 1, 2025")]);
        });
        assert!(touched.is_none());

        let snapshot = slot.snapshot().unwrap();
        assert_eq!(snapshot.generation(), current);
        assert_eq!(snapshot.request().term_id.get(), 2);
        assert!(snapshot.records().is_empty());
    }

    #[test]
    fn test_session_accumulates_in_order() {
        let slot = SessionSlot::new();
        let generation = slot.begin(request(7));

        slot.with_current(generation, |session| {
            session.set_totals(3, "News");
            session.append(vec![
                UrlRecord::new("https://a", "A", "May 3, 2025"),
                UrlRecord::new("https://b", "B", "May 2, 2025"),
            ]);
            session.append(vec![UrlRecord::new("https://c", "C", "May 1, 2025")]);
            session.finish();
        })
        .unwrap();

        let snapshot = slot.snapshot().unwrap();
        let urls: Vec<_> = snapshot.records().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a", "https://b", "https://c"]);
        assert_eq!(snapshot.progress(), Progress::new(3, 3));
        assert!(!snapshot.is_in_progress());
    }

    #[test]
    fn test_adopt_term_label_only_fills_blank() {
        let slot = SessionSlot::new();
        let generation = slot.begin(request(7));

        slot.with_current(generation, |session| {
            session.adopt_term_label("From page");
            session.adopt_term_label("Ignored");
        });
        assert_eq!(slot.snapshot().unwrap().term_label(), "From page");
    }
}
