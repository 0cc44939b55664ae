//! User-facing strings

use serde::{Deserialize, Serialize};

/// English UI strings shown in the export modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub modal_title: String,
    pub loading: String,
    pub error: String,
    pub no_results: String,
    pub term_heading: String,
    pub total_heading: String,
    pub title_column: String,
    pub url_column: String,
    pub date_column: String,
    pub actions_column: String,
    pub copy: String,
    pub copied: String,
    pub copy_all: String,
    pub close: String,
    pub export_action: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            modal_title: "URL List".to_string(),
            loading: "Loading URLs...".to_string(),
            error: "Error loading URLs".to_string(),
            no_results: "No posts found".to_string(),
            term_heading: "Term".to_string(),
            total_heading: "Total".to_string(),
            title_column: "Title".to_string(),
            url_column: "URL".to_string(),
            date_column: "Date".to_string(),
            actions_column: "Actions".to_string(),
            copy: "Copy".to_string(),
            copied: "Copied!".to_string(),
            copy_all: "Copy All URLs".to_string(),
            close: "Close".to_string(),
            export_action: "Export URLs".to_string(),
        }
    }
}

impl Labels {
    /// Progress label, e.g. "Loading URLs... (42%)"
    pub fn progress(&self, percent: u32) -> String {
        format!("{} ({percent}%)", self.loading)
    }

    /// Warning shown above a partially loaded table
    pub fn partial_load(&self, loaded: u64, total: u64) -> String {
        format!("Loaded {loaded} of {total} URLs. The remaining URLs could not be loaded.")
    }
}
