//! Terminal results of an export run

use crate::domain::{ServiceError, UrlRecord};
use serde::Serialize;
use std::fmt;

/// Classification of a failed export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network failure, timeout or undecodable response
    Transport,
    /// Caller lacks the required capability
    Permission,
    /// Taxonomy or term identifier rejected
    InvalidParameters,
    /// Taxonomy or term does not exist
    NotFound,
    /// Any other error reported by the service
    Server,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Transport => "transport",
            FailureKind::Permission => "permission",
            FailureKind::InvalidParameters => "invalid_parameters",
            FailureKind::NotFound => "not_found",
            FailureKind::Server => "server",
        };
        f.write_str(name)
    }
}

/// Why an export produced no table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub kind: FailureKind,

    /// Message supplied by the service, shown to the user when present
    pub server_message: Option<String>,

    /// Full diagnostic for logs
    pub detail: String,
}

impl ExportFailure {
    /// Message to display, falling back to `generic` for transport failures
    pub fn user_message<'a>(&'a self, generic: &'a str) -> &'a str {
        self.server_message.as_deref().unwrap_or(generic)
    }
}

impl From<&ServiceError> for ExportFailure {
    fn from(error: &ServiceError) -> Self {
        let kind = match error {
            ServiceError::Transport(_)
            | ServiceError::Timeout(_)
            | ServiceError::InvalidResponse(_) => FailureKind::Transport,
            ServiceError::PermissionDenied(_) => FailureKind::Permission,
            ServiceError::InvalidParameters(_) => FailureKind::InvalidParameters,
            ServiceError::NotFound(_) => FailureKind::NotFound,
            ServiceError::Server(_) => FailureKind::Server,
        };

        Self {
            kind,
            server_message: error
                .server_message()
                .filter(|m| !m.trim().is_empty())
                .map(str::to_string),
            detail: error.to_string(),
        }
    }
}

/// How an export run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The term has no published items
    NoResults,

    /// Every page loaded
    Completed {
        records: Vec<UrlRecord>,
        total_count: u64,
        term_label: String,
    },

    /// A page failed after at least one record had loaded
    Partial {
        records: Vec<UrlRecord>,
        total_count: u64,
        term_label: String,
        failure: ExportFailure,
    },

    /// Nothing could be shown
    Failed(ExportFailure),

    /// A newer export superseded this one before it finished
    Abandoned,
}

impl ExportOutcome {
    /// Records the user ended up seeing
    pub fn records(&self) -> &[UrlRecord] {
        match self {
            ExportOutcome::Completed { records, .. } | ExportOutcome::Partial { records, .. } => {
                records
            }
            _ => &[],
        }
    }

    pub fn failure(&self) -> Option<&ExportFailure> {
        match self {
            ExportOutcome::Partial { failure, .. } | ExportOutcome::Failed(failure) => {
                Some(failure)
            }
            _ => None,
        }
    }

    /// Short name for logs and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            ExportOutcome::NoResults => "no_results",
            ExportOutcome::Completed { .. } => "completed",
            ExportOutcome::Partial { .. } => "partial",
            ExportOutcome::Failed(_) => "failed",
            ExportOutcome::Abandoned => "abandoned",
        }
    }
}
