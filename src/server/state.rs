//! Shared state for the reference server

use super::store::ContentStore;
use crate::config::ServerConfig;
use std::sync::Arc;

/// State handed to every request handler
///
/// Cloned per request; both fields are `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
