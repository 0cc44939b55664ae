//! Reference Count/Page service
//!
//! Serves the AJAX endpoint the export client talks to, backed by a
//! [`ContentStore`]. Useful for local testing and as an executable
//! description of the service contract.

pub mod handlers;
pub mod state;
pub mod store;

pub use state::AppState;
pub use store::{ContentFixture, ContentStore, InMemoryContentStore, Post, Term};

use crate::config::ServerConfig;
use crate::domain::{ExporterError, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Path of the AJAX endpoint
pub const AJAX_PATH: &str = "/wp-admin/admin-ajax.php";

/// Create the router
///
/// # Routes
///
/// - `GET /wp-admin/admin-ajax.php?action=url_exporter_get_urls` - count and page requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(AJAX_PATH, get(handlers::get_urls))
        .with_state(state)
}

/// Build the content store named by the configuration
///
/// With no `content_path` the store is empty, so every term lookup fails.
pub fn build_store(config: &ServerConfig) -> Result<Arc<dyn ContentStore>> {
    let store = match &config.content_path {
        Some(path) => InMemoryContentStore::from_path(path)?,
        None => {
            tracing::warn!("No server.content_path configured; serving an empty store");
            InMemoryContentStore::default()
        }
    };
    Ok(Arc::new(store))
}

/// Bind and serve until `shutdown` flips to `true`
pub async fn start_server(
    config: Arc<ServerConfig>,
    store: Arc<dyn ContentStore>,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let bind_address: SocketAddr = config.bind_address.parse().map_err(|e| {
        ExporterError::Configuration(format!(
            "Invalid server.bind_address '{}': {e}",
            config.bind_address
        ))
    })?;

    if config.admin_keys.is_empty() {
        tracing::warn!("No server.admin_keys configured; every request will be refused");
    }

    let listener = TcpListener::bind(bind_address).await?;
    let local_address = listener.local_addr()?;

    tracing::info!(address = %local_address, path = AJAX_PATH, "Export service listening");

    serve(listener, AppState::new(store, config), shutdown).await?;

    tracing::info!("Export service stopped");
    Ok(())
}

/// Serve on an already-bound listener
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown.borrow() {
                if shutdown.changed().await.is_err() {
                    // Sender dropped; keep serving
                    std::future::pending::<()>().await;
                }
            }
            tracing::info!("Shutdown requested; draining connections");
        })
        .await
        .map_err(|e| ExporterError::Other(format!("Server error: {e}")))
}

#[cfg(test)]
mod tests;
