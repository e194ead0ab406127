//! HTTP router and background reporting.

use crate::ingestion::engine::LifecycleEngine;
use crate::ingestion::handlers::*;
use crate::ingestion::protocol::*;
use crate::storage::memory::DocumentStore;

use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Duration;

/// Builds the HTTP router on top of a shared engine.
pub fn build_router(engine: Arc<LifecycleEngine>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_DOCUMENTS, post(handle_create_document))
        .route(ENDPOINT_DOCUMENT, get(handle_get_document))
        .route(ENDPOINT_DOCUMENT_STATUS, get(handle_get_document_status))
        .layer(Extension(engine))
}

/// Spawns a task that logs store status counts every `interval`.
pub fn spawn_stats_reporter(
    store: Arc<DocumentStore>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            let counts = store.status_counts();
            tracing::info!(
                "Store stats: {} documents (pending={} processing={} completed={} failed={})",
                counts.total(),
                counts.pending,
                counts.processing,
                counts.completed,
                counts.failed
            );
        }
    })
}
