//! Ingestion Types
//!
//! Engine-facing types that are not part of the stored record.

use crate::storage::types::{DocumentId, DocumentStatus};
use serde::Serialize;
use std::time::Duration;

/// Default simulated processing latency.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(300);

/// Lightweight status projection of a record, used for polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStatusView {
    pub id: DocumentId,
    pub status: DocumentStatus,
}

/// Tuning knobs for the lifecycle engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long the processing task suspends between `processing` and the transform.
    pub processing_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }
}
