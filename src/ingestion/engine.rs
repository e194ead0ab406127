//! Document Lifecycle Engine
//!
//! Creates records and drives each one through its processing lifecycle.
//!
//! ## Lifecycle
//! `pending -> processing -> (completed | failed)`
//!
//! 1. **Ingest**: the record is stored as `pending` and one processing task is spawned.
//!    The caller gets the `pending` snapshot back without waiting.
//! 2. **Start**: the task moves the record to `processing`.
//! 3. **Process**: after the configured delay the processor for the record's source type runs.
//! 4. **Finish**: the record moves to `completed` with the result, or to `failed` with the
//!    error text if any step failed. Failures never leave the task.
//!
//! Every write goes through `DocumentStore::try_transition`, so no record ever skips
//! `processing` or leaves a terminal state.

use super::registry::ProcessorRegistry;
use super::types::{DocumentStatusView, EngineConfig};
use crate::storage::StoreResult;
use crate::storage::memory::DocumentStore;
use crate::storage::types::*;

use anyhow::Result;
use std::any::Any;
use std::sync::Arc;

pub struct LifecycleEngine {
    /// The record store, shared with the read paths.
    store: Arc<DocumentStore>,
    /// Processors keyed by source type.
    processors: Arc<ProcessorRegistry>,
    config: EngineConfig,
}

impl LifecycleEngine {
    pub fn new(
        store: Arc<DocumentStore>,
        processors: Arc<ProcessorRegistry>,
        config: EngineConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            processors,
            config,
        })
    }

    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Stores a new `pending` document and schedules its processing.
    ///
    /// Exactly one processing task is spawned per call. The task is detached: it
    /// outlives this call and nothing awaits or cancels it. Must be called from
    /// within a tokio runtime.
    pub fn ingest(
        self: &Arc<Self>,
        source_type: SourceType,
        content: impl Into<String>,
    ) -> DocumentRecord {
        let record = self.store.create(NewDocument::new(source_type, content));

        tracing::info!(
            "Ingested document {} ({}, {} bytes)",
            record.id,
            source_type,
            record.content.len()
        );

        let engine = self.clone();
        let id = record.id.clone();
        tokio::spawn(async move {
            engine.process_document(id).await;
        });

        record
    }

    pub fn get(&self, id: &DocumentId) -> StoreResult<DocumentRecord> {
        self.store.get(id)
    }

    pub fn get_status(&self, id: &DocumentId) -> StoreResult<DocumentStatusView> {
        let record = self.store.get(id)?;
        Ok(DocumentStatusView {
            id: record.id,
            status: record.status,
        })
    }

    /// Background routine for one document. Never returns an error: failures are
    /// written into the record instead.
    async fn process_document(&self, id: DocumentId) {
        let Err(err) = self.run_lifecycle(&id).await else {
            return;
        };

        let error = format!("{:#}", err);
        tracing::error!("Processing of document {} failed: {}", id, error);

        match self.store.try_transition(&id, DocumentPatch::failed(error)) {
            Ok(Some(_)) => {
                tracing::info!("Document {} marked as failed", id);
            }
            Ok(None) => {
                tracing::warn!(
                    "Document {} could not be marked as failed from its current state",
                    id
                );
            }
            Err(e) => {
                // The record vanished; it stays in its last known state.
                tracing::warn!("Unable to record failure for document {}: {}", id, e);
            }
        }
    }

    async fn run_lifecycle(&self, id: &DocumentId) -> Result<()> {
        if self
            .store
            .try_transition(id, DocumentPatch::processing())?
            .is_none()
        {
            tracing::warn!("Document {} is no longer pending, skipping processing", id);
            return Ok(());
        }
        tracing::debug!("Document {} is processing", id);

        if !self.config.processing_delay.is_zero() {
            tokio::time::sleep(self.config.processing_delay).await;
        }

        let record = self.store.get(id)?;
        let result = self.run_processor(record).await?;
        let chunk_count = result.chunks.len();
        let char_count = result.char_count;

        match self.store.try_transition(id, DocumentPatch::completed(result))? {
            Some(_) => tracing::info!(
                "Document {} completed ({} chunks, {} chars)",
                id,
                chunk_count,
                char_count
            ),
            None => tracing::warn!("Document {} left processing before it could complete", id),
        }

        Ok(())
    }

    /// Runs the processor in its own task so a panic surfaces as an error
    /// instead of tearing down the lifecycle routine.
    async fn run_processor(&self, record: DocumentRecord) -> Result<ProcessingResult> {
        let processors = self.processors.clone();

        match tokio::spawn(async move { processors.execute(record).await }).await {
            Ok(result) => result,
            Err(join_err) if join_err.is_panic() => Err(anyhow::anyhow!(
                "processor panicked: {}",
                panic_message(join_err.into_panic())
            )),
            Err(join_err) => Err(anyhow::anyhow!("processor task aborted: {}", join_err)),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
