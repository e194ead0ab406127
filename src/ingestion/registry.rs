//! Processor Registry
//!
//! Maps each `SourceType` to the async routine that turns a document's content
//! into a `ProcessingResult`. The lifecycle engine stays generic and looks the
//! processor up at run time.

use super::chunker::chunk_content;
use crate::storage::types::{DocumentRecord, ProcessingResult, SourceType};

use anyhow::Result;
use dashmap::DashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a thread-safe, asynchronous document processor.
/// It takes a record snapshot and resolves to the processing output.
pub type ProcessorFn = Arc<
    dyn Fn(DocumentRecord) -> Pin<Box<dyn Future<Output = Result<ProcessingResult>> + Send>>
        + Send
        + Sync,
>;

/// Registry holding the processor for each source type.
pub struct ProcessorRegistry {
    processors: DashMap<SourceType, ProcessorFn>,
}

impl ProcessorRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a registry with the chunking processor registered for every source type.
    pub fn with_defaults() -> Arc<Self> {
        let registry = Self::new();
        for source_type in SourceType::ALL {
            registry.register(source_type, |record| async move {
                Ok(chunk_content(&record.content))
            });
        }
        registry
    }

    /// Registers (or replaces) the processor for `source_type`.
    pub fn register<F, Fut>(&self, source_type: SourceType, processor: F)
    where
        F: Fn(DocumentRecord) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ProcessingResult>> + Send + 'static,
    {
        // Box::pin erases the concrete future type so different processors fit one map.
        let processor_fn: ProcessorFn = Arc::new(move |record: DocumentRecord| {
            Box::pin(processor(record))
                as Pin<Box<dyn Future<Output = Result<ProcessingResult>> + Send>>
        });

        self.processors.insert(source_type, processor_fn);

        tracing::debug!("Registered processor for source type: {}", source_type);
    }

    /// Runs the processor registered for the record's source type.
    ///
    /// # Returns
    /// * `Ok(result)` if the processor succeeded.
    /// * `Err` if the processor failed or none is registered for the source type.
    pub async fn execute(&self, record: DocumentRecord) -> Result<ProcessingResult> {
        let source_type = record.source_type;

        // Clone the Arc out so the map lock is not held across the await.
        let processor = self
            .processors
            .get(&source_type)
            .map(|entry| entry.value().clone());

        match processor {
            Some(processor) => {
                tracing::debug!(
                    "Processing document {} as {} ({} bytes)",
                    record.id,
                    source_type,
                    record.content.len()
                );
                processor(record).await
            }
            None => {
                let error = format!("No processor registered for source type: {}", source_type);
                tracing::error!("{}", error);
                Err(anyhow::anyhow!(error))
            }
        }
    }

    pub fn has_processor(&self, source_type: SourceType) -> bool {
        self.processors.contains_key(&source_type)
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self {
            processors: DashMap::new(),
        }
    }
}
