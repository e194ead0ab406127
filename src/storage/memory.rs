use super::error::{StoreError, StoreResult};
use super::types::*;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// In-memory record store.
///
/// Every mutation runs under the write lock of the entry's DashMap shard, so a
/// patch is applied in full before any reader can see the record again.
/// Callers only ever receive cloned snapshots.
pub struct DocumentStore {
    records: DashMap<DocumentId, DocumentRecord>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Assigns a fresh id to `document`, stores it as `Pending` and returns the
    /// stored snapshot.
    pub fn create(&self, document: NewDocument) -> DocumentRecord {
        let mut record = document.into_record(DocumentId::new());

        loop {
            match self.records.entry(record.id.clone()) {
                Entry::Vacant(slot) => {
                    let stored = slot.insert(record);
                    tracing::debug!("Stored document {}", stored.id);
                    return stored.value().clone();
                }
                Entry::Occupied(_) => {
                    tracing::warn!("Document id {} already in use, regenerating", record.id);
                    record.id = DocumentId::new();
                }
            }
        }
    }

    pub fn get(&self, id: &DocumentId) -> StoreResult<DocumentRecord> {
        self.records
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Merges `patch` into the record and returns the updated snapshot.
    ///
    /// Last write wins; no transition check is made. The lifecycle goes through
    /// `try_transition` instead.
    pub fn update(&self, id: &DocumentId, patch: DocumentPatch) -> StoreResult<DocumentRecord> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        patch.apply_to(entry.value_mut());
        Ok(entry.value().clone())
    }

    /// Applies `patch` only if the record's current status may legally move to
    /// the patch's status. The check and the write happen under one lock.
    ///
    /// # Returns
    /// * `Ok(Some(record))` with the updated snapshot if the transition was applied.
    /// * `Ok(None)` if the transition is not allowed; the record is left untouched.
    /// * `Err(NotFound)` if the record does not exist.
    pub fn try_transition(
        &self,
        id: &DocumentId,
        patch: DocumentPatch,
    ) -> StoreResult<Option<DocumentRecord>> {
        let mut entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let current = entry.status;
        let next = patch.status();
        if !current.can_transition_to(next) {
            tracing::warn!(
                "Rejected transition {} -> {} for document {}",
                current,
                next,
                id
            );
            return Ok(None);
        }

        patch.apply_to(entry.value_mut());
        tracing::trace!("Document {} moved {} -> {}", id, current, next);
        Ok(Some(entry.value().clone()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();

        for entry in self.records.iter() {
            match entry.status {
                DocumentStatus::Pending => counts.pending += 1,
                DocumentStatus::Processing => counts.processing += 1,
                DocumentStatus::Completed => counts.completed += 1,
                DocumentStatus::Failed => counts.failed += 1,
            }
        }

        counts
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
