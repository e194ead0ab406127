use super::types::DocumentId;

/// Errors returned by the `DocumentStore`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Document {0} not found")]
    NotFound(DocumentId),
}

pub type StoreResult<T> = Result<T, StoreError>;
