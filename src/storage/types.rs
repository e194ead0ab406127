//! Document Record Types
//!
//! Defines the record held by the `DocumentStore`, its lifecycle status and the
//! patch type through which the lifecycle mutates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a document.
///
/// Wrapper around a UUID v4 string. Generated by the store on creation and
/// never reused for the lifetime of the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Generates a new random UUID v4-based DocumentId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The kind of source a document was submitted as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Pdf,
    Html,
    Text,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [SourceType::Pdf, SourceType::Html, SourceType::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Pdf => "pdf",
            SourceType::Html => "html",
            SourceType::Text => "text",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the lifecycle state of a document.
///
/// Legal transitions are `Pending -> Processing -> (Completed | Failed)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Document has been stored but processing has not started.
    Pending,
    /// The processing task has picked up the document.
    Processing,
    /// Processing finished; `result` is populated.
    Completed,
    /// Processing failed; `error` is populated.
    Failed,
}

impl DocumentStatus {
    /// `Completed` and `Failed` never move again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DocumentStatus::Completed | DocumentStatus::Failed)
    }

    /// Returns `true` if a record in `self` may move to `next`.
    pub fn can_transition_to(&self, next: DocumentStatus) -> bool {
        matches!(
            (self, next),
            (DocumentStatus::Pending, DocumentStatus::Processing)
                | (DocumentStatus::Processing, DocumentStatus::Completed)
                | (DocumentStatus::Processing, DocumentStatus::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a successful processing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessingResult {
    /// Consecutive slices of the content, in order.
    pub chunks: Vec<String>,
    /// Number of characters in the original content.
    pub char_count: usize,
}

/// A document record as held by the `DocumentStore`.
///
/// `id`, `source_type`, `content` and `created_at` never change after creation.
/// `status`, `error` and `result` only change through a `DocumentPatch`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub source_type: SourceType,
    pub content: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub error: Option<String>,
    pub result: Option<ProcessingResult>,
}

/// A record that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub source_type: SourceType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewDocument {
    pub fn new(source_type: SourceType, content: impl Into<String>) -> Self {
        Self {
            source_type,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Attaches an id, producing the initial `Pending` record.
    pub(crate) fn into_record(self, id: DocumentId) -> DocumentRecord {
        DocumentRecord {
            id,
            source_type: self.source_type,
            content: self.content,
            status: DocumentStatus::Pending,
            created_at: self.created_at,
            error: None,
            result: None,
        }
    }
}

/// The mutable part of a record, applied atomically by the store.
///
/// Status, error and result are always overwritten together, so a patch
/// can only produce records whose error/result match their status.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPatch {
    status: DocumentStatus,
    error: Option<String>,
    result: Option<ProcessingResult>,
}

impl DocumentPatch {
    pub fn processing() -> Self {
        Self {
            status: DocumentStatus::Processing,
            error: None,
            result: None,
        }
    }

    pub fn completed(result: ProcessingResult) -> Self {
        Self {
            status: DocumentStatus::Completed,
            error: None,
            result: Some(result),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: DocumentStatus::Failed,
            error: Some(error.into()),
            result: None,
        }
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub(crate) fn apply_to(self, record: &mut DocumentRecord) {
        record.status = self.status;
        record.error = self.error;
        record.result = self.result;
    }
}

/// Per-status record totals, used for periodic reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.processing + self.completed + self.failed
    }
}
