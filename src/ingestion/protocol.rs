//! HTTP Protocol Definitions
//!
//! Endpoint paths and the Data Transfer Objects (DTOs) exchanged with clients.

use crate::storage::types::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENDPOINT_HEALTH: &str = "/health";
pub const ENDPOINT_DOCUMENTS: &str = "/documents";
pub const ENDPOINT_DOCUMENT: &str = "/documents/:id";
pub const ENDPOINT_DOCUMENT_STATUS: &str = "/documents/:id/status";

/// Body of a document submission.
///
/// Unknown source types are rejected during deserialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentCreateRequest {
    pub source_type: SourceType,
    pub content: String,
}

/// Full view of a document returned to clients.
///
/// `error` and `result` are always serialized, as `null` when absent.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentResponse {
    pub id: DocumentId,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub error: Option<String>,
    pub result: Option<ProcessingResult>,
}

impl From<DocumentRecord> for DocumentResponse {
    fn from(record: DocumentRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            created_at: record.created_at,
            error: record.error,
            result: record.result,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentStatusResponse {
    pub id: DocumentId,
    pub status: DocumentStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
