use super::engine::LifecycleEngine;
use super::protocol::*;
use crate::error::ApiResult;
use crate::storage::types::DocumentId;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn handle_create_document(
    Extension(engine): Extension<Arc<LifecycleEngine>>,
    Json(req): Json<DocumentCreateRequest>,
) -> (StatusCode, Json<DocumentResponse>) {
    let record = engine.ingest(req.source_type, req.content);

    (StatusCode::CREATED, Json(record.into()))
}

pub async fn handle_get_document(
    Extension(engine): Extension<Arc<LifecycleEngine>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DocumentResponse>> {
    let record = engine.get(&DocumentId(id))?;
    tracing::debug!("Document query: {} -> {}", record.id, record.status);

    Ok(Json(record.into()))
}

pub async fn handle_get_document_status(
    Extension(engine): Extension<Arc<LifecycleEngine>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DocumentStatusResponse>> {
    let view = engine.get_status(&DocumentId(id))?;

    Ok(Json(DocumentStatusResponse {
        id: view.id,
        status: view.status,
    }))
}
