//! Source listing, manual entry and samples

use axum::{extract::State, http::StatusCode, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{Document, ManualSourceRequest};

/// GET /api/sources - All documents, most recent first
pub async fn list_sources(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.store().list())
}

/// POST /api/sources - Add text pasted in by hand
pub async fn add_source(
    State(state): State<AppState>,
    Json(request): Json<ManualSourceRequest>,
) -> Result<(StatusCode, Json<Document>)> {
    let document = state
        .store()
        .add_manual(request.title.as_deref(), &request.content)?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// POST /api/sources/samples - Load the built-in samples
pub async fn load_samples(State(state): State<AppState>) -> Json<Vec<Document>> {
    let loaded = state.store().load_samples();
    tracing::info!("Loaded {} sample sources", loaded.len());
    Json(loaded)
}
